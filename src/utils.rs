//! Text helpers shared by the rules and the translator.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// `%1`..`%99`, `%L1`, `%n` and `%Ln`.
static PLACE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(n|[1-9][0-9]?)").unwrap());

/// Place markers found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceMarkers {
    /// Numbered markers, `%L2` counted as `%2`.
    pub numbered: BTreeSet<u32>,
    /// True if the text contains `%n` (or `%Ln`).
    pub count: bool,
}

/// Collect the place markers of a text.
///
/// ```
/// use tscat::utils::place_markers;
///
/// let markers = place_markers("Copied %n file(s) to %1 (%L2)");
/// assert!(markers.count);
/// assert_eq!(markers.numbered.into_iter().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn place_markers(text: &str) -> PlaceMarkers {
    let mut markers = PlaceMarkers::default();
    for cap in PLACE_MARKER_REGEX.captures_iter(text) {
        match &cap[1] {
            "n" => markers.count = true,
            digits => {
                if let Ok(n) = digits.parse() {
                    markers.numbered.insert(n);
                }
            }
        }
    }
    markers
}

/// Replace `%n` and `%Ln` with the decimal count.
pub fn replace_count(text: &str, n: i64) -> String {
    if !text.contains('%') {
        return text.to_string();
    }
    text.replace("%Ln", &n.to_string())
        .replace("%n", &n.to_string())
}

/// True if the text has a keyboard accelerator (`&File`).
///
/// `&&` is a literal ampersand, `& ` is not an accelerator, and an
/// HTML entity (`&nbsp;`) means the text is rich text without accelerators.
pub fn has_accelerator(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        let Some(next) = chars.next() else {
            return false;
        };
        if next == '&' || next == ' ' || next.is_control() {
            continue;
        }
        if !next.is_ascii_alphabetic() {
            return true;
        }
        let mut rest = chars.clone();
        while rest.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            rest.next();
        }
        return rest.peek() != Some(&';');
    }
    false
}

/// Normalized trailing punctuation of a text, empty if none.
///
/// Full-width and ideographic forms map to their ASCII counterparts and an
/// ellipsis (`...` or `…`) is reported as `…`.
pub fn ending_punctuation(text: &str) -> &'static str {
    let text = text.trim_end();
    if text.ends_with("...") || text.ends_with('…') {
        return "…";
    }
    match text.chars().last() {
        Some('.' | '。' | '．') => ".",
        Some(':' | '：') => ":",
        Some('?' | '？' | '؟') => "?",
        Some('!' | '！') => "!",
        _ => "",
    }
}
