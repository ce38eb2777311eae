//! Place marker consistency rule.
//!
//! `QString::arg()` fills `%1`..`%99` by number, so a finished translation
//! must use the same numbered markers as its source. Numerus forms may drop
//! `%n` (e.g. "one file" for the singular form), plain messages may not.

use std::collections::BTreeSet;

use crate::{
    core::{Catalog, CheckContext, MessageContext, Translation},
    issues::PlaceMarkerIssue,
    rules::helpers::{IgnoredContexts, check_catalogs, translated_messages},
    utils::{PlaceMarkers, place_markers},
};

pub fn check_place_marker_issues(ctx: &CheckContext) -> Vec<PlaceMarkerIssue> {
    check_catalogs(ctx, check_place_markers)
}

pub fn check_place_markers(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<PlaceMarkerIssue> {
    translated_messages(catalog, ignored)
        .filter_map(|m| {
            let source = place_markers(&m.source);
            let is_numerus = matches!(m.translation, Translation::Numerus(_));

            let mut diff = MarkerDiff::default();
            for text in m.translation.texts().into_iter().filter(|t| !t.is_empty()) {
                diff.add(&source, &place_markers(text), is_numerus);
            }

            (!diff.is_empty()).then(|| PlaceMarkerIssue {
                context: MessageContext::from_message(m),
                missing: diff.missing.into_labels(),
                unexpected: diff.unexpected.into_labels(),
            })
        })
        .collect()
}

#[derive(Default)]
struct MarkerDiff {
    missing: MarkerSet,
    unexpected: MarkerSet,
}

impl MarkerDiff {
    fn add(&mut self, source: &PlaceMarkers, translation: &PlaceMarkers, count_optional: bool) {
        self.missing
            .numbered
            .extend(source.numbered.difference(&translation.numbered));
        self.unexpected
            .numbered
            .extend(translation.numbered.difference(&source.numbered));

        if source.count && !translation.count && !count_optional {
            self.missing.count = true;
        }
        if translation.count && !source.count {
            self.unexpected.count = true;
        }
    }

    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

#[derive(Default)]
struct MarkerSet {
    numbered: BTreeSet<u32>,
    count: bool,
}

impl MarkerSet {
    fn is_empty(&self) -> bool {
        self.numbered.is_empty() && !self.count
    }

    /// `%1`, `%2`, ... then `%n`.
    fn into_labels(self) -> Vec<String> {
        let mut labels: Vec<String> = self.numbered.iter().map(|n| format!("%{}", n)).collect();
        if self.count {
            labels.push("%n".to_string());
        }
        labels
    }
}
