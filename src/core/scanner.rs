//! Catalog discovery.
//!
//! Walks the catalog root and keeps files matching the include patterns and
//! none of the ignore patterns. `.ts` is shared with TypeScript sources, so
//! every candidate is sniffed and only XML documents are kept.

use std::{
    collections::BTreeSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{Catalog, parsers::ts::looks_like_ts_catalog};

/// Bytes read from each candidate to decide whether it is XML.
const SNIFF_LEN: usize = 512;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for catalogs.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Catalog files, sorted.
    pub files: BTreeSet<String>,
    /// Matching files that turned out not to be XML (e.g. TypeScript).
    pub non_catalogs: Vec<String>,
    /// Paths that could not be accessed.
    pub skipped_count: usize,
}

/// A compiled include or ignore entry.
enum PathFilter {
    Glob(Pattern),
    /// Literal path relative to the root, matched as a prefix.
    Literal(PathBuf),
}

impl PathFilter {
    fn compile(patterns: &[String], kind: &str) -> Vec<PathFilter> {
        let mut filters = Vec::new();
        for p in patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => filters.push(PathFilter::Glob(pattern)),
                    Err(e) => warn!("Invalid {} pattern '{}': {}", kind, p, e),
                }
            } else {
                filters.push(PathFilter::Literal(PathBuf::from(p)));
            }
        }
        filters
    }

    fn matches(&self, relative: &Path, relative_str: &str) -> bool {
        match self {
            PathFilter::Glob(pattern) => pattern.matches(relative_str),
            PathFilter::Literal(path) => relative.starts_with(path),
        }
    }
}

/// Find catalog files under `root`.
///
/// Patterns are matched against paths relative to `root` using `/` as the
/// separator.
pub fn scan_catalogs(root: &str, includes: &[String], ignores: &[String]) -> ScanResult {
    let mut result = ScanResult::default();
    let root_path = Path::new(root);

    let include_filters = PathFilter::compile(includes, "include");
    let ignore_filters = PathFilter::compile(ignores, "ignore");

    let walker = WalkDir::new(root_path).into_iter().filter_entry(|entry| {
        // Prune ignored directories early; files are checked below.
        let Ok(relative) = entry.path().strip_prefix(root_path) else {
            return true;
        };
        if relative.as_os_str().is_empty() || !entry.file_type().is_dir() {
            return true;
        }
        let relative_str = to_slash(relative);
        !ignore_filters
            .iter()
            .any(|f| matches!(f, PathFilter::Literal(_)) && f.matches(relative, &relative_str))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("Cannot access path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root_path).unwrap_or(path);
        let relative_str = to_slash(relative);

        if !include_filters.is_empty()
            && !include_filters
                .iter()
                .any(|f| f.matches(relative, &relative_str))
        {
            continue;
        }
        if ignore_filters
            .iter()
            .any(|f| f.matches(relative, &relative_str))
        {
            continue;
        }

        let path_str = path.to_string_lossy().to_string();
        if is_xml_file(path) {
            debug!("Found catalog {}", path_str);
            result.files.insert(path_str);
        } else {
            debug!("Skipping {}: not an XML document", path_str);
            result.non_catalogs.push(path_str);
        }
    }

    result
}

fn is_xml_file(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        // Unreadable files are kept so the parser reports the error.
        return true;
    };
    let mut head = Vec::with_capacity(SNIFF_LEN);
    if file.take(SNIFF_LEN as u64).read_to_end(&mut head).is_err() {
        return true;
    }
    looks_like_ts_catalog(&String::from_utf8_lossy(&head))
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Guess the language from a catalog file name.
///
/// `qt_ka.ts` -> `ka`, `VirtualBox_pt_BR.ts` -> `pt_BR`, `app-zh_CN.ts` -> `zh_CN`.
pub fn language_from_file_name(path: &str) -> Option<String> {
    let stem = Path::new(path).file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split(['_', '-']).collect();

    for (i, part) in parts.iter().enumerate().skip(1) {
        if is_language_code(part) {
            let language = match parts.get(i + 1) {
                Some(territory) if is_territory_code(territory) => {
                    format!("{}_{}", part, territory)
                }
                _ => part.to_string(),
            };
            return Some(language);
        }
    }
    None
}

/// Catalog language from the `language` attribute, else from the file name.
pub fn catalog_language(catalog: &Catalog) -> Option<String> {
    catalog
        .language
        .clone()
        .or_else(|| language_from_file_name(&catalog.file_path))
}

fn is_language_code(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_lowercase())
}

fn is_territory_code(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}
