//! Translation lookup over loaded catalogs.
//!
//! Resolution follows Qt's translator: exact `(context, source, comment)`,
//! then the same source with an empty comment, then the next catalog of the
//! fallback chain, and finally the source text itself.

use std::{path::Path, sync::OnceLock};

use thiserror::Error;
use tracing::debug;

use crate::{
    core::{
        Catalog, Message, Translation,
        parsers::ts::{TsError, parse_ts_file},
        plural::numerus_index,
        scanner::catalog_language,
    },
    utils::replace_count,
};

static GLOBAL: OnceLock<Translator> = OnceLock::new();

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("a global translator is already installed")]
    AlreadyInstalled,
    #[error(transparent)]
    Load(#[from] TsError),
}

/// Lookup engine over a primary catalog and its fallbacks.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Primary catalog first, then fallbacks in order.
    catalogs: Vec<Catalog>,
    include_unfinished: bool,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalogs: vec![catalog],
            include_unfinished: false,
        }
    }

    /// Load a translator from a catalog file.
    ///
    /// Structural findings of the parser are ignored here; `tscat check`
    /// reports them.
    pub fn load(path: &Path) -> Result<Self, TranslatorError> {
        let parsed = parse_ts_file(path)?;
        debug!(
            "Loaded {} message(s) from {}",
            parsed.catalog.message_count(),
            path.display()
        );
        Ok(Self::new(parsed.catalog))
    }

    /// Append a catalog consulted when the previous ones have no answer.
    pub fn with_fallback(mut self, catalog: Catalog) -> Self {
        self.catalogs.push(catalog);
        self
    }

    /// Also answer from entries still marked unfinished.
    pub fn include_unfinished(mut self, include: bool) -> Self {
        self.include_unfinished = include;
        self
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Language of the primary catalog.
    pub fn language(&self) -> Option<&str> {
        self.catalogs.first().and_then(|c| c.language.as_deref())
    }

    /// Translated text, or `None` when no catalog has a usable entry.
    ///
    /// `%n` is not substituted; see [`Translator::translate`].
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: Option<i64>,
    ) -> Option<&str> {
        let comment = comment.unwrap_or("");
        self.catalogs.iter().find_map(|catalog| {
            self.lookup_in(catalog, context, source, comment, n)
                .or_else(|| {
                    if comment.is_empty() {
                        None
                    } else {
                        self.lookup_in(catalog, context, source, "", n)
                    }
                })
        })
    }

    /// Translate a source text, falling back to the source itself.
    ///
    /// With `n`, the plural form is chosen by the catalog language and
    /// `%n` is replaced by `n` (also in the fallback).
    pub fn translate(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: Option<i64>,
    ) -> String {
        let text = self.lookup(context, source, comment, n).unwrap_or(source);
        match n {
            Some(n) => replace_count(text, n),
            None => text.to_string(),
        }
    }

    /// Translate by message id, falling back to the id itself.
    pub fn translate_id(&self, id: &str, n: Option<i64>) -> String {
        let text = self
            .catalogs
            .iter()
            .find_map(|catalog| {
                catalog
                    .find_by_id(id)
                    .filter(|m| m.is_usable(self.include_unfinished))
                    .and_then(|m| pick_text(catalog, m, n))
            })
            .unwrap_or(id);
        match n {
            Some(n) => replace_count(text, n),
            None => text.to_string(),
        }
    }

    fn lookup_in<'a>(
        &self,
        catalog: &'a Catalog,
        context: &str,
        source: &str,
        comment: &str,
        n: Option<i64>,
    ) -> Option<&'a str> {
        catalog
            .find(context, source, comment)
            .filter(|m| m.is_usable(self.include_unfinished))
            .find_map(|m| pick_text(catalog, m, n))
    }
}

/// Text of the form selected for `n`, `None` if missing or empty.
fn pick_text<'a>(catalog: &Catalog, message: &'a Message, n: Option<i64>) -> Option<&'a str> {
    let text = match &message.translation {
        Translation::Single(text) => text.text(),
        Translation::Numerus(forms) => {
            let index = match n {
                Some(n) => numerus_index(catalog_language(catalog).as_deref(), n),
                None => 0,
            };
            forms.get(index)?.text()
        }
    };
    (!text.is_empty()).then_some(text)
}

/// Install the process-wide translator. Only the first call succeeds.
pub fn install_global(translator: Translator) -> Result<(), TranslatorError> {
    GLOBAL
        .set(translator)
        .map_err(|_| TranslatorError::AlreadyInstalled)
}

pub fn global() -> Option<&'static Translator> {
    GLOBAL.get()
}

/// Translate with the global translator, or return the source if none is installed.
pub fn tr(context: &str, source: &str) -> String {
    match global() {
        Some(translator) => translator.translate(context, source, None, None),
        None => source.to_string(),
    }
}
