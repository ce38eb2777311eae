//! Shared plumbing for rule implementations.
//!
//! - `IgnoredContexts`: contexts every rule skips (`ignoreContexts`)
//! - `checked_messages`: messages of a catalog a rule should look at
//! - `check_catalogs`: run a per-catalog rule over a whole `CheckContext`

use std::collections::HashSet;

use rayon::prelude::*;

use crate::core::{Catalog, CheckContext, Message, TranslationStatus};

/// Context names skipped by every rule.
pub type IgnoredContexts<'a> = HashSet<&'a str>;

/// Messages of a catalog outside the ignored contexts, in document order.
pub fn checked_messages<'a>(
    catalog: &'a Catalog,
    ignored: &'a IgnoredContexts<'a>,
) -> impl Iterator<Item = &'a Message> + 'a {
    catalog
        .contexts()
        .iter()
        .filter(|c| !ignored.contains(c.name.as_str()))
        .flat_map(|c| c.messages.iter())
}

/// Finished messages with a non-empty translation: the ones whose text
/// content (markers, accelerators, punctuation) is worth comparing.
pub fn translated_messages<'a>(
    catalog: &'a Catalog,
    ignored: &'a IgnoredContexts<'a>,
) -> impl Iterator<Item = &'a Message> + 'a {
    checked_messages(catalog, ignored)
        .filter(|m| m.status == TranslationStatus::Finished && !m.translation.is_empty())
}

/// Run a per-catalog rule over every loaded catalog, in parallel.
///
/// Results keep the catalog order of the context.
pub fn check_catalogs<T, F>(ctx: &CheckContext, check: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Catalog, &IgnoredContexts<'_>) -> Vec<T> + Sync,
{
    let ignored = ctx.ignored_contexts();
    ctx.catalogs()
        .par_iter()
        .map(|loaded| check(&loaded.catalog, &ignored))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
