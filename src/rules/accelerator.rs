//! Keyboard accelerator rule.
//!
//! Menu entries and buttons carry a mnemonic (`&File`). A translation that
//! drops it loses keyboard access; one that adds it to a plain label usually
//! means the wrong source was translated.

use crate::{
    core::{Catalog, CheckContext, MessageContext},
    issues::AcceleratorIssue,
    rules::helpers::{IgnoredContexts, check_catalogs, translated_messages},
    utils::has_accelerator,
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorIssue> {
    check_catalogs(ctx, check_accelerators)
}

pub fn check_accelerators(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<AcceleratorIssue> {
    translated_messages(catalog, ignored)
        .filter_map(|m| {
            let in_source = has_accelerator(&m.source);
            let in_translation = m
                .translation
                .texts()
                .into_iter()
                .filter(|t| !t.is_empty())
                .any(has_accelerator);

            (in_source != in_translation).then(|| AcceleratorIssue {
                context: MessageContext::from_message(m),
                missing_in_translation: in_source,
            })
        })
        .collect()
}
