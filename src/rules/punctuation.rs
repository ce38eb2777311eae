//! Trailing punctuation rule.
//!
//! Compares the final `.`, `:`, `?`, `!` or ellipsis of source and
//! translation. Full-width forms count as their ASCII counterparts.

use crate::{
    core::{Catalog, CheckContext, MessageContext},
    issues::PunctuationIssue,
    rules::helpers::{IgnoredContexts, check_catalogs, translated_messages},
    utils::ending_punctuation,
};

pub fn check_punctuation_issues(ctx: &CheckContext) -> Vec<PunctuationIssue> {
    check_catalogs(ctx, check_punctuation)
}

pub fn check_punctuation(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<PunctuationIssue> {
    translated_messages(catalog, ignored)
        .filter_map(|m| {
            let source_ending = ending_punctuation(&m.source);
            // One report per message, for the first differing form.
            m.translation
                .texts()
                .into_iter()
                .filter(|t| !t.is_empty())
                .map(ending_punctuation)
                .find(|ending| *ending != source_ending)
                .map(|translation_ending| PunctuationIssue {
                    context: MessageContext::from_message(m),
                    source_ending: source_ending.to_string(),
                    translation_ending: translation_ending.to_string(),
                })
        })
        .collect()
}
