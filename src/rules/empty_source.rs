//! Empty source text detection rule.
//!
//! A `<message>` whose `<source>` is empty or whitespace can never be looked
//! up by the application and usually comes from a broken extraction run.

use crate::{
    core::{Catalog, CheckContext, MessageContext},
    issues::EmptySourceIssue,
    rules::helpers::{IgnoredContexts, check_catalogs, checked_messages},
};

pub fn check_empty_source_issues(ctx: &CheckContext) -> Vec<EmptySourceIssue> {
    check_catalogs(ctx, check_empty_source)
}

pub fn check_empty_source(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<EmptySourceIssue> {
    checked_messages(catalog, ignored)
        .filter(|m| m.source.trim().is_empty())
        .map(|m| EmptySourceIssue {
            context: MessageContext::from_message(m),
        })
        .collect()
}
