//! Retired entry rules.
//!
//! - `vanished`: entries lupdate marked `vanished` (or legacy `obsolete`)
//! - `unfinished`: entries still waiting for a translator (opt-in)

use crate::{
    core::{Catalog, CheckContext, MessageContext, TranslationStatus},
    issues::{UnfinishedIssue, VanishedIssue},
    rules::helpers::{IgnoredContexts, check_catalogs, checked_messages},
};

pub fn check_vanished_issues(ctx: &CheckContext) -> Vec<VanishedIssue> {
    check_catalogs(ctx, check_vanished)
}

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_catalogs(ctx, check_unfinished)
}

pub fn check_vanished(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<VanishedIssue> {
    checked_messages(catalog, ignored)
        .filter(|m| m.status.is_retired())
        .map(|m| VanishedIssue {
            context: MessageContext::from_message(m),
            status: m.status,
        })
        .collect()
}

pub fn check_unfinished(catalog: &Catalog, ignored: &IgnoredContexts) -> Vec<UnfinishedIssue> {
    checked_messages(catalog, ignored)
        .filter(|m| m.status == TranslationStatus::Unfinished)
        .map(|m| UnfinishedIssue {
            context: MessageContext::from_message(m),
        })
        .collect()
}
