//! Repeated message detection rules.
//!
//! Within one context, `(source, comment)` must identify a single entry.
//! A repeat with a different translation makes the lookup ambiguous
//! (`conflicting-translation`); a repeat with the same translation is only
//! redundant (`duplicate-message`). Retired entries are not considered since
//! lookups never use them.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    core::{Catalog, CheckContext, Message, MessageContext, MessageKey},
    issues::{ConflictingTranslationIssue, DuplicateMessageIssue},
    rules::helpers::{IgnoredContexts, check_catalogs, checked_messages},
};

pub fn check_conflicting_translation_issues(ctx: &CheckContext) -> Vec<ConflictingTranslationIssue> {
    check_catalogs(ctx, check_conflicting_translations)
}

pub fn check_duplicate_message_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_catalogs(ctx, check_duplicate_messages)
}

pub fn check_conflicting_translations(
    catalog: &Catalog,
    ignored: &IgnoredContexts,
) -> Vec<ConflictingTranslationIssue> {
    find_repeats(catalog, ignored)
        .into_iter()
        .filter(|(first, later)| first.translation != later.translation)
        .map(|(first, later)| ConflictingTranslationIssue {
            context: MessageContext::from_message(later),
            first: first.location.clone(),
            first_translation: first.translation.display_text(),
        })
        .collect()
}

pub fn check_duplicate_messages(
    catalog: &Catalog,
    ignored: &IgnoredContexts,
) -> Vec<DuplicateMessageIssue> {
    find_repeats(catalog, ignored)
        .into_iter()
        .filter(|(first, later)| first.translation == later.translation)
        .map(|(first, later)| DuplicateMessageIssue {
            context: MessageContext::from_message(later),
            first: first.location.clone(),
        })
        .collect()
}

/// Pairs of (first occurrence, later occurrence) sharing context, source and comment.
fn find_repeats<'a>(
    catalog: &'a Catalog,
    ignored: &'a IgnoredContexts<'a>,
) -> Vec<(&'a Message, &'a Message)> {
    let mut first_seen: HashMap<MessageKey, &Message> = HashMap::new();
    let mut repeats = Vec::new();

    for message in checked_messages(catalog, ignored).filter(|m| !m.status.is_retired()) {
        match first_seen.entry(message.key()) {
            Entry::Occupied(first) => repeats.push((*first.get(), message)),
            Entry::Vacant(slot) => {
                slot.insert(message);
            }
        }
    }

    repeats
}
