//! Empty finished translation rule.
//!
//! An entry without `type="unfinished"` claims to be translated, yet an
//! empty text makes the application show the source instead. Empty
//! unfinished entries are the normal state of new strings and are not
//! reported here.

use crate::{
    core::{Catalog, CheckContext, MessageContext, Translation, TranslationStatus},
    issues::EmptyTranslationIssue,
    rules::helpers::{IgnoredContexts, check_catalogs, checked_messages},
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_catalogs(ctx, check_empty_translations)
}

pub fn check_empty_translations(
    catalog: &Catalog,
    ignored: &IgnoredContexts,
) -> Vec<EmptyTranslationIssue> {
    checked_messages(catalog, ignored)
        .filter(|m| m.status == TranslationStatus::Finished)
        .filter(|m| match &m.translation {
            Translation::Single(text) => text.is_empty(),
            // A single missing plural form is already a broken lookup.
            Translation::Numerus(forms) => forms.is_empty() || forms.iter().any(|f| f.is_empty()),
        })
        .map(|m| EmptyTranslationIssue {
            context: MessageContext::from_message(m),
        })
        .collect()
}
