//! Plural form consistency rule.
//!
//! A `numerus="yes"` message must carry exactly as many `<numerusform>`s as
//! the catalog language has plural forms, and only numerus messages may carry
//! them at all.

use crate::{
    core::{
        Catalog, CheckContext, Message, MessageContext, Translation, plural::numerus_count,
        scanner::catalog_language,
    },
    issues::{NumerusMismatchIssue, NumerusMismatchReason},
    rules::helpers::{IgnoredContexts, check_catalogs, checked_messages},
};

pub fn check_numerus_mismatch_issues(ctx: &CheckContext) -> Vec<NumerusMismatchIssue> {
    check_catalogs(ctx, check_numerus_mismatch)
}

/// Check plural forms of every active message.
///
/// The form count is only checked when the catalog language is known.
pub fn check_numerus_mismatch(
    catalog: &Catalog,
    ignored: &IgnoredContexts,
) -> Vec<NumerusMismatchIssue> {
    let language = catalog_language(catalog);
    let expected = language.as_deref().map(|l| numerus_count(Some(l)));

    checked_messages(catalog, ignored)
        .filter(|m| !m.status.is_retired())
        .filter_map(|m| {
            mismatch_reason(m, language.as_deref(), expected).map(|reason| NumerusMismatchIssue {
                context: MessageContext::from_message(m),
                reason,
            })
        })
        .collect()
}

fn mismatch_reason(
    message: &Message,
    language: Option<&str>,
    expected: Option<usize>,
) -> Option<NumerusMismatchReason> {
    match (&message.translation, message.numerus) {
        (Translation::Numerus(_), false) => Some(NumerusMismatchReason::FormsInPlainMessage),
        (Translation::Single(text), true) if !text.is_empty() => {
            Some(NumerusMismatchReason::PlainTextInNumerusMessage)
        }
        (Translation::Numerus(forms), true) if !forms.is_empty() => {
            let (language, expected) = (language?, expected?);
            (forms.len() != expected).then(|| NumerusMismatchReason::FormCount {
                language: language.to_string(),
                expected,
                actual: forms.len(),
            })
        }
        _ => None,
    }
}
