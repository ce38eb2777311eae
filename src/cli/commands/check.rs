use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        accelerator::check_accelerator_issues,
        duplicate::{check_conflicting_translation_issues, check_duplicate_message_issues},
        empty_source::check_empty_source_issues,
        empty_translation::check_empty_translation_issues,
        numerus::check_numerus_mismatch_issues,
        place_marker::check_place_marker_issues,
        punctuation::check_punctuation_issues,
        vanished::{check_unfinished_issues, check_vanished_issues},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptySource,
    ConflictingTranslation,
    DuplicateMessage,
    NumerusMismatch,
    PlaceMarker,
    Accelerator,
    Punctuation,
    EmptyTranslation,
    Vanished,
    Unfinished,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptySource,
            CheckRule::ConflictingTranslation,
            CheckRule::DuplicateMessage,
            CheckRule::NumerusMismatch,
            CheckRule::PlaceMarker,
            CheckRule::Accelerator,
            CheckRule::Punctuation,
            CheckRule::EmptyTranslation,
            CheckRule::Vanished,
            CheckRule::Unfinished,
        ]
    }

    /// Rules run when none are named. `unfinished` is opt-in: new strings
    /// are expected to be unfinished.
    pub fn defaults() -> Vec<CheckRule> {
        Self::all()
            .into_iter()
            .filter(|rule| *rule != CheckRule::Unfinished)
            .collect()
    }
}

/// Run the given rules against every catalog of the context.
///
/// Schema violations and parse errors are always included.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::EmptySource => {
                let issues = check_empty_source_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptySource));
            }
            CheckRule::ConflictingTranslation => {
                let issues = check_conflicting_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::ConflictingTranslation));
            }
            CheckRule::DuplicateMessage => {
                let issues = check_duplicate_message_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateMessage));
            }
            CheckRule::NumerusMismatch => {
                let issues = check_numerus_mismatch_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusMismatch));
            }
            CheckRule::PlaceMarker => {
                let issues = check_place_marker_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceMarker));
            }
            CheckRule::Accelerator => {
                let issues = check_accelerator_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Accelerator));
            }
            CheckRule::Punctuation => {
                let issues = check_punctuation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Punctuation));
            }
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
        }
    }

    all_issues.extend(ctx.schema_issues().into_iter().map(Issue::Schema));
    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    all_issues
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::defaults()
    } else {
        cmd.checks.clone()
    };

    let all_issues = run_checks(&ctx, &checks);

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalogs().len(),
        true,
    ))
}
