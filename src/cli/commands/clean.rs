use std::{collections::BTreeSet, path::Path};

use anyhow::{Ok, Result};
use tracing::info;

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, parsers::ts_writer::save_catalog},
    issues::Issue,
    rules::vanished::check_vanished_issues,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let vanished_issues = check_vanished_issues(&ctx);
    let files: BTreeSet<&str> = vanished_issues
        .iter()
        .map(|issue| issue.context.file_path())
        .collect();

    let file_count = if apply {
        remove_retired_entries(&ctx, &files)?
    } else {
        files.len()
    };

    let parse_errors = ctx.parse_errors();
    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(vanished_issues.iter().cloned().map(Issue::Vanished));
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            vanished_count: vanished_issues.len(),
            file_count,
            is_apply: apply,
        }),
        all_issues,
        ctx.catalogs().len(),
        false,
    ))
}

/// Rewrite every listed catalog without its retired entries.
///
/// Returns the number of files written.
fn remove_retired_entries(ctx: &CheckContext, files: &BTreeSet<&str>) -> Result<usize> {
    let ignored = ctx.ignored_contexts();
    let mut written = 0;

    for loaded in ctx.catalogs() {
        if !files.contains(loaded.catalog.file_path.as_str()) {
            continue;
        }
        let mut catalog = loaded.catalog.clone();
        let removed = catalog.remove_retired(&ignored);
        if removed.is_empty() {
            continue;
        }
        save_catalog(&catalog, Path::new(&catalog.file_path))?;
        info!(
            "Removed {} retired entry(ies) from {}",
            removed.len(),
            catalog.file_path
        );
        written += 1;
    }

    Ok(written)
}
