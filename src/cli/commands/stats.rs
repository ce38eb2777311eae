use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CatalogStatsRow, CommandResult, CommandSummary, StatsSummary, helper::finish};
use crate::{core::CheckContext, issues::Issue};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let rows: Vec<CatalogStatsRow> = ctx
        .catalogs()
        .iter()
        .map(|loaded| CatalogStatsRow {
            file_path: loaded.catalog.file_path.clone(),
            language: loaded.language(),
            stats: loaded.catalog.stats(),
        })
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { rows }),
        issues,
        ctx.catalogs().len(),
        true,
    ))
}
