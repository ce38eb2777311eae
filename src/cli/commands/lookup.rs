use std::path::Path;

use anyhow::{Context, Ok, Result};
use tracing::debug;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{
    config::load_config,
    core::{Translator, parsers::ts::parse_ts_file},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args = &cmd.args;

    let start_dir = args
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = load_config(start_dir)?.config;

    let mut translator = Translator::load(&args.file)
        .with_context(|| format!("Failed to load catalog {}", args.file.display()))?
        .include_unfinished(args.include_unfinished || config.include_unfinished);

    for path in &args.fallback {
        let parsed = parse_ts_file(path)
            .with_context(|| format!("Failed to load fallback catalog {}", path.display()))?;
        translator = translator.with_fallback(parsed.catalog);
    }

    let found = translator
        .lookup(
            &args.context,
            &args.source,
            args.comment.as_deref(),
            args.count,
        )
        .is_some();
    let text = translator.translate(
        &args.context,
        &args.source,
        args.comment.as_deref(),
        args.count,
    );
    if !found {
        debug!(
            "No translation for \"{}\" in {}, using source text",
            args.source, args.context
        );
    }

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, found }),
        Vec::new(),
        translator.catalogs().len(),
        true,
    ))
}
