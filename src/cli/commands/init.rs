use std::{fs, path::Path};

use anyhow::{Ok, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

/// Write the default `.tscatrc.json` into `dir` unless one already exists.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let path = dir.join(CONFIG_FILE_NAME);

    let error = if path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&path, format!("{}\n", default_config_json()?))?;
        None
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { error }),
        Vec::new(),
        0,
        true,
    ))
}
