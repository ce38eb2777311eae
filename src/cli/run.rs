//! Command dispatch for the tscat CLI.
//!
//! `serve` never reaches this point; `main` starts the MCP server before
//! handing the remaining commands to [`run`].

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, clean::clean, init::init, lookup::lookup, stats::stats},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => bail!("Serve command should be handled before run()"),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
