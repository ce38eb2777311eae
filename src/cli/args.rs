//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Lint catalogs (place markers, numerus forms, duplicates, ...)
//! - `lookup`: Translate one message the way the application would
//! - `stats`: Per-catalog translation progress
//! - `clean`: Remove vanished and obsolete entries
//! - `init`: Initialize tscat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.args.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the catalog commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory; `.tscatrc.json` is searched upward from here
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only look at catalogs of this language (overrides config file)
    #[arg(long)]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: every rule except `unfinished`)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Catalog to translate from
    pub file: PathBuf,

    /// TS context name, e.g. "QFileDialog"
    #[arg(long)]
    pub context: String,

    /// Source text to translate
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for numerus messages; also replaces `%n`
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Accept translations still marked unfinished
    #[arg(long)]
    pub include_unfinished: bool,

    /// Catalogs consulted in order when the main catalog has no translation
    #[arg(long)]
    pub fallback: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually remove entries (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (place markers, numerus forms, duplicates, ...)
    Check(CheckCommand),
    /// Look up the translation of one message
    Lookup(LookupCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Remove vanished and obsolete entries from catalogs
    Clean(CleanCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
