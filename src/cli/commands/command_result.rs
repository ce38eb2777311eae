use crate::{core::CatalogStats, issues::Issue};

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Text to print: the translation, or the source when none was found.
    pub text: String,
    /// False when the lookup fell back to the source text.
    pub found: bool,
}

#[derive(Debug)]
pub struct CatalogStatsRow {
    pub file_path: String,
    pub language: Option<String>,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<CatalogStatsRow>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub vanished_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the command, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were checked.
    pub catalogs_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
