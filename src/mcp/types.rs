use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

/// Parameters for get_config
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to start the `.tscatrc.json` search from
    pub project_root_path: String,
}

/// Parameters for get_catalogs
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Project root directory
    pub project_root_path: String,
}

/// Parameters for scan_overview
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Project root directory
    pub project_root_path: String,
}

/// Parameters for scan_issues
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Project root directory
    pub project_root_path: String,
    /// Rule ids to run, e.g. ["place-marker", "unfinished"] (default: every rule except unfinished)
    pub rules: Option<Vec<String>>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

/// Parameters for lookup_translation
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTranslationParams {
    /// Path to the `.ts` catalog
    pub catalog_path: String,
    /// TS context name, e.g. "QFileDialog"
    pub context: String,
    /// Source text to translate
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for numerus messages
    pub n: Option<i64>,
    /// Accept translations still marked unfinished
    pub include_unfinished: Option<bool>,
    /// Catalogs consulted in order when the main catalog has no translation
    pub fallback_paths: Option<Vec<String>>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub catalogs_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub primary_language: Option<String>,
    pub include_unfinished: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            catalogs_root: c.catalogs_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            primary_language: c.primary_language,
            include_unfinished: c.include_unfinished,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

/// Result of get_catalogs operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Files that could not be parsed
    pub parse_errors: Vec<ParseErrorItem>,
}

/// Information about a single catalog
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub version: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
    pub finished_count: usize,
    pub unfinished_count: usize,
    pub vanished_count: usize,
    /// Finished share of active messages, in percent
    pub completion: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Rules with at least one issue, in rule order
    pub rules: Vec<RuleStats>,
}

/// Statistics for one rule
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub file_count: usize,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

/// Result of scan_issues operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single catalog issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// Source text, or the error for file-level issues
    pub message: String,
    /// TS context of the message, when the issue belongs to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

// ============================================================
// Lookup Types (lookup_translation)
// ============================================================

/// Result of lookup_translation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// False when no catalog had a usable translation
    pub found: bool,
    /// The translation, or the source text when not found
    pub text: String,
    pub language: Option<String>,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
