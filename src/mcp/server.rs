use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::{
    cli::{CheckRule, run_checks},
    config::load_config,
    core::{Translator, parsers::ts::parse_ts_file},
    issues::{Issue, Report, Rule, Severity},
};

use super::helpers::{issue_item, json_result, load_context, parse_rules};
use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    IssueItem, IssuesScanResult, LookupResult, LookupTranslationParams, Pagination,
    ParseErrorItem, RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration (.tscatrc.json or defaults).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalogs with their language and progress
    #[tool(
        description = "List the Qt Linguist catalogs (.ts) of the project with language, message counts and completion."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .catalogs()
            .iter()
            .map(|loaded| {
                let stats = loaded.catalog.stats();
                CatalogInfo {
                    file_path: loaded.catalog.file_path.clone(),
                    language: loaded.language(),
                    version: loaded.catalog.version.clone(),
                    context_count: stats.contexts,
                    message_count: stats.messages,
                    finished_count: stats.finished,
                    unfinished_count: stats.unfinished,
                    vanished_count: stats.vanished,
                    completion: (stats.completion() * 10.0).round() / 10.0,
                }
            })
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        json_result(&CatalogsResult {
            catalogs_dir: ctx.catalogs_dir.to_string_lossy().to_string(),
            catalogs,
            parse_errors,
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get statistics of all catalog issues per rule without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = run_checks(&ctx, &CheckRule::all());

        let mut per_rule: BTreeMap<Rule, (Severity, usize, HashSet<&str>)> = BTreeMap::new();
        for issue in &issues {
            let entry = per_rule
                .entry(issue.rule())
                .or_insert_with(|| (issue.severity(), 0, HashSet::new()));
            entry.1 += 1;
            entry.2.insert(file_path_of(issue));
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        let rules = per_rule
            .into_iter()
            .map(|(rule, (severity, total_count, files))| RuleStats {
                rule: rule.to_string(),
                severity: severity.to_string(),
                total_count,
                file_count: files.len(),
            })
            .collect();

        json_result(&ScanOverviewResult {
            catalog_count: ctx.catalogs().len(),
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules,
        })
    }

    /// Scan for catalog issues
    #[tool(
        description = "Scan catalogs for issues (place markers, numerus forms, accelerators, duplicates, ...). Optionally filter by rule ids. Returns paginated list of issues."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let rules = parse_rules(params.rules.as_deref())?;

        let ctx = load_context(&params.project_root_path)?;
        let mut issues = run_checks(&ctx, &rules);
        issues.sort();

        let total_count = issues.len();
        let total_file_count = issues
            .iter()
            .map(file_path_of)
            .collect::<HashSet<_>>()
            .len();

        // Apply pagination
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(issue_item)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&IssuesScanResult {
            total_count,
            total_file_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Look up the translation of one message
    #[tool(
        description = "Translate one message from a catalog the way the application would: exact context/source/comment match, then the same source without comment, then the fallback catalogs, then the source text."
    )]
    pub async fn lookup_translation(
        &self,
        params: Parameters<LookupTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut translator = Translator::load(Path::new(&params.catalog_path))
            .map_err(|e| McpError::invalid_params(format!("Failed to load catalog: {}", e), None))?
            .include_unfinished(params.include_unfinished.unwrap_or(false));

        for path in params.fallback_paths.iter().flatten() {
            let parsed = parse_ts_file(Path::new(path)).map_err(|e| {
                McpError::invalid_params(format!("Failed to load fallback catalog: {}", e), None)
            })?;
            translator = translator.with_fallback(parsed.catalog);
        }

        let comment = params.comment.as_deref();
        let found = translator
            .lookup(&params.context, &params.source, comment, params.n)
            .is_some();
        let text = translator.translate(&params.context, &params.source, comment, params.n);
        debug!("lookup {}::{} found={}", params.context, params.source, found);

        json_result(&LookupResult {
            found,
            text,
            language: translator.language().map(str::to_string),
        })
    }
}

fn file_path_of(issue: &Issue) -> &str {
    issue.location().file_path()
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents review and query Qt Linguist translation catalogs (.ts).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs with language and completion\n\
                 3. scan_overview - Get per-rule issue statistics\n\
                 4. scan_issues - Get detailed issues, optionally filtered by rule (paginated)\n\
                 5. lookup_translation - Translate one message with fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first (parse-error, schema, place-marker, numerus-mismatch, conflicting-translation)\n\
                 3. Then review warnings (accelerator, punctuation, empty-translation, vanished)\n\
                 4. Use lookup_translation to confirm what the application will display"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
