//! Helper functions for MCP server operations.

use std::path::PathBuf;

use clap::ValueEnum;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{
    cli::{CheckRule, args::CommonArgs},
    core::CheckContext,
    issues::{Issue, Report, ReportLocation},
};

use super::types::IssueItem;

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Load config and scan catalogs of a project.
pub fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        language: None,
        verbose: false,
    };
    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

/// Parse rule ids (`place-marker`, `unfinished`, ...).
///
/// `None` or an empty list selects the default rules.
pub fn parse_rules(rules: Option<&[String]>) -> Result<Vec<CheckRule>, McpError> {
    match rules {
        None | Some([]) => Ok(CheckRule::defaults()),
        Some(names) => names
            .iter()
            .map(|name| {
                CheckRule::from_str(name, true).map_err(|_| {
                    McpError::invalid_params(format!("Unknown rule: \"{}\"", name), None)
                })
            })
            .collect(),
    }
}

/// Convert an issue to its MCP representation.
pub fn issue_item(issue: &Issue) -> IssueItem {
    let location = issue.location();
    let (context, comment, translation) = match &location {
        ReportLocation::Message(ctx) => (
            Some(ctx.context_name.clone()),
            ctx.comment.clone().filter(|c| !c.is_empty()),
            Some(ctx.translation.clone()),
        ),
        ReportLocation::Line { .. } | ReportLocation::File { .. } => (None, None, None),
    };

    IssueItem {
        rule: issue.rule().to_string(),
        severity: issue.severity().to_string(),
        file_path: location.file_path().to_string(),
        line: location.line(),
        col: location.col(),
        message: issue.message(),
        context,
        comment,
        translation,
        details: issue.details(),
        hint: issue.hint().map(str::to_string),
    }
}
