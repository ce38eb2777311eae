//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStatsRow, CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary,
    StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize) {
    print_success_to(catalogs, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = (loc.file_path(), loc.line(), loc.col());

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    // Print source context if available
    if let Some(source_line) = loc.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| {
            let loc = i.location();
            loc.source_line().map(|_| loc.line())
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.catalogs_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Lookup(summary) => {
            print_lookup(summary);
        }
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
            report(&result.issues);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary, &result.issues);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_lookup(summary: &LookupSummary) {
    println!("{}", summary.text);
    if !summary.found {
        eprintln!(
            "{} no translation found, printed the source text",
            "warning:".bold().yellow()
        );
    }
}

const STATS_HEADERS: [&str; 7] = [
    "Language",
    "Contexts",
    "Messages",
    "Finished",
    "Unfinished",
    "Vanished",
    "Done",
];

/// Print one row per catalog, columns right-aligned under their headers.
pub fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No catalogs found");
        return;
    }

    let cells: Vec<[String; 7]> = summary.rows.iter().map(stats_cells).collect();
    let path_width = summary
        .rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.file_path.as_str()))
        .chain(std::iter::once("Catalog".len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = STATS_HEADERS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut header = format!("{:<path_width$}", "Catalog");
    for (name, width) in STATS_HEADERS.iter().zip(&widths) {
        header.push_str(&format!("  {:>width$}", name));
    }
    let _ = writeln!(writer, "{}", header.bold());

    for (row, cells) in summary.rows.iter().zip(&cells) {
        let padding = path_width - UnicodeWidthStr::width(row.file_path.as_str());
        let mut line = format!("{}{}", row.file_path, " ".repeat(padding));
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(&format!("  {:>width$}", cell));
        }
        let _ = writeln!(writer, "{}", line);
    }
}

fn stats_cells(row: &CatalogStatsRow) -> [String; 7] {
    let stats = &row.stats;
    [
        row.language.clone().unwrap_or_else(|| "-".to_string()),
        stats.contexts.to_string(),
        stats.messages.to_string(),
        stats.finished.to_string(),
        stats.unfinished.to_string(),
        stats.vanished.to_string(),
        format!("{:.1}%", stats.completion()),
    ]
}

fn print_clean(summary: &CleanSummary, issues: &[Issue]) {
    if !summary.is_apply {
        report(issues);
    } else {
        let parse_errors: Vec<Issue> = issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .cloned()
            .collect();
        report(&parse_errors);
    }

    if summary.vanished_count == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No vanished entries found".green()
        );
    } else if summary.is_apply {
        println!(
            "{} {} entry(ies) in {} file(s).",
            "Removed".green().bold(),
            summary.vanished_count,
            summary.file_count
        );
    } else {
        println!(
            "{} {} entry(ies) in {} file(s).",
            "Would remove".yellow().bold(),
            summary.vanished_count,
            summary.file_count
        );
        println!("Run with {} to remove these entries.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
        Some(error) => eprintln!("Error: {}", error),
    }
}

// ============================================================
// Tests
// ============================================================
