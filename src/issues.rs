//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it: the offending message, its position in the catalog,
//! and rule-specific details.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, MessageLocation, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    EmptySource,
    ConflictingTranslation,
    DuplicateMessage,
    NumerusMismatch,
    PlaceMarker,
    Accelerator,
    Punctuation,
    EmptyTranslation,
    Vanished,
    Unfinished,
    Schema,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptySource => write!(f, "empty-source"),
            Rule::ConflictingTranslation => write!(f, "conflicting-translation"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::NumerusMismatch => write!(f, "numerus-mismatch"),
            Rule::PlaceMarker => write!(f, "place-marker"),
            Rule::Accelerator => write!(f, "accelerator"),
            Rule::Punctuation => write!(f, "punctuation"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Schema => write!(f, "schema"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Message Integrity
// ============================================================

/// `<source>` is empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: MessageContext,
}

impl EmptySourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptySource
    }
}

/// Same source and comment twice in one context, translated differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingTranslationIssue {
    /// The later occurrence.
    pub context: MessageContext,
    /// Where the first occurrence is.
    pub first: MessageLocation,
    /// Translation of the first occurrence.
    pub first_translation: String,
}

impl ConflictingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ConflictingTranslation
    }
}

/// Same source and comment twice in one context with the same translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    /// The later occurrence.
    pub context: MessageContext,
    pub first: MessageLocation,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// What is wrong with the plural forms of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumerusMismatchReason {
    /// Form count differs from what the language needs.
    FormCount {
        language: String,
        expected: usize,
        actual: usize,
    },
    /// Plain message carrying `<numerusform>`s.
    FormsInPlainMessage,
    /// `numerus="yes"` message translated with plain text.
    PlainTextInNumerusMessage,
}

impl std::fmt::Display for NumerusMismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumerusMismatchReason::FormCount {
                language,
                expected,
                actual,
            } => write!(
                f,
                "{} has {} plural form(s), found {}",
                language, expected, actual
            ),
            NumerusMismatchReason::FormsInPlainMessage => {
                write!(f, "numerus forms in a message without numerus=\"yes\"")
            }
            NumerusMismatchReason::PlainTextInNumerusMessage => {
                write!(f, "plain translation in a numerus message")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusMismatchIssue {
    pub context: MessageContext,
    pub reason: NumerusMismatchReason,
}

impl NumerusMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusMismatch
    }
}

/// Place markers (`%1`, `%2`, ...) differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceMarkerIssue {
    pub context: MessageContext,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceMarkerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceMarker
    }
}

/// Keyboard accelerator (`&X`) present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorIssue {
    pub context: MessageContext,
    /// True if the source has the accelerator and the translation lacks it.
    pub missing_in_translation: bool,
}

impl AcceleratorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Accelerator
    }
}

/// Trailing punctuation differs between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationIssue {
    pub context: MessageContext,
    pub source_ending: String,
    pub translation_ending: String,
}

impl PunctuationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Punctuation
    }
}

/// Finished translation with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Vanished or obsolete entry still in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Entry still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Structural TS violation found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub location: MessageLocation,
    pub source_line: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Schema
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    ConflictingTranslation(ConflictingTranslationIssue),
    DuplicateMessage(DuplicateMessageIssue),
    NumerusMismatch(NumerusMismatchIssue),
    PlaceMarker(PlaceMarkerIssue),
    Accelerator(AcceleratorIssue),
    Punctuation(PunctuationIssue),
    EmptyTranslation(EmptyTranslationIssue),
    Vanished(VanishedIssue),
    Unfinished(UnfinishedIssue),
    Schema(SchemaIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message in a catalog (has the raw `<message>` line).
    Message(&'a MessageContext),
    /// A line in a catalog, outside any message context.
    Line {
        location: &'a MessageLocation,
        source_line: &'a str,
    },
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

/// "in Context (comment)" prefix for notes.
fn message_key(context: &MessageContext) -> String {
    match &context.comment {
        Some(comment) if !comment.is_empty() => {
            format!("in {} ({})", context.context_name, comment)
        }
        _ => format!("in {}", context.context_name),
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        "empty source text".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(message_key(&self.context))
    }
}

impl Report for ConflictingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: (\"{}\") conflicts with (\"{}\") at line {}",
            message_key(&self.context),
            self.context.translation,
            self.first_translation,
            self.first.line
        ))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: first defined at line {}",
            message_key(&self.context),
            self.first.line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("remove one of the entries or add a disambiguation comment")
    }
}

impl Report for NumerusMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{}: {}", message_key(&self.context), self.reason))
    }
}

impl Report for PlaceMarkerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(format!(
            "(\"{}\") {}",
            self.context.translation,
            parts.join("; ")
        ))
    }
}

impl Report for AcceleratorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let side = if self.missing_in_translation {
            "translation has no accelerator"
        } else {
            "source has no accelerator"
        };
        Some(format!("(\"{}\") {}", self.context.translation, side))
    }
}

impl Report for PunctuationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let show = |s: &str| {
            if s.is_empty() {
                "nothing".to_string()
            } else {
                format!("'{}'", s)
            }
        };
        Some(format!(
            "(\"{}\") ends with {}, source ends with {}",
            self.context.translation,
            show(&self.translation_ending),
            show(&self.source_ending)
        ))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: finished translation is empty",
            message_key(&self.context)
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("translate the message or mark it type=\"unfinished\"")
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{}: marked {}", message_key(&self.context), self.status))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat clean --apply` to remove retired entries")
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(message_key(&self.context))
    }
}

impl Report for SchemaIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            location: &self.location,
            source_line: &self.source_line,
        }
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl<'a> ReportLocation<'a> {
    pub fn file_path(&self) -> &'a str {
        match *self {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::Line { location, .. } => &location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::Line { location, .. } => location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.col(),
            ReportLocation::Line { location, .. } => location.col,
            ReportLocation::File { .. } => 0,
        }
    }

    /// Raw catalog line to show under the location, if known.
    pub fn source_line(&self) -> Option<&str> {
        let line = match self {
            ReportLocation::Message(ctx) => ctx.source_line.as_str(),
            ReportLocation::Line { source_line, .. } => source_line,
            ReportLocation::File { .. } => return None,
        };
        (!line.is_empty()).then_some(line)
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| a.col().cmp(&b.col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
