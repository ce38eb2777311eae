use std::fmt;

/// Position information in a catalog file (TS XML).
///
/// Represents the `<message>` (or other element) start tag an issue points at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./nls/qt_ka.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A `<location filename="..." line="..."/>` reference back into the
/// application sources that use the message.
///
/// Values are kept verbatim: lupdate may write relative references
/// (`line="+3"` with the filename omitted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub filename: Option<String>,
    pub line: Option<String>,
}

/// Translation status, taken from the `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TranslationStatus {
    /// No `type` attribute: the translation is approved.
    #[default]
    Finished,
    /// `type="unfinished"`: not yet supplied or not yet approved.
    Unfinished,
    /// `type="vanished"`: the source string is gone from the application.
    Vanished,
    /// `type="obsolete"`: legacy spelling of vanished.
    Obsolete,
}

impl TranslationStatus {
    /// Parse the value of a `type` attribute.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    /// The `type` attribute value to write, `None` for finished entries.
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// True for vanished and obsolete entries, which are never used for lookup.
    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Vanished | Self::Obsolete)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Unfinished => write!(f, "unfinished"),
            Self::Vanished => write!(f, "vanished"),
            Self::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// A translated text, possibly with length variants.
///
/// Qt lets translators provide shorter alternatives with `<lengthvariant>`;
/// the first variant is the preferred one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatedText {
    pub variants: Vec<String>,
}

impl TranslatedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            variants: vec![text.into()],
        }
    }

    /// The preferred (first) variant, empty if none.
    pub fn text(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.variants.iter().all(|v| v.is_empty())
    }

    pub fn has_length_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

/// Translation payload of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Plain `<translation>text</translation>`.
    Single(TranslatedText),
    /// `<translation>` with one `<numerusform>` per plural form.
    Numerus(Vec<TranslatedText>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Single(TranslatedText::default())
    }
}

impl Translation {
    pub fn single(text: impl Into<String>) -> Self {
        Translation::Single(TranslatedText::new(text))
    }

    pub fn numerus<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Translation::Numerus(forms.into_iter().map(TranslatedText::new).collect())
    }

    /// True when no text has been supplied at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Single(text) => text.is_empty(),
            Translation::Numerus(forms) => forms.iter().all(TranslatedText::is_empty),
        }
    }

    /// Preferred text of every form, in order.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Translation::Single(text) => vec![text.text()],
            Translation::Numerus(forms) => forms.iter().map(TranslatedText::text).collect(),
        }
    }

    /// Text shown in reports: single text, or forms joined with " | ".
    pub fn display_text(&self) -> String {
        self.texts().join(" | ")
    }
}

/// A single translation entry of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Name of the owning `<context>`.
    pub context: String,
    /// Optional message id (`<message id="...">`).
    pub id: Option<String>,
    /// English source text.
    pub source: String,
    /// Disambiguation comment (`<comment>`), part of the lookup key.
    pub comment: Option<String>,
    /// Developer comment for translators (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Translator's own note (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    /// Previous source text kept by lupdate (`<oldsource>`).
    pub old_source: Option<String>,
    /// Previous disambiguation comment (`<oldcomment>`).
    pub old_comment: Option<String>,
    /// True for `numerus="yes"` messages.
    pub numerus: bool,
    pub translation: Translation,
    pub status: TranslationStatus,
    /// References into the application sources.
    pub references: Vec<SourceRef>,
    /// Where the `<message>` tag sits in the catalog.
    pub location: MessageLocation,
    /// Raw catalog line of the `<message>` tag (for report context).
    pub source_line: String,
}

impl Message {
    /// Disambiguation comment, empty string when absent.
    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Identity of the message inside its context.
    pub fn key(&self) -> MessageKey {
        MessageKey::new(&self.context, &self.source, self.comment_str())
    }

    /// True when the entry can be used to answer a lookup.
    pub fn is_usable(&self, include_unfinished: bool) -> bool {
        match self.status {
            TranslationStatus::Finished => true,
            TranslationStatus::Unfinished => include_unfinished,
            TranslationStatus::Vanished | TranslationStatus::Obsolete => false,
        }
    }
}

/// Composite lookup key: context, source text and disambiguation comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::{}", self.context, self.source)
        } else {
            write!(f, "{}::{} ({})", self.context, self.source, self.comment)
        }
    }
}

/// Position with context information in catalog files.
///
/// Carries what a report needs about the offending message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the TS `<context>` the message belongs to.
    pub context_name: String,
    /// The source text.
    pub source: String,
    /// The disambiguation comment, if any.
    pub comment: Option<String>,
    /// The translation as displayed (numerus forms joined).
    pub translation: String,
    /// Raw catalog line for display, empty when unknown.
    pub source_line: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            comment: None,
            translation: translation.into(),
            source_line: String::new(),
        }
    }

    /// Build the report context of a parsed message.
    pub fn from_message(message: &Message) -> Self {
        Self {
            location: message.location.clone(),
            context_name: message.context.clone(),
            source: message.source.clone(),
            comment: message.comment.clone(),
            translation: message.translation.display_text(),
            source_line: message.source_line.clone(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
