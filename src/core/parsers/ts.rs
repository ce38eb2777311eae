//! Qt Linguist TS reader.
//!
//! Streams the XML with `quick-xml` and builds a [`Catalog`]. Hard failures
//! (unreadable file, malformed XML) are returned as [`TsError`]; structural
//! problems that still leave a usable catalog are collected as
//! [`SchemaViolation`]s so that a single bad message doesn't hide the rest.

use std::{fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

use crate::core::{
    Catalog, Context, Message, MessageLocation, SourceRef, TranslatedText, Translation,
    TranslationStatus,
};

/// TS format versions Qt Linguist reads.
pub const SUPPORTED_VERSIONS: &[&str] = &["1.1", "2.0", "2.1"];

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Error)]
pub enum TsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Xml {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{path} is not valid UTF-8")]
    Encoding { path: String },

    #[error("{path} is not a Qt Linguist catalog (no <TS> root element)")]
    NotACatalog { path: String },
}

/// A structural problem found while reading an otherwise well-formed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub location: MessageLocation,
    pub message: String,
    /// Raw catalog line for report context.
    pub source_line: String,
}

/// Output of a successful parse.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub violations: Vec<SchemaViolation>,
}

/// Read and parse a TS file from disk.
pub fn parse_ts_file(path: &Path) -> Result<ParsedCatalog, TsError> {
    let file_path = path.to_string_lossy().to_string();
    let bytes = fs::read(path).map_err(|source| TsError::Io {
        path: file_path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| TsError::Encoding {
        path: file_path.clone(),
    })?;
    parse_ts_str(&content, &file_path)
}

/// Parse TS content. `file_path` is only used for locations and messages.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<ParsedCatalog, TsError> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    TsParser::new(content, file_path).parse()
}

/// True if the content looks like XML rather than TypeScript source.
///
/// Both share the `.ts` extension, so the scanner sniffs before parsing.
pub fn looks_like_ts_catalog(content: &str) -> bool {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    content.trim_start().starts_with('<')
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// What the parser is currently positioned on, for locations.
struct Position {
    location: MessageLocation,
    source_line: String,
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    content: &'a str,
    file_path: &'a str,
    line_index: Vec<usize>,
    violations: Vec<SchemaViolation>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            content,
            file_path,
            line_index: build_line_index(content),
            violations: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<ParsedCatalog, TsError> {
        let mut catalog = None;

        loop {
            let offset = self.offset();
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let position = self.position_at(offset);
                    let header = self.read_header(&e, &position)?;
                    let contexts = self.read_ts_body()?;
                    if catalog.is_none() {
                        catalog = Some(header.into_catalog(self.file_path, contexts));
                    }
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    let position = self.position_at(offset);
                    let header = self.read_header(&e, &position)?;
                    if catalog.is_none() {
                        catalog = Some(header.into_catalog(self.file_path, Vec::new()));
                    }
                }
                Event::Start(e) => {
                    let name = element_name(&e);
                    self.violation(offset, format!("unexpected root element <{}>", name));
                    self.skip_element()?;
                }
                Event::Empty(e) => {
                    let name = element_name(&e);
                    self.violation(offset, format!("unexpected root element <{}>", name));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        match catalog {
            Some(catalog) => Ok(ParsedCatalog {
                catalog,
                violations: self.violations,
            }),
            None => Err(TsError::NotACatalog {
                path: self.file_path.to_string(),
            }),
        }
    }

    // ============================================================
    // Elements
    // ============================================================

    fn read_header(&mut self, e: &BytesStart<'_>, position: &Position) -> Result<Header, TsError> {
        let version = self.attribute(e, "version")?;
        match version.as_deref() {
            None => self.push_violation(position, "<TS> is missing the version attribute"),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                self.push_violation(position, &format!("unsupported TS version \"{}\"", v))
            }
            Some(_) => {}
        }
        Ok(Header {
            version,
            language: self.attribute(e, "language")?,
            source_language: self.attribute(e, "sourcelanguage")?,
        })
    }

    fn read_ts_body(&mut self) -> Result<Vec<Context>, TsError> {
        let mut contexts = Vec::new();
        loop {
            let offset = self.offset();
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"context" => contexts.push(self.read_context(offset)?),
                    b"dependencies" | b"defaultcodec" => self.skip_element()?,
                    name if name.starts_with(b"extra-") => self.skip_element()?,
                    _ => {
                        let name = element_name(&e);
                        self.violation(offset, format!("unknown element <{}> in <TS>", name));
                        self.skip_element()?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"context" => self.violation(offset, "<context> without <name>".to_string()),
                    b"dependencies" | b"defaultcodec" => {}
                    name if name.starts_with(b"extra-") => {}
                    _ => {
                        let name = element_name(&e);
                        self.violation(offset, format!("unknown element <{}> in <TS>", name));
                    }
                },
                Event::Text(text) => self.check_whitespace(offset, &text, "<TS>")?,
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("TS")),
                _ => {}
            }
        }
        Ok(contexts)
    }

    fn read_context(&mut self, context_offset: usize) -> Result<Context, TsError> {
        let mut name = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            let offset = self.offset();
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text()?),
                    b"comment" => comment = Some(self.read_text()?),
                    b"message" => messages.push(self.read_message(&e, offset)?),
                    b"encoding" => self.skip_element()?,
                    n if n.starts_with(b"extra-") => self.skip_element()?,
                    _ => {
                        let name = element_name(&e);
                        self.violation(offset, format!("unknown element <{}> in <context>", name));
                        self.skip_element()?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    b"message" => {
                        self.violation(offset, "<message> without <source>".to_string())
                    }
                    b"encoding" => {}
                    n if n.starts_with(b"extra-") => {}
                    _ => {
                        let name = element_name(&e);
                        self.violation(offset, format!("unknown element <{}> in <context>", name));
                    }
                },
                Event::Text(text) => self.check_whitespace(offset, &text, "<context>")?,
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("context")),
                _ => {}
            }
        }

        let name = match name {
            Some(name) => name,
            None => {
                self.violation(context_offset, "<context> without <name>".to_string());
                String::new()
            }
        };
        for message in &mut messages {
            message.context = name.clone();
        }

        Ok(Context {
            name,
            comment,
            messages,
        })
    }

    fn read_message(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<Message, TsError> {
        let position = self.position_at(offset);
        let numerus = self.attribute(start, "numerus")?.as_deref() == Some("yes");
        let mut message = Message {
            id: self.attribute(start, "id")?,
            numerus,
            location: position.location.clone(),
            source_line: position.source_line.clone(),
            ..Default::default()
        };
        let mut source = None;
        let mut translation = None;

        loop {
            let child_offset = self.offset();
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => source = Some(self.read_text()?),
                    b"oldsource" => message.old_source = Some(self.read_text()?),
                    b"comment" => message.comment = Some(self.read_text()?),
                    b"oldcomment" => message.old_comment = Some(self.read_text()?),
                    b"extracomment" => message.extra_comment = Some(self.read_text()?),
                    b"translatorcomment" => message.translator_comment = Some(self.read_text()?),
                    b"translation" => {
                        translation = Some(self.read_translation(&e, numerus, child_offset)?)
                    }
                    b"location" => {
                        message.references.push(self.read_location(&e)?);
                        self.skip_element()?;
                    }
                    b"userdata" => self.skip_element()?,
                    n if n.starts_with(b"extra-") => self.skip_element()?,
                    _ => {
                        let name = element_name(&e);
                        self.violation(
                            child_offset,
                            format!("unknown element <{}> in <message>", name),
                        );
                        self.skip_element()?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => message.references.push(self.read_location(&e)?),
                    b"source" => source = Some(String::new()),
                    b"comment" => message.comment = Some(String::new()),
                    b"oldsource" | b"oldcomment" | b"extracomment" | b"translatorcomment"
                    | b"userdata" => {}
                    b"translation" => {
                        let status = self.read_status(&e, child_offset)?;
                        let payload = if numerus {
                            Translation::Numerus(Vec::new())
                        } else {
                            Translation::default()
                        };
                        translation = Some((payload, status));
                    }
                    n if n.starts_with(b"extra-") => {}
                    _ => {
                        let name = element_name(&e);
                        self.violation(
                            child_offset,
                            format!("unknown element <{}> in <message>", name),
                        );
                    }
                },
                Event::Text(text) => self.check_whitespace(child_offset, &text, "<message>")?,
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("message")),
                _ => {}
            }
        }

        match source {
            Some(source) => message.source = source,
            None => self.push_violation(&position, "<message> without <source>"),
        }
        match translation {
            Some((payload, status)) => {
                message.translation = payload;
                message.status = status;
            }
            None => {
                self.push_violation(&position, "<message> without <translation>");
                message.status = TranslationStatus::Unfinished;
                if numerus {
                    message.translation = Translation::Numerus(Vec::new());
                }
            }
        }

        Ok(message)
    }

    fn read_location(&mut self, e: &BytesStart<'_>) -> Result<SourceRef, TsError> {
        Ok(SourceRef {
            filename: self.attribute(e, "filename")?,
            line: self.attribute(e, "line")?,
        })
    }

    fn read_status(
        &mut self,
        e: &BytesStart<'_>,
        offset: usize,
    ) -> Result<TranslationStatus, TsError> {
        let Some(value) = self.attribute(e, "type")? else {
            return Ok(TranslationStatus::Finished);
        };
        match TranslationStatus::from_type_attr(&value) {
            Some(status) => Ok(status),
            None => {
                self.violation(offset, format!("invalid translation type \"{}\"", value));
                Ok(TranslationStatus::Finished)
            }
        }
    }

    /// Read a `<translation>` element, plain or with `<numerusform>` children.
    fn read_translation(
        &mut self,
        start: &BytesStart<'_>,
        numerus: bool,
        offset: usize,
    ) -> Result<(Translation, TranslationStatus), TsError> {
        let status = self.read_status(start, offset)?;
        let mut forms = Vec::new();
        let mut variants = Vec::new();
        let mut text = String::new();

        loop {
            let child_offset = self.offset();
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(self.read_variants()?),
                    b"lengthvariant" => variants.push(self.read_text()?),
                    _ => {
                        let name = element_name(&e);
                        self.violation(
                            child_offset,
                            format!("unknown element <{}> in <translation>", name),
                        );
                        self.skip_element()?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(TranslatedText::new("")),
                    b"lengthvariant" => variants.push(String::new()),
                    b"byte" => text.push_str(&self.read_byte(&e, child_offset)?),
                    _ => {
                        let name = element_name(&e);
                        self.violation(
                            child_offset,
                            format!("unknown element <{}> in <translation>", name),
                        );
                    }
                },
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => text.push_str(&self.cdata(&c)?),
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("translation")),
                _ => {}
            }
        }

        // Whitespace between child elements is layout, not content.
        let translation = if !forms.is_empty() {
            Translation::Numerus(forms)
        } else if !variants.is_empty() {
            Translation::Single(TranslatedText { variants })
        } else if numerus {
            if text.trim().is_empty() {
                Translation::Numerus(Vec::new())
            } else {
                Translation::Numerus(vec![TranslatedText::new(text)])
            }
        } else {
            Translation::Single(TranslatedText::new(text))
        };

        Ok((translation, status))
    }

    /// Read a `<numerusform>`, which may itself hold `<lengthvariant>`s.
    fn read_variants(&mut self) -> Result<TranslatedText, TsError> {
        let mut variants = Vec::new();
        let mut text = String::new();
        loop {
            let offset = self.offset();
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text()?)
                }
                Event::Start(e) => {
                    let name = element_name(&e);
                    self.violation(offset, format!("unexpected element <{}> in text", name));
                    self.skip_element()?;
                }
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push_str(&self.read_byte(&e, offset)?)
                }
                Event::Empty(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(String::new())
                }
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => text.push_str(&self.cdata(&c)?),
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("numerusform")),
                _ => {}
            }
        }
        if variants.is_empty() {
            variants.push(text);
        }
        Ok(TranslatedText { variants })
    }

    /// Read the text content of the current element up to its end tag.
    fn read_text(&mut self) -> Result<String, TsError> {
        let mut text = String::new();
        loop {
            let offset = self.offset();
            match self.next_event()? {
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => text.push_str(&self.cdata(&c)?),
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push_str(&self.read_byte(&e, offset)?)
                }
                Event::Start(e) => {
                    let name = element_name(&e);
                    self.violation(offset, format!("unexpected element <{}> in text", name));
                    self.skip_element()?;
                }
                Event::Empty(e) => {
                    let name = element_name(&e);
                    self.violation(offset, format!("unexpected element <{}> in text", name));
                }
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("text")),
                _ => {}
            }
        }
        Ok(text)
    }

    /// Decode `<byte value="x9"/>` (hex with `x` prefix, else decimal).
    fn read_byte(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<String, TsError> {
        let value = self.attribute(e, "value")?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        match code.and_then(char::from_u32) {
            Some(c) => Ok(c.to_string()),
            None => {
                self.violation(offset, format!("invalid <byte> value \"{}\"", value));
                Ok(String::new())
            }
        }
    }

    /// Skip the element whose start tag was just read, including children.
    fn skip_element(&mut self) -> Result<(), TsError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(self.unexpected_eof("element")),
                _ => {}
            }
        }
        Ok(())
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn next_event(&mut self) -> Result<Event<'a>, TsError> {
        self.reader.read_event().map_err(|err| TsError::Xml {
            path: self.file_path.to_string(),
            line: offset_to_line(&self.line_index, self.reader.error_position() as usize),
            message: err.to_string(),
        })
    }

    fn offset(&self) -> usize {
        self.reader.buffer_position() as usize
    }

    fn attribute(&self, e: &BytesStart<'_>, name: &str) -> Result<Option<String>, TsError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err.to_string()))?;
            if attr.key.as_ref() == name.as_bytes() {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.xml_error(err.to_string()))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn unescape(&self, text: &quick_xml::events::BytesText<'_>) -> Result<String, TsError> {
        text.unescape()
            .map(|t| t.into_owned())
            .map_err(|err| self.xml_error(err.to_string()))
    }

    fn cdata(&self, data: &quick_xml::events::BytesCData<'_>) -> Result<String, TsError> {
        std::str::from_utf8(data)
            .map(str::to_string)
            .map_err(|_| TsError::Encoding {
                path: self.file_path.to_string(),
            })
    }

    fn check_whitespace(
        &mut self,
        offset: usize,
        text: &quick_xml::events::BytesText<'_>,
        parent: &str,
    ) -> Result<(), TsError> {
        if !self.unescape(text)?.trim().is_empty() {
            self.violation(offset, format!("unexpected text in {}", parent));
        }
        Ok(())
    }

    fn xml_error(&self, message: String) -> TsError {
        TsError::Xml {
            path: self.file_path.to_string(),
            line: offset_to_line(&self.line_index, self.offset()),
            message,
        }
    }

    fn unexpected_eof(&self, inside: &str) -> TsError {
        self.xml_error(format!("unexpected end of file inside <{}>", inside))
    }

    /// Position of the tag that starts at (or just before) `offset`.
    fn position_at(&self, offset: usize) -> Position {
        let bytes = self.content.as_bytes();
        let end = offset.min(bytes.len());
        let offset = bytes[..end]
            .iter()
            .rposition(|&b| b == b'<')
            .filter(|_| bytes.get(end) != Some(&b'<'))
            .unwrap_or(end);
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line - 1];
        let line_end = self.content[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(self.content.len());
        let prefix = self.content.get(line_start..offset).unwrap_or("");
        let col = prefix.chars().count() + 1;
        Position {
            location: MessageLocation::new(self.file_path, line, col),
            source_line: self.content[line_start..line_end]
                .trim_end_matches('\r')
                .to_string(),
        }
    }

    fn violation(&mut self, offset: usize, message: String) {
        let position = self.position_at(offset);
        self.push_violation(&position, &message);
    }

    fn push_violation(&mut self, position: &Position, message: &str) {
        self.violations.push(SchemaViolation {
            location: position.location.clone(),
            message: message.to_string(),
            source_line: position.source_line.clone(),
        });
    }
}

struct Header {
    version: Option<String>,
    language: Option<String>,
    source_language: Option<String>,
}

impl Header {
    fn into_catalog(self, file_path: &str, contexts: Vec<Context>) -> Catalog {
        let mut catalog = Catalog::new(file_path, contexts);
        catalog.version = self.version;
        catalog.language = self.language;
        catalog.source_language = self.source_language;
        catalog
    }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}
