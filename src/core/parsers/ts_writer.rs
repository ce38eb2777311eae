//! Qt Linguist TS writer.
//!
//! Produces the layout `lupdate` writes: 4-space indentation, one element
//! per line and numerus forms nested inside `<translation>`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::{Catalog, Context, Message, SourceRef, TranslatedText, Translation};

/// Version written when the catalog carries none.
pub const DEFAULT_VERSION: &str = "2.1";

/// Serialize a catalog to TS XML.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape_text(
        catalog.version.as_deref().unwrap_or(DEFAULT_VERSION),
    ));
    out.push('"');
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape_text(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape_text(source_language));
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        write_context(&mut out, context);
    }
    out.push_str("</TS>\n");
    out
}

/// Write a catalog to disk, creating parent directories as needed.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, write_catalog(catalog))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    element(out, 4, "name", &context.name);
    if let Some(comment) = &context.comment {
        element(out, 4, "comment", comment);
    }
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message");
    if let Some(id) = &message.id {
        let _ = write!(out, " id=\"{}\"", escape_text(id));
    }
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    out.push_str(">\n");

    for reference in &message.references {
        write_location(out, reference);
    }
    element(out, 8, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            element(out, 8, tag, value);
        }
    }
    write_translation(out, message);
    out.push_str("    </message>\n");
}

fn write_location(out: &mut String, reference: &SourceRef) {
    out.push_str("        <location");
    if let Some(filename) = &reference.filename {
        let _ = write!(out, " filename=\"{}\"", escape_text(filename));
    }
    if let Some(line) = &reference.line {
        let _ = write!(out, " line=\"{}\"", escape_text(line));
    }
    out.push_str("/>\n");
}

fn write_translation(out: &mut String, message: &Message) {
    out.push_str("        <translation");
    if let Some(kind) = message.status.type_attr() {
        let _ = write!(out, " type=\"{}\"", kind);
    }

    match &message.translation {
        Translation::Numerus(forms) if message.numerus || !forms.is_empty() => {
            out.push_str(">\n");
            for form in forms {
                out.push_str("            <numerusform");
                write_variants(out, form, 16);
                out.push_str("</numerusform>\n");
            }
            out.push_str("        </translation>\n");
        }
        Translation::Numerus(_) => out.push_str("></translation>\n"),
        Translation::Single(text) => {
            write_variants(out, text, 12);
            out.push_str("</translation>\n");
        }
    }
}

/// Write the rest of an open tag plus its content. Length variants go on
/// their own lines at `indent`.
fn write_variants(out: &mut String, text: &TranslatedText, indent: usize) {
    if !text.has_length_variants() {
        out.push('>');
        out.push_str(&escape_text(text.text()));
        return;
    }
    out.push_str(" variants=\"yes\">");
    for variant in &text.variants {
        out.push('\n');
        element_inline(out, indent, "lengthvariant", variant);
    }
    out.push('\n');
    out.push_str(&" ".repeat(indent - 4));
}

fn element(out: &mut String, indent: usize, tag: &str, text: &str) {
    element_inline(out, indent, tag, text);
    out.push('\n');
}

fn element_inline(out: &mut String, indent: usize, tag: &str, text: &str) {
    let _ = write!(
        out,
        "{}<{tag}>{}</{tag}>",
        " ".repeat(indent),
        escape_text(text)
    );
}

/// Escape markup characters; control characters become `<byte>` elements.
fn escape_text(text: &str) -> String {
    if !text.chars().any(is_byte_escaped) {
        return quick_xml::escape::escape(text).into_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if is_byte_escaped(c) {
            out.push_str(&quick_xml::escape::escape(&text[start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            start = i + c.len_utf8();
        }
    }
    out.push_str(&quick_xml::escape::escape(&text[start..]));
    out
}

fn is_byte_escaped(c: char) -> bool {
    c.is_control() && (c as u32) < 0x20 && !matches!(c, '\n' | '\r' | '\t')
}
