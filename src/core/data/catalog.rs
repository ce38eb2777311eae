use std::collections::{HashMap, HashSet};

use super::message::{Message, TranslationStatus};

/// A named group of messages, one per TS `<context>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    /// Context-level `<comment>`, rarely used.
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Per-status message counts of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete entries together.
    pub vanished: usize,
    pub numerus: usize,
}

impl CatalogStats {
    /// Messages still present in the application (finished + unfinished).
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Share of active messages that are finished, in percent.
    pub fn completion(&self) -> f64 {
        let active = self.active();
        if active == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / active as f64
    }
}

/// A loaded translation catalog (one TS file).
///
/// Immutable after construction: the lookup index is built once from the
/// contexts and never updated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub file_path: String,
    /// TS format version (`version` attribute).
    pub version: Option<String>,
    /// Target language (`language` attribute), e.g. "ka_GE".
    pub language: Option<String>,
    /// Source language (`sourcelanguage` attribute).
    pub source_language: Option<String>,
    contexts: Vec<Context>,
    /// context name -> source text -> (context index, message index).
    index: HashMap<String, HashMap<String, Vec<(usize, usize)>>>,
    /// message id -> (context index, message index).
    id_index: HashMap<String, (usize, usize)>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.language == other.language
            && self.source_language == other.source_language
            && self.contexts == other.contexts
    }
}

impl Catalog {
    pub fn new(file_path: impl Into<String>, contexts: Vec<Context>) -> Self {
        let mut catalog = Self {
            file_path: file_path.into(),
            contexts,
            ..Default::default()
        };
        catalog.rebuild_index();
        catalog
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        self.id_index.clear();
        for (ci, context) in self.contexts.iter().enumerate() {
            for (mi, message) in context.messages.iter().enumerate() {
                self.index
                    .entry(context.name.clone())
                    .or_default()
                    .entry(message.source.clone())
                    .or_default()
                    .push((ci, mi));
                if let Some(id) = &message.id {
                    self.id_index.entry(id.clone()).or_insert((ci, mi));
                }
            }
        }
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// All messages in document order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> + '_ {
        self.contexts.iter().flat_map(|c| c.messages.iter())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Every message with this exact context, source and comment, in document order.
    pub fn find<'a, 'c>(
        &'a self,
        context: &str,
        source: &str,
        comment: &'c str,
    ) -> impl Iterator<Item = &'a Message> + use<'a, 'c> {
        self.index
            .get(context)
            .and_then(|sources| sources.get(source))
            .into_iter()
            .flatten()
            .map(|&(ci, mi)| &self.contexts[ci].messages[mi])
            .filter(move |m| m.comment_str() == comment)
    }

    /// Message with the given id, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&Message> {
        self.id_index
            .get(id)
            .map(|&(ci, mi)| &self.contexts[ci].messages[mi])
    }

    /// Language code with the territory stripped ("ka_GE" -> "ka").
    pub fn base_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(|l| l.split(['_', '-']).next().unwrap_or(l))
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for message in self.messages() {
            stats.messages += 1;
            if message.numerus {
                stats.numerus += 1;
            }
            match message.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Vanished | TranslationStatus::Obsolete => stats.vanished += 1,
            }
        }
        stats
    }

    /// Remove vanished and obsolete messages, dropping contexts left empty.
    ///
    /// Contexts named in `keep_contexts` are left untouched. Returns the
    /// removed messages.
    pub fn remove_retired(&mut self, keep_contexts: &HashSet<&str>) -> Vec<Message> {
        let mut removed = Vec::new();
        for context in &mut self.contexts {
            if keep_contexts.contains(context.name.as_str()) {
                continue;
            }
            let (retired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut context.messages)
                .into_iter()
                .partition(|m| m.status.is_retired());
            context.messages = kept;
            removed.extend(retired);
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        self.rebuild_index();
        removed
    }
}
