//! Catalog model and the pipeline that feeds the rules.
//!
//! - `data`: messages, contexts and catalogs
//! - `parsers`: TS reader and writer
//! - `scanner`: catalog discovery
//! - `context`: configuration plus parsed catalogs for one run
//! - `plural`: numerus rules
//! - `translator`: lookup engine

pub mod context;
pub mod data;
pub mod parsers;
pub mod plural;
pub mod scanner;
pub mod translator;

pub use context::{CheckContext, LoadedCatalog};
pub use data::*;
pub use translator::{Translator, TranslatorError};
