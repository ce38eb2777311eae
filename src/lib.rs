//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat is a CLI tool and library for loading, checking and querying Qt
//! Linguist translation source (`.ts`) files. It parses TS 2.1 catalogs,
//! resolves translations the way Qt's translator does, and lints catalogs
//! for broken place markers, plural forms, accelerators and duplicates.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, lookup, stats, clean, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, TS parser and writer, scanner, translator
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Lint rules over parsed catalogs
//! - `utils`: Shared text helpers (place markers, accelerators, punctuation)

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
