//! Rule implementations for tscat.
//!
//! Each rule is a pure function over one parsed catalog returning a specific
//! issue type, plus a `check_*_issues` wrapper that runs it over every
//! catalog of a `CheckContext`.
//!
//! ## Module Structure
//!
//! - `helpers`: ignored contexts and the per-catalog runner
//! - `empty_source`: messages with an empty `<source>`
//! - `duplicate`: repeated `(source, comment)` pairs in a context
//! - `numerus`: plural form count and shape
//! - `place_marker`: `%1`..`%99` and `%n` consistency
//! - `accelerator`: `&X` mnemonics on one side only
//! - `punctuation`: trailing punctuation differences
//! - `empty_translation`: finished entries without text
//! - `vanished`: retired and unfinished entries

pub mod accelerator;
pub mod duplicate;
pub mod empty_source;
pub mod empty_translation;
pub mod helpers;
pub mod numerus;
pub mod place_marker;
pub mod punctuation;
pub mod vanished;
