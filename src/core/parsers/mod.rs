//! Catalog file readers and writers.
//!
//! - `ts`: Qt Linguist TS reader (streaming, keeps positions for reports)
//! - `ts_writer`: TS writer in the layout lupdate produces

pub mod ts;
pub mod ts_writer;
