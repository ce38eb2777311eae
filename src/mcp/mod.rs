//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog checks and lookups to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading, rule parsing and JSON results
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod helpers;
mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
