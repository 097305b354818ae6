//! Domains module containing business logic organized by bounded contexts.
//!
//! - **gigapipe**: the query pipeline (config, request, HTTP, decoding)
//! - **tools**: MCP tools built from the operation table

pub mod gigapipe;
pub mod tools;
