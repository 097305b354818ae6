//! Tools domain module.
//!
//! Each tool is one Gigapipe query operation. Tools are executed by MCP
//! clients and answered with the backend's JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Operation tables (one file per backend)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Dispatch by tool name, used by every route
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare an `OperationSpec` constant in the matching `definitions/` file
//! 2. Add it to `OPERATIONS` in `definitions/mod.rs`
//!
//! The router and registry both read the table.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
