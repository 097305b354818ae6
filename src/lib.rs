//! Gigapipe MCP Server Library
//!
//! Exposes Prometheus, Loki and Tempo queries against a Gigapipe backend as
//! Model Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**
//!   - **gigapipe**: the request pipeline shared by every tool
//!   - **tools**: the operation table and its MCP routes
//!
//! # Example
//!
//! ```rust,no_run
//! use gigapipe_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
