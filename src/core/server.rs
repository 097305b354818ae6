//! MCP Server implementation and lifecycle management.
//!
//! The handler only advertises tools. Each tool is one Gigapipe query
//! operation; the ToolRouter is built from the operation table in
//! `domains/tools/definitions/`, so adding an operation does not touch this
//! file.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::gigapipe::Dispatcher;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Query a Gigapipe backend. Use the prometheus_* tools for metrics \
    (PromQL), loki_* tools for logs (LogQL) and tempo_* tools for traces. Results are the \
    backend's JSON responses.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> CoreResult<Self> {
        let dispatcher = Arc::new(Dispatcher::new(config.backend.clone())?);
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Create a server around an existing dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: Arc<Dispatcher>) -> Self {
        let registry = Arc::new(ToolRegistry::new(dispatcher));
        Self {
            tool_router: build_tool_router::<Self>(registry),
            config: Arc::new(config),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::default();
        server_info.name = self.config.server.name.clone();
        server_info.version = self.config.server.version.clone();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gigapipe::{BackendConfig, ConfigSource};

    fn test_server(host: &str) -> McpServer {
        let config = Config {
            backend: ConfigSource::Fixed(BackendConfig::new(host)),
            ..Config::default()
        };
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_get_info_reports_server_identity() {
        let info = test_server("gigapipe:3100").get_info();
        assert_eq!(info.server_info.name, "gigapipe-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_enables_tools_only() {
        let info = test_server("gigapipe:3100").get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_router_exposes_every_operation() {
        let server = test_server("gigapipe:3100");
        assert_eq!(server.tool_router.list_all().len(), 9);
        assert!(server.tool_router.has_route("loki_label_values"));
    }
}
