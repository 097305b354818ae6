//! Tool Registry - dispatch by tool name.
//!
//! Every route in the rmcp router hands its call to the registry, which
//! looks the operation up in the table and runs it through the dispatcher.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::domains::gigapipe::Dispatcher;

use super::definitions::find;
use super::error::ToolError;

/// Tool registry - resolves tool names to operations.
pub struct ToolRegistry {
    dispatcher: Arc<Dispatcher>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Run the named tool and return the backend's normalized JSON.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
        cancel: &CancellationToken,
    ) -> Result<String, ToolError> {
        let Some(spec) = find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        self.dispatcher
            .dispatch_json(spec, arguments, cancel)
            .await
            .map_err(ToolError::from)
    }
}
