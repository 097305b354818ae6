//! Shared helpers turning operation specs into MCP tools.
//!
//! Every operation is exposed the same way: a tool whose input schema lists
//! its string arguments, and a route that hands the call to the
//! [`ToolRegistry`].

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::domains::gigapipe::{ArgSpec, ErrorKind, OperationSpec};
use crate::domains::tools::{ToolError, ToolRegistry};

/// Optional range start shared by the metrics and logs operations.
pub const START_ARG: ArgSpec =
    ArgSpec::optional("start", "Start timestamp (RFC3339 or Unix timestamp)");

/// Optional range end shared by the metrics and logs operations.
pub const END_ARG: ArgSpec = ArgSpec::optional("end", "End timestamp (RFC3339 or Unix timestamp)");

/// JSON schema for the arguments of `spec`.
pub fn input_schema(spec: &OperationSpec) -> JsonObject {
    let mut properties = JsonObject::new();
    for arg in spec.args {
        properties.insert(
            arg.name.to_string(),
            json!({ "type": "string", "description": arg.description }),
        );
    }

    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    let required: Vec<&str> = spec.required_args().collect();
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

/// Create the Tool model (metadata) for `spec`.
pub fn to_tool(spec: &OperationSpec) -> Tool {
    Tool {
        name: spec.name.into(),
        description: Some(spec.description.into()),
        input_schema: Arc::new(input_schema(spec)),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Turn a pipeline outcome into the result returned to the client.
pub fn into_call_result(spec: &OperationSpec, result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(body) => {
            info!("{} succeeded ({} bytes)", spec.name, body.len());
            success_result(body)
        }
        Err(ToolError::Query(e)) if e.kind() == ErrorKind::Transport => {
            error!("{} could not reach backend: {}", spec.name, e);
            error_result(&e.to_string())
        }
        Err(e) => error_result(&e.to_string()),
    }
}

/// Create a ToolRoute for `spec` (STDIO/TCP transport).
///
/// The call is cancelled together with the MCP request that carries it.
pub fn create_route<S>(spec: &'static OperationSpec, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool(spec), move |ctx: ToolCallContext<'_, S>| {
        let registry = registry.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        let cancel = ctx.request_context.ct.clone();
        async move {
            let result = registry.call_tool(spec.name, args, &cancel).await;
            Ok::<_, McpError>(into_call_result(spec, result))
        }
        .boxed()
    })
}
