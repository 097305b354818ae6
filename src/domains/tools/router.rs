//! Tool Router - builds the rmcp ToolRouter from the operation table.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{OPERATIONS, common::create_route};
use super::registry::ToolRegistry;

/// Build the tool router with one route per operation.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    OPERATIONS
        .iter()
        .copied()
        .fold(ToolRouter::new(), |router, spec| {
            router.with_route(create_route(spec, registry.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gigapipe::{ConfigSource, Dispatcher};

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        let dispatcher = Dispatcher::new(ConfigSource::default()).unwrap();
        Arc::new(ToolRegistry::new(Arc::new(dispatcher)))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"prometheus_query"));
        assert!(names.contains(&"loki_label_values"));
        assert!(names.contains(&"tempo_query"));
    }

    #[test]
    fn test_router_matches_operation_table() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        for spec in OPERATIONS {
            assert!(router.has_route(spec.name), "{}", spec.name);
        }
    }

    #[test]
    fn test_router_schema_marks_required() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "tempo_tag_values")
            .unwrap();
        assert_eq!(tool.input_schema["required"], serde_json::json!(["tag"]));
    }
}
