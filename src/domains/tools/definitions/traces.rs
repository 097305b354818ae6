//! Tempo-compatible trace operations.
//!
//! None of these take a time range; the trace id or tag name is the only
//! input and it goes into the path.

use crate::domains::gigapipe::{ArgSpec, Backend, OperationSpec};

pub const TEMPO_QUERY: OperationSpec = OperationSpec {
    name: "tempo_query",
    description: "Query traces from Tempo API",
    backend: Backend::Traces,
    path: "/api/traces/{trace_id}/json",
    args: &[ArgSpec::required("trace_id", "Trace ID to query")],
};

pub const TEMPO_TAGS: OperationSpec = OperationSpec {
    name: "tempo_tags",
    description: "List all available trace tags in Tempo",
    backend: Backend::Traces,
    path: "/api/search/tags",
    args: &[],
};

pub const TEMPO_TAG_VALUES: OperationSpec = OperationSpec {
    name: "tempo_tag_values",
    description: "List all values for a specific trace tag in Tempo",
    backend: Backend::Traces,
    path: "/api/search/tag/{tag}/values",
    args: &[ArgSpec::required("tag", "Tag name to get values for")],
};
