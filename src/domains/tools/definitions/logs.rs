//! Loki-compatible log operations.

use crate::domains::gigapipe::{ArgSpec, Backend, OperationSpec};

use super::common::{END_ARG, START_ARG};

pub const LOKI_QUERY: OperationSpec = OperationSpec {
    name: "loki_query",
    description: "Query logs from Loki API",
    backend: Backend::Logs,
    path: "/loki/api/v1/query_range",
    args: &[
        ArgSpec::required("query", "LogQL query to execute"),
        START_ARG,
        END_ARG,
        ArgSpec::optional("limit", "Maximum number of entries to return"),
    ],
};

pub const LOKI_LABELS: OperationSpec = OperationSpec {
    name: "loki_labels",
    description: "List all available label names in Loki",
    backend: Backend::Logs,
    path: "/loki/api/v1/label",
    args: &[START_ARG, END_ARG],
};

pub const LOKI_LABEL_VALUES: OperationSpec = OperationSpec {
    name: "loki_label_values",
    description: "List all values for a specific label in Loki",
    backend: Backend::Logs,
    path: "/loki/api/v1/label/{label}/values",
    args: &[
        ArgSpec::required("label", "Label name to get values for"),
        START_ARG,
        END_ARG,
    ],
};
