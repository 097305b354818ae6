//! Prometheus-compatible metrics operations.

use crate::domains::gigapipe::{ArgSpec, Backend, OperationSpec};

use super::common::{END_ARG, START_ARG};

/// Range query over metrics.
pub const PROMETHEUS_QUERY: OperationSpec = OperationSpec {
    name: "prometheus_query",
    description: "Query metrics from Prometheus API",
    backend: Backend::Metrics,
    path: "/api/v1/query_range",
    args: &[
        ArgSpec::required("query", "PromQL query to execute"),
        START_ARG,
        END_ARG,
        ArgSpec::optional("step", "Query resolution step width (e.g. 15s, 1m, 1h)"),
    ],
};

/// All known label names.
pub const PROMETHEUS_LABELS: OperationSpec = OperationSpec {
    name: "prometheus_labels",
    description: "List all available label names in Prometheus",
    backend: Backend::Metrics,
    path: "/api/v1/labels",
    args: &[START_ARG, END_ARG],
};

/// Values seen for one label.
pub const PROMETHEUS_LABEL_VALUES: OperationSpec = OperationSpec {
    name: "prometheus_label_values",
    description: "List all values for a specific label in Prometheus",
    backend: Backend::Metrics,
    path: "/api/v1/label/{label}/values",
    args: &[
        ArgSpec::required("label", "Label name to get values for"),
        START_ARG,
        END_ARG,
    ],
};
