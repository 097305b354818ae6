//! Tool definitions module.
//!
//! Each backend's operations are declared in their own file as
//! [`OperationSpec`] constants. `OPERATIONS` is the single table every other
//! part of the server (router, registry) is built from.

pub mod common;
pub mod logs;
pub mod metrics;
pub mod traces;

use crate::domains::gigapipe::OperationSpec;

pub use logs::{LOKI_LABEL_VALUES, LOKI_LABELS, LOKI_QUERY};
pub use metrics::{PROMETHEUS_LABEL_VALUES, PROMETHEUS_LABELS, PROMETHEUS_QUERY};
pub use traces::{TEMPO_QUERY, TEMPO_TAG_VALUES, TEMPO_TAGS};

/// Every operation exposed as a tool.
pub static OPERATIONS: [&OperationSpec; 9] = [
    &PROMETHEUS_QUERY,
    &PROMETHEUS_LABELS,
    &PROMETHEUS_LABEL_VALUES,
    &LOKI_QUERY,
    &LOKI_LABELS,
    &LOKI_LABEL_VALUES,
    &TEMPO_QUERY,
    &TEMPO_TAGS,
    &TEMPO_TAG_VALUES,
];

/// Look up an operation by tool name.
pub fn find(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().copied().find(|spec| spec.name == name)
}
