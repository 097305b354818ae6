//! Operation specifications and invocation arguments.

use std::collections::HashMap;

use serde_json::Value;

use super::error::{QueryError, QueryResult};

/// Which query API an operation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Prometheus-compatible metrics API.
    Metrics,
    /// Loki-compatible logs API.
    Logs,
    /// Tempo-compatible traces API.
    Traces,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Logs => "logs",
            Self::Traces => "traces",
        }
    }
}

/// One named string argument accepted by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ArgSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
        }
    }
}

/// Static description of one query operation.
///
/// `path` may embed `{arg}` placeholders; every placeholder must name a
/// required argument. All other present arguments become query parameters
/// in the order they are declared in `args`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub backend: Backend,
    pub path: &'static str,
    pub args: &'static [ArgSpec],
}

impl OperationSpec {
    /// HTTP method used by every operation.
    pub const METHOD: reqwest::Method = reqwest::Method::GET;

    pub fn required_args(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().filter(|a| a.required).map(|a| a.name)
    }

    pub fn optional_args(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().filter(|a| !a.required).map(|a| a.name)
    }

    /// Names of the arguments substituted into the path template.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    /// Arguments sent as query parameters, in declaration order.
    pub fn query_args(&self) -> impl Iterator<Item = &'static str> + '_ {
        let path = self.path;
        self.args
            .iter()
            .map(|a| a.name)
            .filter(move |name| !path.contains(&format!("{{{}}}", name)))
    }
}

/// Named string arguments of a single tool invocation.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Convert JSON tool arguments.
    ///
    /// Strings are taken verbatim; numbers and booleans use their JSON text;
    /// `null` is treated as absent. Arrays and objects are rejected.
    pub fn from_json(object: serde_json::Map<String, Value>) -> QueryResult<Self> {
        let mut values = HashMap::with_capacity(object.len());
        for (name, value) in object {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(QueryError::invalid_argument(name, "expected a string"));
                }
            };
            values.insert(name, text);
        }
        Ok(Self { values })
    }

    /// Non-empty value of an argument.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: OperationSpec = OperationSpec {
        name: "sample",
        description: "sample",
        backend: Backend::Metrics,
        path: "/api/v1/label/{label}/values",
        args: &[
            ArgSpec::required("label", "label"),
            ArgSpec::optional("start", "start"),
            ArgSpec::optional("end", "end"),
        ],
    };

    #[test]
    fn test_arg_partitions() {
        assert_eq!(SAMPLE.required_args().collect::<Vec<_>>(), vec!["label"]);
        assert_eq!(
            SAMPLE.optional_args().collect::<Vec<_>>(),
            vec!["start", "end"]
        );
        assert_eq!(SAMPLE.path_params().collect::<Vec<_>>(), vec!["label"]);
        assert_eq!(
            SAMPLE.query_args().collect::<Vec<_>>(),
            vec!["start", "end"]
        );
    }

    #[test]
    fn test_from_json_converts_scalars() {
        let object = json!({
            "query": "up",
            "limit": 100,
            "flag": true,
            "end": null
        });
        let args = Arguments::from_json(object.as_object().unwrap().clone());
        let args = args.unwrap();
        assert_eq!(args.get("query"), Some("up"));
        assert_eq!(args.get("limit"), Some("100"));
        assert_eq!(args.get("flag"), Some("true"));
        assert_eq!(args.get("end"), None);
    }

    #[test]
    fn test_from_json_rejects_structures() {
        let object = json!({ "query": ["up"] });
        let err = Arguments::from_json(object.as_object().unwrap().clone());
        let err = err.unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_empty_value_reads_as_absent() {
        let args = Arguments::new().with("start", "");
        assert_eq!(args.get("start"), None);
        assert_eq!(args.len(), 1);
    }
}
