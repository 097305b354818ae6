//! Response normalization.
//!
//! Backend bodies are decoded as a JSON object and serialized again. Top
//! level keys come out sorted and without surrounding whitespace. Member
//! values are validated but kept as raw JSON text, so numbers are never
//! rounded through `f64`.

use std::collections::BTreeMap;

use serde_json::value::RawValue;

use super::error::{QueryError, QueryResult};

/// Decode a backend body as a JSON object and re-encode it.
pub fn normalize(body: &[u8]) -> QueryResult<String> {
    let object: BTreeMap<String, Box<RawValue>> =
        serde_json::from_slice(body).map_err(|e| QueryError::decode(e.to_string()))?;

    serde_json::to_string(&object).map_err(|e| QueryError::decode(e.to_string()))
}
