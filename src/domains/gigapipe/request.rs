//! Upstream request construction.

use reqwest::{Method, Url};

use super::backend::{BackendConfig, Credentials};
use super::error::{QueryError, QueryResult};
use super::operation::{Arguments, OperationSpec};

/// A fully resolved request to the backend.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
    pub basic_auth: Option<Credentials>,
}

/// Build the request for `spec` from the backend settings and arguments.
///
/// Required arguments are checked before anything else, so a validation
/// failure never reaches the network.
pub fn build(
    spec: &OperationSpec,
    config: &BackendConfig,
    args: &Arguments,
) -> QueryResult<UpstreamRequest> {
    for name in spec.required_args() {
        if args.get(name).is_none() {
            return Err(QueryError::missing(name));
        }
    }

    let mut url = Url::parse(&config.base_url()).map_err(|e| {
        QueryError::transport(format!("invalid backend host '{}': {}", config.host, e))
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            QueryError::transport(format!("invalid backend host '{}'", config.host))
        })?;
        segments.pop_if_empty();

        for segment in spec.path.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => {
                    let value = args.get(param).ok_or_else(|| QueryError::missing(param))?;
                    if value == "." || value == ".." {
                        return Err(QueryError::invalid_argument(
                            param,
                            "must not be a relative path segment",
                        ));
                    }
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    let params: Vec<(&str, &str)> = spec
        .query_args()
        .filter_map(|name| args.get(name).map(|value| (name, value)))
        .collect();

    if !params.is_empty() {
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| QueryError::invalid_argument("query string", e.to_string()))?;
        url.set_query(Some(&query));
    }

    Ok(UpstreamRequest {
        method: OperationSpec::METHOD,
        url,
        basic_auth: config.credentials(),
    })
}
