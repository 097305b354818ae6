//! Generic dispatch of an operation through the query pipeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::backend::BackendConfig;
use super::client::{HttpExecutor, Upstream};
use super::codec::normalize;
use super::error::QueryResult;
use super::operation::{Arguments, OperationSpec};
use super::request::build;

/// When backend settings are read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ConfigSource {
    /// Read the environment on every invocation, so changes apply to the
    /// next call.
    #[default]
    PerInvocation,
    /// Use settings captured once at startup.
    Fixed(BackendConfig),
}

impl ConfigSource {
    /// Backend settings for the current invocation.
    pub fn current(&self) -> BackendConfig {
        match self {
            Self::PerInvocation => BackendConfig::resolve(),
            Self::Fixed(config) => config.clone(),
        }
    }
}

/// Runs operations: config, request, HTTP call, normalization.
pub struct Dispatcher {
    source: ConfigSource,
    upstream: Arc<dyn Upstream>,
}

impl Dispatcher {
    /// Create a dispatcher using the pooled HTTP executor.
    pub fn new(source: ConfigSource) -> QueryResult<Self> {
        Ok(Self::with_upstream(source, Arc::new(HttpExecutor::new()?)))
    }

    pub fn with_upstream(source: ConfigSource, upstream: Arc<dyn Upstream>) -> Self {
        Self { source, upstream }
    }

    /// Run `spec` with the given arguments and return the normalized body.
    #[instrument(skip_all, fields(operation = spec.name, backend = spec.backend.as_str()))]
    pub async fn dispatch(
        &self,
        spec: &OperationSpec,
        args: &Arguments,
        cancel: &CancellationToken,
    ) -> QueryResult<String> {
        let config = self.source.current();
        let request = build(spec, &config, args)?;

        info!("Querying {} {}", request.method, request.url.path());

        let body = self.upstream.fetch(&request, cancel).await?;
        debug!("Received {} bytes", body.len());

        normalize(&body)
    }

    /// Convert raw JSON tool arguments and dispatch.
    pub async fn dispatch_json(
        &self,
        spec: &OperationSpec,
        arguments: serde_json::Map<String, serde_json::Value>,
        cancel: &CancellationToken,
    ) -> QueryResult<String> {
        let args = Arguments::from_json(arguments)?;
        self.dispatch(spec, &args, cancel).await
    }
}
