//! HTTP execution against the backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::{QueryError, QueryResult};
use super::request::UpstreamRequest;

/// Per-request timeout applied to every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can fetch the body of an [`UpstreamRequest`].
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Perform the request, returning the body of a 200 response.
    async fn fetch(
        &self,
        request: &UpstreamRequest,
        cancel: &CancellationToken,
    ) -> QueryResult<Vec<u8>>;
}

/// [`Upstream`] backed by a pooled `reqwest` client.
///
/// The client is shared by every invocation; no per-request state is kept.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    /// Create an executor with the default 30 second timeout.
    pub fn new() -> QueryResult<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> QueryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(QueryError::from_reqwest)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Upstream for HttpExecutor {
    async fn fetch(
        &self,
        request: &UpstreamRequest,
        cancel: &CancellationToken,
    ) -> QueryResult<Vec<u8>> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());
        if let Some(creds) = &request.basic_auth {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }

        debug!(
            method = %request.method,
            path = request.url.path(),
            authenticated = request.basic_auth.is_some(),
            "Sending backend request"
        );

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(QueryError::cancelled()),
            result = builder.send() => result.map_err(QueryError::from_reqwest)?,
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Backend returned status {} for {}", status, request.url.path());
            return Err(QueryError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(QueryError::cancelled()),
            result = response.bytes() => result.map_err(QueryError::from_reqwest)?,
        };

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gigapipe::backend::BackendConfig;
    use crate::domains::gigapipe::error::ErrorKind;
    use crate::domains::gigapipe::operation::Arguments;
    use crate::domains::gigapipe::request::build;
    use crate::domains::tools::definitions::{PROMETHEUS_QUERY, TEMPO_TAGS};
    use mockito::Matcher;
    use std::net::TcpListener;
    use std::time::Instant;

    /// Listener that completes the TCP handshake but never answers.
    fn silent_backend() -> (TcpListener, UpstreamRequest) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let config = BackendConfig::new(listener.local_addr().unwrap().to_string());
        let request = build(&TEMPO_TAGS, &config, &Arguments::new()).unwrap();
        (listener, request)
    }

    fn request_for(server: &mockito::ServerGuard, config: BackendConfig) -> UpstreamRequest {
        let config = BackendConfig {
            host: server.host_with_port(),
            ..config
        };
        build(&TEMPO_TAGS, &config, &Arguments::new()).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search/tags")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"tagNames":["service.name"]}"#)
            .create_async()
            .await;

        let executor = HttpExecutor::new().unwrap();
        let request = request_for(&server, BackendConfig::default());
        let body = executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(body, br#"{"tagNames":["service.name"]}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_params_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/query_range")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "up".into()),
                Matcher::UrlEncoded("step".into(), "15s".into()),
            ]))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let config = BackendConfig::new(server.host_with_port());
        let args = Arguments::new().with("query", "up").with("step", "15s");
        let request = build(&PROMETHEUS_QUERY, &config, &args).unwrap();

        let executor = HttpExecutor::new().unwrap();
        executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_basic_auth_header_attached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search/tags")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        // Force plain http against the mock server while keeping the header.
        let mut request = request_for(&server, BackendConfig::default());
        request.basic_auth = BackendConfig::default()
            .with_credentials("user", "pass")
            .credentials();

        let executor = HttpExecutor::new().unwrap();
        executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search/tags")
            .with_status(500)
            .with_body(r#"{"status":"error","error":"boom"}"#)
            .create_async()
            .await;

        let executor = HttpExecutor::new().unwrap();
        let request = request_for(&server, BackendConfig::default());
        let err = executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::Upstream { status: 500 }));
        assert!(!err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_other_success_codes_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search/tags")
            .with_status(204)
            .create_async()
            .await;

        let executor = HttpExecutor::new().unwrap();
        let request = request_for(&server, BackendConfig::default());
        let err = executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::Upstream { status: 204 }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let config = BackendConfig::new("127.0.0.1:1");
        let request = build(&TEMPO_TAGS, &config, &Arguments::new()).unwrap();

        let executor = HttpExecutor::new().unwrap();
        let err = executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.to_string().contains("127.0.0.1:1"));
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let config = BackendConfig::new("127.0.0.1:1");
        let request = build(&TEMPO_TAGS, &config, &Arguments::new()).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let executor = HttpExecutor::new().unwrap();
        let err = executor.fetch(&request, &cancel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("cancelled"));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let (_listener, request) = silent_backend();

        let timeout = Duration::from_millis(200);
        let executor = HttpExecutor::with_timeout(timeout).unwrap();
        let started = Instant::now();
        let err = executor
            .fetch(&request, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("timed out"), "{err}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_cancelled_while_in_flight() {
        let (_listener, request) = silent_backend();
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            trigger.cancel();
        });

        let executor = HttpExecutor::new().unwrap();
        let started = Instant::now();
        let err = executor.fetch(&request, &cancel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("cancelled"), "{err}");
        assert!(started.elapsed() < REQUEST_TIMEOUT);
    }
}
