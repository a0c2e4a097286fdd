//! Backend HTTP client.

use super::DataConverter;
use super::wire::{AtualizarResponse, PalpitesResponse, ResultadosResponse};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::model::{RefreshStatus, Results, Suggestions};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Latest draw, statistics and history.
    Results,
    /// Freshly generated bet suggestions.
    Suggestions,
    /// Ask the backend to ingest new draws.
    Refresh,
}

impl Endpoint {
    /// Path relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Results => "/api/resultados",
            Self::Suggestions => "/api/palpites",
            Self::Refresh => "/api/atualizar",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Operations the UI needs from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LotteryApi: Send + Sync {
    /// Fetch results, statistics and history.
    async fn fetch_results(&self) -> Result<Results>;

    /// Fetch a new batch of bet suggestions.
    async fn fetch_suggestions(&self) -> Result<Suggestions>;

    /// Trigger backend ingestion of new draws.
    async fn refresh(&self) -> Result<RefreshStatus>;
}

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            timeout: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Point the client at another backend.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Override the configured timeout with sub-second precision.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        let timeout = self.timeout.unwrap_or_else(|| self.config.timeout());
        ApiClient::with_timeout(self.config, timeout)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the lottery backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let timeout = config.timeout();
        Self::with_timeout(config, timeout)
    }

    fn with_timeout(config: ApiConfig, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Absolute URL of an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint.path())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "request failed");
            Error::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%endpoint, status = status.as_u16(), "non-success response");
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LotteryApi for ApiClient {
    async fn fetch_results(&self) -> Result<Results> {
        let response: ResultadosResponse = self.get_json(Endpoint::Results).await?;
        Ok(DataConverter::convert_results(response))
    }

    async fn fetch_suggestions(&self) -> Result<Suggestions> {
        let response: PalpitesResponse = self.get_json(Endpoint::Suggestions).await?;
        Ok(DataConverter::convert_suggestions(response))
    }

    async fn refresh(&self) -> Result<RefreshStatus> {
        let response: AtualizarResponse = self.get_json(Endpoint::Refresh).await?;
        Ok(DataConverter::convert_refresh(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tokio_test::{assert_err, assert_ok};

    /// Serve one canned HTTP response; the handle yields the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn client(base_url: &str) -> ApiClient {
        ApiClientBuilder::new()
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client("https://backend.example/");
        assert_eq!(
            client.url(Endpoint::Results),
            "https://backend.example/api/resultados"
        );
        assert_eq!(
            client.url(Endpoint::Refresh),
            "https://backend.example/api/atualizar"
        );
    }

    #[test]
    fn test_default_timeout_is_fifteen_seconds() {
        assert_eq!(ApiConfig::default().timeout(), Duration::from_secs(15));
    }

    #[tokio::test]
    async fn test_refresh_success_sends_accept_header() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"status": "ok", "message": "Atualizado", "novos_concursos": 1}"#,
        )
        .await;

        let status = assert_ok!(client(&base).refresh().await);
        assert_eq!(status.new_draws, Some(1));

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /api/atualizar "));
        assert!(request.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = assert_err!(client(&base).fetch_results().await);
        assert!(matches!(err, Error::Api { status: 500 }), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_body_is_serialization_error() {
        let (base, server) = serve_once("200 OK", r#"{"palpites": "nope"}"#).await;

        let err = assert_err!(client(&base).fetch_suggestions().await);
        assert!(matches!(err, Error::Serialization(_)), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = ApiClientBuilder::new()
            .base_url(format!("http://{}", addr))
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();

        let err = client.fetch_results().await.unwrap_err();
        assert!(matches!(err, Error::Timeout), "got {err:?}");
        server.abort();
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .fetch_results()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)), "got {err:?}");
        assert!(err.is_recoverable());
    }
}
