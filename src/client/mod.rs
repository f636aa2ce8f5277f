//! Dokploy REST client.
//!
//! [`DokployClient::do_request`] is the single network egress point: every
//! typed endpoint helper in the submodules funnels through it. Successful
//! payloads are handed back as raw bytes; decoding is left to the caller.
//!
//! ```text
//! certificates / destinations / deployments / docker / environment
//!                         │
//!                         ▼
//!          get_json / post_json (decode bytes)
//!                         │
//!                         ▼
//!               send (headers, status)
//! ```

pub mod certificates;
pub mod deployments;
pub mod destinations;
pub mod docker;
pub mod environment;
pub mod error;
pub mod organization;
pub mod types;

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::{ClientError, ClientResult};

/// Transport timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_HEADER: &str = "x-api-key";

/// Client for a single Dokploy instance.
///
/// Configuration is fixed at construction, so one client can be shared by
/// reference between concurrent callers.
#[derive(Debug, Clone)]
pub struct DokployClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl DokployClient {
    /// Build a client with the default 30 second transport timeout.
    pub fn new(base_url: &str, api_key: &str) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(ClientError::Transport)?;

        Self::with_http_client(base_url, api_key, http)
    }

    /// Build a client around a caller-supplied transport.
    pub fn with_http_client(base_url: &str, api_key: &str, http: Client) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ClientError::invalid_config(
                "base_url",
                "Dokploy host is required. Set DOKPLOY_HOST or run 'dokploy init'",
            ));
        }
        if api_key.is_empty() {
            return Err(ClientError::invalid_config(
                "api_key",
                "Dokploy API key is required. Set DOKPLOY_API_KEY or run 'dokploy init'",
            ));
        }

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue one request and classify the response by status.
    ///
    /// A 2xx response yields the payload bytes untouched, whether or not they
    /// are valid JSON. Any other status becomes [`ClientError::Api`]. When
    /// `body` is `None` the request carries an empty payload.
    pub async fn do_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Bytes>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, &[], body).await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ClientResult<Bytes>
    where
        B: Serialize + ?Sized,
    {
        // Encode before touching the network.
        let payload = match body {
            Some(body) => serde_json::to_vec(body).map_err(ClientError::Serialization)?,
            None => Vec::new(),
        };

        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);

        let query: Vec<(&str, &str)> = query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .copied()
            .collect();
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "Dokploy API call");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status, body));
        }

        response.bytes().await.map_err(ClientError::Transport)
    }

    /// GET an endpoint and decode the JSON payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let bytes = self.send::<()>(Method::GET, path, query, None).await?;
        decode(path, &bytes)
    }

    /// GET an endpoint and return the payload as untyped JSON.
    pub(crate) async fn get_value(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<serde_json::Value> {
        self.get_json(path, query).await
    }

    /// POST a JSON body and decode the JSON payload.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.send(Method::POST, path, &[], Some(body)).await?;
        decode(path, &bytes)
    }

    /// POST a JSON body, ignoring whatever the API answers on success.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::decode(endpoint, e))
}
