/*
[INPUT]:  HTTP configuration (timeouts), environment (API root, key, marketplace)
[OUTPUT]: Authenticated round trips returning success bytes or typed errors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request assembly
*/

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{BalancedError, Result};
use super::payload::Payload;
use super::response::{Envelope, classify};
use crate::types::Page;

/// Root of the Balanced API (test marketplaces live on the same host)
pub const DEFAULT_API_ROOT: &str = "https://api.balancedpayments.com";

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!("balanced-adapter/", env!("CARGO_PKG_VERSION"));

const RESPONSE_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Connection details shared by every request of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    api_root: String,
    api_key: Option<String>,
    marketplace_id: Option<String>,
}

impl Environment {
    pub fn new(
        api_root: impl Into<String>,
        api_key: Option<String>,
        marketplace_id: Option<String>,
    ) -> Self {
        let api_root = api_root.into();
        Self {
            api_root: api_root.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
            marketplace_id: marketplace_id.filter(|id| !id.is_empty()),
        }
    }

    /// Unauthenticated environment against the default root, used to
    /// provision a test key
    pub fn sandbox() -> Self {
        Self::new(DEFAULT_API_ROOT, None, None)
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn marketplace_id(&self) -> Option<&str> {
        self.marketplace_id.as_deref()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::sandbox()
    }
}

/// Main HTTP client for the Balanced API
#[derive(Debug, Clone)]
pub struct BalancedClient {
    http_client: Client,
    environment: Arc<Environment>,
    timeout: Duration,
}

impl BalancedClient {
    /// Create a new client with default configuration
    pub fn new(environment: Environment) -> Result<Self> {
        Self::with_config(ClientConfig::default(), environment)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, environment: Environment) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            environment: Arc::new(environment),
            timeout: config.timeout,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Resolve `path` against the API root.
    ///
    /// Absolute URIs handed back by earlier responses are used verbatim.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        match Url::parse(path) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
            _ => Ok(Url::parse(&format!("{}{}", self.environment.api_root, path))?),
        }
    }

    /// Path of a marketplace-scoped collection, e.g. `cards`
    pub(crate) fn marketplace_path(&self, collection: &str) -> Result<String> {
        let marketplace_id = self.environment.marketplace_id().ok_or_else(|| {
            BalancedError::Config(format!(
                "marketplace id is required to reach the {collection} collection"
            ))
        })?;
        Ok(format!("/v1/marketplaces/{marketplace_id}/{collection}"))
    }

    /// Perform one authenticated round trip.
    ///
    /// The body is read whatever the status code; an error envelope in it is
    /// returned as [`BalancedError::Api`], anything else as raw bytes.
    pub async fn execute(&self, method: Method, path: &str, payload: &Payload) -> Result<Bytes> {
        let mut url = self.resolve_url(path)?;
        let encoded = (!payload.is_empty()).then(|| payload.encode());

        let body = match encoded {
            Some(query) if method == Method::GET => {
                let query = match url.query() {
                    Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
                    _ => query,
                };
                url.set_query(Some(&query));
                None
            }
            other => other,
        };

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(ACCEPT, RESPONSE_TYPE);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }
        if let Some(api_key) = self.environment.api_key() {
            builder = builder.basic_auth(api_key, Some(""));
        }

        let response = builder.send().await.map_err(|err| self.network_error(err))?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| self.network_error(err))?;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            body_len = bytes.len(),
            "balanced round trip"
        );

        match classify(bytes) {
            Envelope::Success(bytes) => Ok(bytes),
            Envelope::Failure(err) => {
                warn!(
                    method = %method,
                    url = %url,
                    status_code = err.status_code,
                    status = %err.status,
                    category_code = err.category_code.as_deref().unwrap_or_default(),
                    request_id = err.request_id.as_deref().unwrap_or_default(),
                    "balanced api error"
                );
                Err(err.into())
            }
        }
    }

    /// Execute and decode the success body into `T`
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<T> {
        let bytes = self.execute(method, path, payload).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute and discard the success body
    pub async fn send_empty(&self, method: Method, path: &str, payload: &Payload) -> Result<()> {
        self.execute(method, path, payload).await.map(|_| ())
    }

    /// Follow a navigation URI (`next_uri`, `last_uri`, ...) of an earlier page
    pub async fn fetch_page<T: DeserializeOwned>(&self, uri: &str) -> Result<Page<T>> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    fn network_error(&self, err: reqwest::Error) -> BalancedError {
        if err.is_timeout() {
            BalancedError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            BalancedError::Http(err)
        }
    }
}
