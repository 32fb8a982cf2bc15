//! The generic Sumo Logic REST client.
//!
//! Every request is gated by the rate limiter, authenticated with HTTP Basic
//! auth, and sent with a JSON content type. Responses are decoded by a single
//! path: 404 means "absent" (`Ok(None)`, not an error), other failure
//! statuses are mapped through the error envelope, and success bodies are
//! returned raw for the caller to unmarshal.
//!
//! Updates follow the conditional-write discipline: [`Client::put`] holds the
//! per-path lock, performs a fresh read to obtain the current ETag, and sends
//! the write with `If-Match`. Within one process at most one update to a
//! given path is in flight; across processes the server's ETag check is the
//! authority.

use crate::config::{ConnectionConfig, Credentials, Deployment};
use crate::error::{Error, Result};
use crate::limit::{IntervalLimiter, RateLimit};
use crate::lock::PathLocks;
use reqwest::header::{HeaderValue, CONTENT_TYPE, ETAG, IF_MATCH};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("sumologic-core/", env!("CARGO_PKG_VERSION"));

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Base endpoint for the client: either a known deployment or a custom URL.
#[derive(Debug, Clone)]
enum Endpoint {
    Deployment(Deployment),
    Custom(String),
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    credentials: Credentials,
    endpoint: Endpoint,
    connection: ConnectionConfig,
    limiter: Option<Arc<dyn RateLimit>>,
    locks: Option<Arc<PathLocks>>,
}

impl ClientBuilder {
    /// Create a builder targeting a known deployment.
    #[must_use]
    pub fn new(deployment: Deployment, credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::Deployment(deployment),
            connection: ConnectionConfig::new(),
            limiter: None,
            locks: None,
        }
    }

    /// Create a builder targeting an explicit base URL.
    ///
    /// Relative API paths are resolved against this URL with standard URL
    /// reference resolution, so it should normally end with a trailing slash
    /// (e.g. `https://api.sumologic.com/api/`).
    #[must_use]
    pub fn for_url(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::Custom(base_url.into()),
            connection: ConnectionConfig::new(),
            limiter: None,
            locks: None,
        }
    }

    /// Override the connection settings.
    #[must_use]
    pub fn with_connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    /// Use a specific rate limiter, typically to share one budget across
    /// several clients. Defaults to a fresh [`IntervalLimiter`] with the
    /// configured per-minute budget.
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimit>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Use a specific lock set, typically to share update serialization
    /// across several clients targeting the same account.
    #[must_use]
    pub fn with_locks(mut self, locks: Arc<PathLocks>) -> Self {
        self.locks = Some(locks);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the connection settings are out of
    /// range, the base URL does not parse, or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<Client> {
        use validator::Validate;
        self.connection.validate()?;

        let base_url = match &self.endpoint {
            Endpoint::Deployment(deployment) => deployment.base_url()?,
            Endpoint::Custom(raw) => Url::parse(raw)
                .map_err(|err| Error::Config(format!("invalid base URL `{raw}`: {err}")))?,
        };

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.connection.request_timeout())
            .connect_timeout(self.connection.connect_timeout())
            .pool_idle_timeout(self.connection.pool_idle_timeout())
            .pool_max_idle_per_host(self.connection.pool_max_idle_per_host)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        let limiter = self
            .limiter
            .unwrap_or_else(|| IntervalLimiter::shared(self.connection.rate_budget_per_minute));

        Ok(Client {
            http,
            base_url,
            credentials: self.credentials,
            limiter,
            locks: self.locks.unwrap_or_default(),
        })
    }
}

/// A successful GET response: the raw body plus the ETag, if the server sent
/// one, for use in a later conditional write.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Raw response body, fully read into memory.
    pub body: Vec<u8>,
    /// Normalized ETag value (quotes and weak prefix stripped).
    pub etag: Option<String>,
}

/// Generic client for the Sumo Logic REST API.
///
/// Cheap to clone; clones share the HTTP connection pool, the rate limiter,
/// and the path lock set.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    limiter: Arc<dyn RateLimit>,
    locks: Arc<PathLocks>,
}

impl Client {
    /// Start a builder for a known deployment.
    #[must_use]
    pub fn builder(deployment: Deployment, credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(deployment, credentials)
    }

    /// Build a client from `SUMOLOGIC_ACCESSID`, `SUMOLOGIC_ACCESSKEY` and
    /// `SUMOLOGIC_ENVIRONMENT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is unset or the
    /// environment names an unknown deployment.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new(Deployment::from_env()?, Credentials::from_env()?).build()
    }

    /// The resolved API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a resource, percent-encoding `params` into the query string.
    ///
    /// Returns `Ok(None)` when the server answers 404, so callers can
    /// distinguish absence from failure. The ETag header, if present, is
    /// surfaced for a later conditional write.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Option<RawResponse>> {
        let url = self.endpoint(path, params)?;
        let request = self.http.get(url).header(CONTENT_TYPE, APPLICATION_JSON);

        match self.send(request, path).await? {
            Some(response) => {
                let etag = response
                    .headers()
                    .get(ETAG)
                    .and_then(|value| value.to_str().ok())
                    .map(normalize_etag);
                let body = read_body(response).await?;
                Ok(Some(RawResponse { body, etag }))
            }
            None => Ok(None),
        }
    }

    /// Create a resource. Returns the raw response body, or `None` on 404.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Option<Vec<u8>>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path, &[])?;
        let request = self.http.post(url).json(body);
        match self.send(request, path).await? {
            Some(response) => Ok(Some(read_body(response).await?)),
            None => Ok(None),
        }
    }

    /// Update a resource with the conditional-write discipline.
    ///
    /// Acquires the per-path lock, reads the resource to obtain its current
    /// ETag, and sends the PUT with `If-Match`. If the read fails the update
    /// is aborted and the read's error propagates; if the resource is absent
    /// the update aborts with [`Error::NotFound`]. A stale ETag surfaces as
    /// [`Error::Conflict`] from the server; the client never retries it.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Option<Vec<u8>>>
    where
        B: Serialize + ?Sized,
    {
        let _guard = self.locks.acquire(path).await;

        let current = self
            .get(path, &[])
            .await?
            .ok_or_else(|| Error::NotFound(format!("cannot update absent resource `{path}`")))?;

        let url = self.endpoint(path, &[])?;
        let mut request = self.http.put(url).json(body);
        if let Some(etag) = &current.etag {
            request = request.header(IF_MATCH, etag);
        }
        match self.send(request, path).await? {
            Some(response) => Ok(Some(read_body(response).await?)),
            None => Ok(None),
        }
    }

    /// Delete a resource. `Ok(None)` on 404 makes deletes idempotent.
    pub async fn delete(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let url = self.endpoint(path, &[])?;
        let request = self.http.delete(url).header(CONTENT_TYPE, APPLICATION_JSON);
        match self.send(request, path).await? {
            Some(response) => Ok(Some(read_body(response).await?)),
            None => Ok(None),
        }
    }

    /// Fetch and unmarshal a resource; `Ok(None)` when absent.
    pub async fn get_json<T>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get(path, params).await? {
            Some(raw) => parse_body(path, &raw.body).map(Some),
            None => Ok(None),
        }
    }

    /// Create a resource and unmarshal the response.
    ///
    /// A 404 here means the collection path itself does not exist and is
    /// surfaced as [`Error::NotFound`].
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.post(path, body).await? {
            Some(bytes) => parse_body(path, &bytes),
            None => Err(Error::NotFound(path.to_string())),
        }
    }

    /// Update a resource (see [`Client::put`]) and unmarshal the response.
    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.put(path, body).await? {
            Some(bytes) => parse_body(path, &bytes),
            None => Err(Error::NotFound(path.to_string())),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&'static str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| Error::InvalidPath(format!("`{path}`: {err}")))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// Rate-limit, authenticate and send one request. `Ok(None)` on 404;
    /// failure statuses consume the body and map through the error envelope.
    /// The successful response is handed back unread so GET alone pays for
    /// ETag extraction and each verb reads the body it needs.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Option<reqwest::Response>> {
        self.limiter.acquire().await;

        let request = request.basic_auth(
            self.credentials.access_id(),
            Some(self.credentials.access_key()),
        );

        debug!(path, "sending API request");
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(path, "resource absent (404)");
            return Ok(None);
        }

        if status.is_client_error() || status.is_server_error() {
            let body = read_body(response).await?;
            let text = String::from_utf8_lossy(&body);
            warn!(path, status = status.as_u16(), "API request failed");
            return Err(Error::from_response(status.as_u16(), &text));
        }

        Ok(Some(response))
    }
}

/// Read the body fully into memory before any decoding.
async fn read_body(response: reqwest::Response) -> Result<Vec<u8>> {
    Ok(response.bytes().await?.to_vec())
}

fn parse_body<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| Error::ParseError {
        path: path.to_string(),
        source,
    })
}

/// Strip the weak-validator prefix and surrounding quotes from an ETag, so
/// the value echoed in `If-Match` is the opaque tag itself.
fn normalize_etag(raw: &str) -> String {
    let value = raw.trim();
    let value = value.strip_prefix("W/").unwrap_or(value);
    value.trim_matches('"').to_string()
}
