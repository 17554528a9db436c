//! HTTP client bound to one backend.
//!
//! Every request carries `Content-Type: application/json` and the cookies the
//! backend has set so far. Nothing is retried, cached or timed out.

use std::time::Instant;

use aula_config::ApiConfig;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::error::ApiError;
use crate::students::Students;
use crate::teachers::Teachers;

/// Per-request overrides for [`AdminClient::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    /// Pre-serialised JSON body.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialise `payload` as the request body.
    pub fn json<B>(mut self, payload: &B) -> Result<Self, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_string(payload).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Add a header. A header named like a default replaces the default.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Client for the admin backend.
///
/// Cloning is cheap and shares the connection pool and cookie jar.
#[derive(Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Creates a client with its own cookie store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// Cookies are only carried if `http` was built with a cookie store.
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn students(&self) -> Students<'_> {
        Students::new(self)
    }

    pub fn teachers(&self) -> Teachers<'_> {
        Teachers::new(self)
    }

    /// Sends one request to `base_url + path` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` for any non-2xx status, without reading the body
    /// - `ApiError::Transport` when the request cannot be sent or read
    /// - `ApiError::Decode` when the body is not valid JSON for `T`
    #[instrument(skip(self, options), fields(http.method = %options.method))]
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let start = Instant::now();
        let url = self.config.url(path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        debug!(request_id = %request_id, url = %url, "Sending request");

        let response = builder.send().await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Request could not be sent");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let latency = start.elapsed();

        if !status.is_success() {
            warn!(
                request_id = %request_id,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Backend returned an error status"
            );
            return Err(ApiError::Http { status });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Response body is not the expected JSON");
            ApiError::Decode(e)
        })?;

        info!(
            request_id = %request_id,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed"
        );

        Ok(value)
    }
}

/// Append a query-string fragment to `path`, if there is one.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    let query = query.trim().trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
