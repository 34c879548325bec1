//! HTTP client for the PhoneGap Build REST API.
//!
//! Every call is a single authenticated request: base URL plus path, basic
//! auth from the configured credentials, and an optional multipart body. The
//! response body comes back untouched regardless of HTTP status; only
//! transport failures become errors.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use pgb_core::config::ClientConfig;
use pgb_core::error::{PgbError, PgbResult, TransportErrorKind};

use crate::params::{ApiRequest, HttpMethod, Params};
use crate::response::ApiResponse;

/// Client for the build service.
///
/// Holds only immutable configuration, so clones can be used from any number
/// of tasks at once.
#[derive(Clone)]
pub struct BuildClient {
    inner: Client,
    /// Service root, e.g. "https://build.phonegap.com".
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for BuildClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BuildClient {
    /// Create a new client from configuration.
    pub fn new(config: &ClientConfig) -> PgbResult<Self> {
        let config = ClientConfig {
            base_url: ClientConfig::sanitize_base_url(&config.base_url),
            ..config.clone()
        };
        config.validate()?;

        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects)
        } else {
            Policy::none()
        };

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .redirect(redirect)
            .user_agent(config.user_agent.as_str());

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if config.accept_invalid_certs {
            warn!(
                "TLS certificate verification disabled for {}",
                config.base_url
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| PgbError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.base_url,
            username: config.username,
            password: config.password,
        })
    }

    /// Create a client for the public service with default settings.
    pub fn with_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> PgbResult<Self> {
        Self::new(&ClientConfig::new(username, password))
    }

    /// Get the service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an authenticated request without a body.
    fn build_request(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        self.inner
            .request(method.into(), self.url(path))
            .basic_auth(&self.username, Some(&self.password))
    }

    /// Dispatch a request and return the raw response.
    ///
    /// Non-2xx statuses are returned as `Ok`; use
    /// [`ApiResponse::error_for_status`] to treat them as errors.
    pub async fn execute(&self, request: &ApiRequest) -> PgbResult<ApiResponse> {
        debug!(
            method = %request.method,
            path = %request.path,
            params = ?request.params.names(),
            "dispatching request"
        );

        let mut builder = self.build_request(request.method, &request.path);
        if !request.params.is_empty() {
            builder = builder.multipart(request.params.to_form().await?);
        }

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify_error)?;

        debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = body.len(),
            "response received"
        );

        Ok(ApiResponse::new(status, body.to_vec()))
    }

    // --- Public HTTP methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> PgbResult<ApiResponse> {
        self.execute(&ApiRequest::get(path)).await
    }

    /// Execute a PUT request with form parameters.
    pub async fn put(&self, path: &str, params: Params) -> PgbResult<ApiResponse> {
        self.execute(&ApiRequest::put(path, params)).await
    }

    /// Execute a POST request with form parameters.
    pub async fn post(&self, path: &str, params: Params) -> PgbResult<ApiResponse> {
        self.execute(&ApiRequest::post(path, params)).await
    }
}

/// Classify a reqwest error into a transport error.
fn classify_error(e: reqwest::Error) -> PgbError {
    let message = error_chain(&e);
    let lower = message.to_ascii_lowercase();

    let kind = if e.is_timeout() {
        TransportErrorKind::Timeout
    } else if e.is_redirect() {
        TransportErrorKind::Redirect
    } else if e.is_connect() {
        if lower.contains("dns error") || lower.contains("failed to lookup address") {
            TransportErrorKind::Resolve
        } else if lower.contains("certificate") || lower.contains("tls") {
            TransportErrorKind::Tls
        } else {
            TransportErrorKind::Connect
        }
    } else if e.is_body() || e.is_decode() {
        TransportErrorKind::Body
    } else if e.is_request() || e.is_builder() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Unknown
    };

    PgbError::transport(kind, message)
}

/// Join an error and its sources into one message.
fn error_chain(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
