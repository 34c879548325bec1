//! Client configuration.
//!
//! Holds the service base URL, basic-auth credentials, and the transport
//! options the HTTP client is built with. Configuration can be persisted as
//! TOML, but nothing here looks up files or environment variables on its own.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{PgbError, PgbResult};

/// Configuration for a PhoneGap Build client.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service base URL (scheme + host, no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account username or email address.
    #[serde(default)]
    pub username: String,

    /// Account password.
    #[serde(default)]
    pub password: String,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds. No limit when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Skip TLS certificate verification. Insecure; off unless set explicitly.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Follow HTTP redirects.
    #[serde(default = "default_true")]
    pub follow_redirects: bool,

    /// Maximum redirects followed per request.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_max_redirects() -> usize {
    constants::DEFAULT_MAX_REDIRECTS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: String::new(),
            password: String::new(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: None,
            accept_invalid_certs: false,
            follow_redirects: true,
            max_redirects: default_max_redirects(),
            user_agent: constants::default_user_agent(),
        }
    }
}

// Credentials stay out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("follow_redirects", &self.follow_redirects)
            .field("max_redirects", &self.max_redirects)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Default configuration with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Point the client at a different service root.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Self::sanitize_base_url(base_url);
        self
    }

    /// Set the connect timeout in seconds.
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set an overall request timeout in seconds.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Disable TLS certificate verification.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> PgbResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ClientConfig = toml::from_str(&contents)?;
        config.base_url = Self::sanitize_base_url(&config.base_url);
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> PgbResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PgbError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check values the HTTP client cannot work with.
    ///
    /// Credentials are not inspected; they are sent as given.
    pub fn validate(&self) -> PgbResult<()> {
        if self.base_url.is_empty() {
            return Err(PgbError::Config("base_url must not be empty".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PgbError::Config(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        if self.connect_timeout_secs == 0 {
            return Err(PgbError::Config("connect_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Sanitize and normalize a base URL.
    ///
    /// Strips surrounding whitespace and quotes, and trailing slashes.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        trimmed.trim_end_matches('/').to_string()
    }
}
