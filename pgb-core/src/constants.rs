//! Application-wide constants.

/// Crate version, used in the default user agent.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the PhoneGap Build service.
pub const DEFAULT_BASE_URL: &str = "https://build.phonegap.com";

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of redirects followed per request.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Build the default user agent string.
pub fn default_user_agent() -> String {
    format!("pgb/{APP_VERSION}")
}

/// Form field names understood by the service.
pub mod fields {
    /// Multipart field carrying an application package upload.
    pub const FILE: &str = "file";
    /// Multipart field carrying a JSON document.
    pub const DATA: &str = "data";
}
