//! Error types for the PhoneGap Build client.
//!
//! Transport failures are the only errors the client raises on its own. HTTP
//! status codes are never turned into errors unless the caller asks for it
//! through `ApiResponse::error_for_status`.

use thiserror::Error;

/// Convenience type alias for Results using PgbError.
pub type PgbResult<T> = Result<T, PgbError>;

/// Unified error type for the client crates.
#[derive(Error, Debug)]
pub enum PgbError {
    // -- Configuration errors --
    /// Failed to load, parse, or validate client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Network errors --
    /// The request could not be completed at the transport level.
    #[error("transport error ({code}): {message}", code = .kind.code())]
    Transport {
        /// Classified failure, carrying a stable numeric code.
        kind: TransportErrorKind,
        /// Message from the underlying HTTP stack.
        message: String,
    },

    /// The HTTP client itself could not be constructed.
    #[error("http error: {0}")]
    Http(String),

    /// Non-success status, raised only on explicit request by the caller.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A string could not be parsed into a typed value.
    #[error("invalid value: {0}")]
    Parse(String),

    // -- File/IO errors --
    /// File system operation failed (e.g. reading an upload).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PgbError {
    /// Build a transport error of the given kind.
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        PgbError::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Numeric code of a transport error, if this is one.
    pub fn code(&self) -> Option<i32> {
        match self {
            PgbError::Transport { kind, .. } => Some(kind.code()),
            _ => None,
        }
    }

    /// Whether this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, PgbError::Transport { .. })
    }
}

impl From<serde_json::Error> for PgbError {
    fn from(e: serde_json::Error) -> Self {
        PgbError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for PgbError {
    fn from(e: toml::de::Error) -> Self {
        PgbError::Config(e.to_string())
    }
}

/// Transport failure categories with stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(i32)]
pub enum TransportErrorKind {
    /// Host name could not be resolved.
    Resolve = 6,
    /// Connection refused or unreachable.
    Connect = 7,
    /// Connect or request timeout elapsed.
    Timeout = 28,
    /// TLS handshake or certificate failure.
    Tls = 35,
    /// Redirect loop or too many redirects.
    Redirect = 47,
    /// Failure while receiving the response body.
    Body = 56,
    /// The request could not be built or sent.
    Request = 3,
    /// Anything not covered above.
    Unknown = 9999,
}

impl TransportErrorKind {
    /// Convert an integer code to a TransportErrorKind variant.
    pub fn from_code(code: i32) -> Self {
        match code {
            3 => Self::Request,
            6 => Self::Resolve,
            7 => Self::Connect,
            28 => Self::Timeout,
            35 => Self::Tls,
            47 => Self::Redirect,
            56 => Self::Body,
            _ => Self::Unknown,
        }
    }

    /// Get the integer code for this kind.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}
