//! PhoneGap Build Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API client crate:
//! - Client configuration (base URL, credentials, transport options)
//! - Error types covering transport failures and opt-in status errors
//! - Structured logging with tracing
//! - The closed set of build target platforms
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::ClientConfig;
pub use error::{PgbError, PgbResult, TransportErrorKind};
pub use logging::init_logging;
pub use platform::Platform;
