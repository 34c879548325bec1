//! Response type.
//!
//! The service answers with JSON, but the client never decodes it. The body
//! is kept byte-for-byte alongside the HTTP status, whatever that status is.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use pgb_core::error::{PgbError, PgbResult};

/// Raw HTTP response from the build service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body bytes exactly as received.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Turn a non-2xx response into `PgbError::Status`.
    pub fn error_for_status(self) -> PgbResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PgbError::Status {
                status: self.status,
                body: self.text().into_owned(),
            })
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> PgbResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
