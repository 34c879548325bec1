//! API endpoint modules organized by resource.
//!
//! Each module offers pure `*_request` builders describing a call, and async
//! methods on [`BuildClient`](crate::client::BuildClient) that dispatch them.

pub mod apps;
pub mod keys;
pub mod me;

use pgb_core::constants::API_VERSION;

/// Prefix a resource path with the versioned API root.
pub(crate) fn api_path(resource: &str) -> String {
    format!("/api/{API_VERSION}{resource}")
}
