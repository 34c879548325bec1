//! PhoneGap Build API - HTTP client for the PhoneGap Build REST API.
//!
//! This crate translates account, application, build, and signing-key
//! operations into authenticated HTTP requests against the build service and
//! hands back the raw response. It performs no retries and no response
//! decoding; callers interpret the body (usually JSON) themselves.

pub mod client;
pub mod endpoints;
pub mod params;
pub mod response;

// Re-export key types
pub use client::BuildClient;
pub use params::{ApiRequest, HttpMethod, ParamValue, Params};
pub use response::ApiResponse;
