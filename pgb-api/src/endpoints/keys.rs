//! Signing key endpoints.

use pgb_core::error::PgbResult;
use pgb_core::platform::Platform;

use super::api_path;
use crate::client::BuildClient;
use crate::params::ApiRequest;
use crate::response::ApiResponse;

/// `GET /api/v1/keys`
pub fn get_keys_request() -> ApiRequest {
    ApiRequest::get(api_path("/keys"))
}

/// `GET /api/v1/keys/{os}`
pub fn get_os_keys_request(platform: Platform) -> ApiRequest {
    ApiRequest::get(api_path(&format!("/keys/{platform}")))
}

/// `GET /api/v1/keys/{os}/{id}`
pub fn get_key_request(key_id: u64, platform: Platform) -> ApiRequest {
    ApiRequest::get(api_path(&format!("/keys/{platform}/{key_id}")))
}

impl BuildClient {
    /// List signing keys for all platforms.
    pub async fn get_keys(&self) -> PgbResult<ApiResponse> {
        self.execute(&get_keys_request()).await
    }

    /// List signing keys for one platform.
    pub async fn get_os_keys(&self, platform: Platform) -> PgbResult<ApiResponse> {
        self.execute(&get_os_keys_request(platform)).await
    }

    /// Get a single signing key.
    pub async fn get_key(&self, key_id: u64, platform: Platform) -> PgbResult<ApiResponse> {
        self.execute(&get_key_request(key_id, platform)).await
    }
}
