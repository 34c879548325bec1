//! Account endpoint.

use pgb_core::error::PgbResult;

use super::api_path;
use crate::client::BuildClient;
use crate::params::ApiRequest;
use crate::response::ApiResponse;

/// `GET /api/v1/me`
pub fn get_personal_data_request() -> ApiRequest {
    ApiRequest::get(api_path("/me"))
}

impl BuildClient {
    /// Get the account profile along with its applications and keys.
    pub async fn get_personal_data(&self) -> PgbResult<ApiResponse> {
        self.execute(&get_personal_data_request()).await
    }
}
