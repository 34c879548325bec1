//! Application endpoints: listing, package upload, builds, key unlocking.

use std::path::Path;

use serde::Serialize;

use pgb_core::constants::fields;
use pgb_core::error::PgbResult;
use pgb_core::platform::Platform;

use super::api_path;
use crate::client::BuildClient;
use crate::params::{ApiRequest, Params};
use crate::response::ApiResponse;

/// Body of the `data` field that unlocks an Android signing key.
///
/// Serializes as `{"keys":{"android":{"id":..,"key_pw":..,"keystore_pw":..}}}`.
#[derive(Clone, Serialize)]
pub struct UnlockAndroidKey<'a> {
    keys: AndroidKeys<'a>,
}

#[derive(Clone, Serialize)]
struct AndroidKeys<'a> {
    android: AndroidKeyPasswords<'a>,
}

#[derive(Clone, Serialize)]
struct AndroidKeyPasswords<'a> {
    id: u64,
    key_pw: &'a str,
    keystore_pw: &'a str,
}

impl<'a> UnlockAndroidKey<'a> {
    pub fn new(key_id: u64, key_password: &'a str, keystore_password: &'a str) -> Self {
        Self {
            keys: AndroidKeys {
                android: AndroidKeyPasswords {
                    id: key_id,
                    key_pw: key_password,
                    keystore_pw: keystore_password,
                },
            },
        }
    }
}

// Passwords stay out of debug output.
impl std::fmt::Debug for UnlockAndroidKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockAndroidKey")
            .field("key_id", &self.keys.android.id)
            .field("key_pw", &"<redacted>")
            .field("keystore_pw", &"<redacted>")
            .finish()
    }
}

fn app_path(app_id: u64) -> String {
    api_path(&format!("/apps/{app_id}"))
}

/// `PUT /api/v1/apps/{id}` with the package uploaded as `file`.
pub fn update_application_package_request(app_id: u64, package: &Path) -> ApiRequest {
    ApiRequest::put(app_path(app_id), Params::new().file(fields::FILE, package))
}

/// `POST /api/v1/apps/{id}/build[/{os}]`
pub fn build_application_request(app_id: u64, platform: Option<Platform>) -> ApiRequest {
    let mut path = format!("{}/build", app_path(app_id));
    if let Some(platform) = platform {
        path = format!("{path}/{platform}");
    }
    ApiRequest::post(path, Params::new())
}

/// `PUT /api/v1/apps/{id}` with the JSON key passwords as `data`.
pub fn unlock_android_key_request(
    app_id: u64,
    key_id: u64,
    key_password: &str,
    keystore_password: &str,
) -> PgbResult<ApiRequest> {
    let data = serde_json::to_string(&UnlockAndroidKey::new(
        key_id,
        key_password,
        keystore_password,
    ))?;
    Ok(ApiRequest::put(
        app_path(app_id),
        Params::new().text(fields::DATA, data),
    ))
}

/// `GET /api/v1/apps`
pub fn get_applications_request() -> ApiRequest {
    ApiRequest::get(api_path("/apps"))
}

/// `GET /api/v1/apps/{id}`
pub fn get_application_request(app_id: u64) -> ApiRequest {
    ApiRequest::get(app_path(app_id))
}

/// `GET /api/v1/apps/{id}/{os}`
pub fn get_application_download_url_request(app_id: u64, platform: Platform) -> ApiRequest {
    ApiRequest::get(format!("{}/{platform}", app_path(app_id)))
}

impl BuildClient {
    /// Upload a new application package (zip or similar) for an existing app.
    ///
    /// The file is read when the request is sent; a missing file fails with
    /// `PgbError::Io` before anything goes over the wire.
    pub async fn update_application_package(
        &self,
        app_id: u64,
        package: impl AsRef<Path>,
    ) -> PgbResult<ApiResponse> {
        self.execute(&update_application_package_request(app_id, package.as_ref()))
            .await
    }

    /// Queue a build for every platform, or only the given one.
    pub async fn build_application(
        &self,
        app_id: u64,
        platform: Option<Platform>,
    ) -> PgbResult<ApiResponse> {
        self.execute(&build_application_request(app_id, platform))
            .await
    }

    /// Unlock an Android signing key for an application.
    pub async fn unlock_android_key(
        &self,
        app_id: u64,
        key_id: u64,
        key_password: &str,
        keystore_password: &str,
    ) -> PgbResult<ApiResponse> {
        let request =
            unlock_android_key_request(app_id, key_id, key_password, keystore_password)?;
        self.execute(&request).await
    }

    /// List all applications on the account.
    pub async fn get_applications(&self) -> PgbResult<ApiResponse> {
        self.execute(&get_applications_request()).await
    }

    /// Get a single application.
    pub async fn get_application(&self, app_id: u64) -> PgbResult<ApiResponse> {
        self.execute(&get_application_request(app_id)).await
    }

    /// Get the download location of a platform build.
    pub async fn get_application_download_url(
        &self,
        app_id: u64,
        platform: Platform,
    ) -> PgbResult<ApiResponse> {
        self.execute(&get_application_download_url_request(app_id, platform))
            .await
    }
}
