//! Endpoint behavior against a mock build service.

mod common;

use pgb_core::platform::Platform;
use wiremock::matchers::{basic_auth, body_string_contains, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{client_for, start_server, write_package, PASSWORD, USERNAME};

fn ok(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

#[tokio::test]
async fn test_get_personal_data() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok(r#"{"id":1,"username":"alice"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get_personal_data().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text(), r#"{"id":1,"username":"alice"}"#);
}

#[tokio::test]
async fn test_get_applications_and_single_application() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok(r#"{"apps":[]}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps/42"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok(r#"{"id":42}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_applications().await.unwrap().text(), r#"{"apps":[]}"#);
    assert_eq!(client.get_application(42).await.unwrap().text(), r#"{"id":42}"#);
}

#[tokio::test]
async fn test_get_application_download_url() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps/7/android"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok(r#"{"location":"https://s3.example.com/app.apk"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_application_download_url(7, Platform::Android)
        .await
        .unwrap();
    assert_eq!(resp.text(), r#"{"location":"https://s3.example.com/app.apk"}"#);
}

#[tokio::test]
async fn test_build_application_all_platforms() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/apps/5/build"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).build_application(5, None).await.unwrap();
    assert_eq!(resp.status(), 202);
    assert_eq!(resp.text(), "queued");
}

#[tokio::test]
async fn test_build_application_single_platform() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/apps/5/build/android"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok("queued android"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .build_application(5, Some(Platform::Android))
        .await
        .unwrap();
    assert_eq!(resp.text(), "queued android");
}

#[tokio::test]
async fn test_unlock_android_key_sends_json_data_field() {
    let server = start_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/apps/5"))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains(r#"name="data""#))
        .and(body_string_contains(
            r#"{"keys":{"android":{"id":9,"key_pw":"pw1","keystore_pw":"pw2"}}}"#,
        ))
        .respond_with(ok(r#"{"id":5}"#))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .unlock_android_key(5, 9, "pw1", "pw2")
        .await
        .unwrap();
    assert_eq!(resp.text(), r#"{"id":5}"#);
}

#[tokio::test]
async fn test_update_application_package_uploads_file() {
    let dir = tempfile::tempdir().unwrap();
    let package = write_package(&dir, "app.zip", b"zip-bytes-for-test");

    let server = start_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/apps/5"))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains(r#"name="file"; filename="app.zip""#))
        .and(body_string_contains("zip-bytes-for-test"))
        .respond_with(ok(r#"{"id":5,"status":"uploaded"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .update_application_package(5, &package)
        .await
        .unwrap();
    assert_eq!(resp.text(), r#"{"id":5,"status":"uploaded"}"#);
}

#[tokio::test]
async fn test_get_keys_endpoints() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/keys"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok("all keys"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/keys/blackberry"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok("blackberry keys"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/keys/ios/3"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ok("ios key 3"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_keys().await.unwrap().text(), "all keys");
    assert_eq!(
        client.get_os_keys(Platform::Blackberry).await.unwrap().text(),
        "blackberry keys"
    );
    assert_eq!(
        client.get_key(3, Platform::Ios).await.unwrap().text(),
        "ios key 3"
    );
}

#[tokio::test]
async fn test_literal_at_sign_text_is_not_a_file() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/apps/5/build"))
        .and(body_string_contains("@/etc/passwd"))
        .respond_with(ok("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let params = pgb_api::Params::new().text("note", "@/etc/passwd");
    let resp = client_for(&server)
        .post("/api/v1/apps/5/build", params)
        .await
        .unwrap();
    assert_eq!(resp.text(), "ok");
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps"))
        .respond_with(ok("apps"))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_applications().await })
        })
        .collect();

    for handle in handles {
        let resp = handle.await.unwrap().unwrap();
        assert_eq!(resp.text(), "apps");
    }
}
