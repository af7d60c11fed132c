mod common;

use common::{TestApp, SEKRET_SHA256, SENTINEL_SHA256};
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn unset_variable_reports_sentinel_digest() {
    let app = TestApp::spawn("HELLO_RUN_TEST_UNSET").await;
    app.clear_secret();

    let response = app.get_root().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body = response.text().await.unwrap();
    assert_eq!(
        body,
        format!(
            r#"{{"service":"hello-run","secret_present":false,"secret_sha256":"{}"}}"#,
            SENTINEL_SHA256
        )
    );
}

#[tokio::test]
#[serial]
async fn set_variable_reports_its_digest() {
    let app = TestApp::spawn("HELLO_RUN_TEST_SET").await;
    app.set_secret("sekret");

    let body: serde_json::Value = app.get_root().await.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "service": "hello-run",
            "secret_present": true,
            "secret_sha256": SEKRET_SHA256,
        })
    );
}

#[tokio::test]
#[serial]
async fn variable_value_is_not_trimmed() {
    let app = TestApp::spawn("HELLO_RUN_TEST_UNTRIMMED").await;
    app.set_secret("sekret\n");

    let body: serde_json::Value = app.get_root().await.json().await.unwrap();
    assert_eq!(body["secret_present"], true);
    assert_ne!(body["secret_sha256"], SEKRET_SHA256);
}

#[tokio::test]
#[serial]
async fn empty_variable_counts_as_present() {
    let app = TestApp::spawn("HELLO_RUN_TEST_EMPTY").await;
    app.set_secret("");

    let body: serde_json::Value = app.get_root().await.json().await.unwrap();
    assert_eq!(body["secret_present"], true);
    assert_eq!(
        body["secret_sha256"],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[tokio::test]
#[serial]
async fn literal_sentinel_value_is_reported_absent() {
    let app = TestApp::spawn("HELLO_RUN_TEST_LITERAL").await;
    app.set_secret("missing");

    let body: serde_json::Value = app.get_root().await.json().await.unwrap();
    assert_eq!(body["secret_present"], false);
    assert_eq!(body["secret_sha256"], SENTINEL_SHA256);
}

#[tokio::test]
#[serial]
async fn variable_is_read_per_request() {
    let app = TestApp::spawn("HELLO_RUN_TEST_PER_REQUEST").await;

    let first = app.get_root().await.bytes().await.unwrap();
    let second = app.get_root().await.bytes().await.unwrap();
    assert_eq!(first, second);

    app.set_secret("sekret");
    let body: serde_json::Value = app.get_root().await.json().await.unwrap();
    assert_eq!(body["secret_sha256"], SEKRET_SHA256);
}

#[tokio::test]
#[serial]
async fn only_root_is_routed() {
    let app = TestApp::spawn("HELLO_RUN_TEST_ROUTES").await;

    let response = reqwest::Client::new()
        .get(&format!("{}/secret", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[cfg(unix)]
#[tokio::test]
#[serial]
async fn non_unicode_variable_returns_500() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let app = TestApp::spawn("HELLO_RUN_TEST_NOT_UNICODE").await;
    std::env::set_var(&app.env_var, OsStr::from_bytes(&[0x66, 0x6f, 0x80]));

    let response = app.get_root().await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal server error" }));
}
