mod common;

use common::*;
use elastic_admin::{
    commands::license::{run, LicenseCommands},
    error::AdminError,
};
use httpmock::prelude::*;
use reqwest::StatusCode;
use tempfile::TempDir;

const LICENSE: &str = r#"{"license":{"uid":"893361dc","type":"basic","status":"active"}}"#;

#[tokio::test]
async fn test_view_prints_license() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/_xpack/license")
            .header_missing("authorization");
        then.status(200).body(LICENSE);
    });

    let client = client_for(&server, None);
    let mut out = Vec::new();
    run(LicenseCommands::View, &client, &mut out).await.unwrap();

    mock.assert();
    assert_eq!(
        output(out),
        "{\n    \"license\": {\n        \"uid\": \"893361dc\",\n        \"type\": \"basic\",\n        \"status\": \"active\"\n    }\n}\n"
    );
}

#[tokio::test]
async fn test_view_with_basic_auth() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/_xpack/license")
            .header("authorization", BASIC_HEADER);
        then.status(200).body(LICENSE);
    });

    let dir = TempDir::new().unwrap();
    let client = client_for(&server, Some(write_auth_file(&dir)));
    run(LicenseCommands::View, &client, &mut Vec::new())
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn test_view_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/_xpack/license");
        then.status(401).body("security_exception");
    });

    let client = client_for(&server, None);
    let err = run(LicenseCommands::View, &client, &mut Vec::new())
        .await
        .unwrap_err();
    assert_eq!(AdminError::status_of(&err), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn test_install_sends_license_file() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/_xpack/license")
            .header("content-type", "application/json")
            .header("authorization", BASIC_HEADER)
            .body(LICENSE);
        then.status(200)
            .body(r#"{"acknowledged":true,"license_status":"valid"}"#);
    });

    let dir = TempDir::new().unwrap();
    let license_file = write_file(&dir, "license.json", LICENSE);
    let client = client_for(&server, Some(write_auth_file(&dir)));
    let mut out = Vec::new();

    run(LicenseCommands::Install { license_file }, &client, &mut out)
        .await
        .unwrap();

    mock.assert();
    let out = output(out);
    assert!(out.starts_with("License installed.\n"));
    assert!(out.contains("\"license_status\": \"valid\""));
}

#[tokio::test]
async fn test_install_streams_large_license_file() {
    let padding = "x".repeat(256 * 1024);
    let license = format!(r#"{{"license":{{"uid":"893361dc","signature":"{padding}"}}}}"#);
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/_xpack/license")
            .body(license.as_str());
        then.status(200).body(r#"{"acknowledged":true}"#);
    });

    let dir = TempDir::new().unwrap();
    let license_file = write_file(&dir, "license.json", &license);
    let client = client_for(&server, None);

    run(
        LicenseCommands::Install { license_file },
        &client,
        &mut Vec::new(),
    )
    .await
    .unwrap();
    mock.assert();
}

#[tokio::test]
async fn test_install_rejected() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/_xpack/license");
        then.status(500);
    });

    let dir = TempDir::new().unwrap();
    let license_file = write_file(&dir, "license.json", LICENSE);
    let client = client_for(&server, None);

    let err = run(
        LicenseCommands::Install { license_file },
        &client,
        &mut Vec::new(),
    )
    .await
    .unwrap_err();
    assert_eq!(
        AdminError::status_of(&err),
        Some(StatusCode::INTERNAL_SERVER_ERROR)
    );
}

#[tokio::test]
async fn test_install_missing_file() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/_xpack/license");
        then.status(200);
    });

    let dir = TempDir::new().unwrap();
    let client = client_for(&server, None);
    let err = run(
        LicenseCommands::Install {
            license_file: dir.path().join("license.json"),
        },
        &client,
        &mut Vec::new(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("not found"));
    mock.assert_hits(0);
}
