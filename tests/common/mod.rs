#![allow(dead_code)]

use elastic_admin::{client::ElasticClient, config::ConnectionArgs};
use httpmock::MockServer;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

pub const USERNAME: &str = "test";
pub const PASSWORD: &str = "test";
/// `base64("test:test")`
pub const BASIC_HEADER: &str = "Basic dGVzdDp0ZXN0";

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn write_auth_file(dir: &TempDir) -> PathBuf {
    write_file(
        dir,
        "auth.json",
        &format!(r#"{{"Username": "{USERNAME}", "Password": "{PASSWORD}"}}"#),
    )
}

pub fn client_for(server: &MockServer, auth_file: Option<PathBuf>) -> ElasticClient {
    let conn = ConnectionArgs::new(server.host(), server.port(), auth_file);
    ElasticClient::new(&conn).unwrap()
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
