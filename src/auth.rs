//! HTTP Basic credentials loaded from a side file.

use crate::config::load_json;
use anyhow::{Context, Result};
use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::path::Path;

/// Username/password pair, stored as `{"Username": "...", "Password": "..."}`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    #[serde(rename = "Username", alias = "username")]
    pub username: String,
    #[serde(rename = "Password", alias = "password")]
    pub password: String,
}

impl BasicAuth {
    /// Load credentials if a path was given; no path means anonymous access.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let auth: BasicAuth = load_json(path)
            .context("Failed to read the basic authentication credentials from the file")?;
        Ok(Some(auth))
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let token = base64::encode_config(
            format!("{}:{}", self.username, self.password),
            base64::STANDARD,
        );
        let mut hv = HeaderValue::from_str(&format!("Basic {}", token))?;
        hv.set_sensitive(true);
        Ok(hv)
    }
}
