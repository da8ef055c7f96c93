//! Configuration management for the administration tools
//!
//! This module handles the inputs every tool shares:
//! - Connection settings (`--host`, `--port`, `--auth-file`) with environment fallbacks
//! - Definition files listing the templates or watches to create
//! - Comma separated name lists given on the command line
//!
//! ## Definition Files
//!
//! Templates and watches are described by a JSON document holding an ordered
//! list of `{Name, Body}` pairs. `Body` is sent verbatim as the resource
//! definition, keeping the key order of the file.
//!
//! ```json
//! {
//!   "Templates": [
//!     { "Name": "logs", "Body": { "index_patterns": ["logs-*"] } }
//!   ]
//! }
//! ```

use crate::{
    constants::{DEFAULT_HOST, DEFAULT_PORT, ENV_AUTH_FILE, ENV_HOST, ENV_PORT},
    error::AdminError,
};
use anyhow::Context;
use clap::Args;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where the cluster lives and how to authenticate against it
///
/// Flattened into every tool's top-level parser; the flags are global so they
/// may be given before or after the subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Host name of the Elasticsearch API
    #[arg(long, global = true, default_value = DEFAULT_HOST, env = ENV_HOST)]
    pub host: String,

    /// Port of the Elasticsearch API
    #[arg(long, global = true, default_value_t = DEFAULT_PORT, env = ENV_PORT)]
    pub port: u16,

    /// Path to basic auth file
    #[arg(long = "auth-file", global = true, env = ENV_AUTH_FILE, value_name = "PATH")]
    pub auth_file: Option<PathBuf>,
}

impl ConnectionArgs {
    pub fn new(host: impl Into<String>, port: u16, auth_file: Option<PathBuf>) -> Self {
        ConnectionArgs {
            host: host.into(),
            port,
            auth_file,
        }
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// One named resource to create or update
#[derive(Deserialize, Debug, Clone)]
pub struct Definition {
    /// Template or watch name, used as the last URL segment
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    /// Full resource definition sent as the request body
    #[serde(rename = "Body", alias = "body")]
    pub body: Value,
}

/// Contents of a `--templates-file`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TemplatesConfig {
    #[serde(rename = "Templates", alias = "templates", default)]
    pub templates: Vec<Definition>,
}

/// Contents of a `--watches-file`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WatchesConfig {
    #[serde(rename = "Watches", alias = "watches", default)]
    pub watches: Vec<Definition>,
}

pub fn load_templates(path: &Path) -> anyhow::Result<TemplatesConfig> {
    ensure_exists(path, "Templates")?;
    load_json(path).context("Failed to load the templates")
}

pub fn load_watches(path: &Path) -> anyhow::Result<WatchesConfig> {
    ensure_exists(path, "Watches")?;
    load_json(path).context("Failed to load the watches")
}

fn ensure_exists(path: &Path, kind: &'static str) -> anyhow::Result<()> {
    if !path.exists() {
        return Err(AdminError::DefinitionFileNotFound {
            kind,
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Read and decode a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(value)
}

/// Split a comma separated list of names, trimming each entry.
///
/// Blank entries are dropped; a list with no names left is an error so that no
/// request is ever sent against the bare collection path.
pub fn parse_names(list: &str, kind: &'static str) -> anyhow::Result<Vec<String>> {
    let names: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(AdminError::NoNames { kind }.into());
    }
    Ok(names)
}
