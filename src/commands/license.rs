use crate::{
    client::{ElasticClient, Expect},
    constants::LICENSE_PATH,
    error::AdminError,
    output::{indent_json, print_json},
};
use anyhow::{Context, Result};
use clap::Subcommand;
use reqwest::{Body, Method};
use std::{io::Write, path::Path, path::PathBuf};
use tokio_util::io::ReaderStream;

#[derive(Subcommand, Debug)]
pub enum LicenseCommands {
    /// Display the installed license
    View,
    /// Install a new license into the cluster
    Install {
        /// Path to license file
        #[arg(long = "license-file", value_name = "PATH")]
        license_file: PathBuf,
    },
}

pub async fn run<W: Write>(
    cmd: LicenseCommands,
    client: &ElasticClient,
    out: &mut W,
) -> Result<()> {
    match cmd {
        LicenseCommands::View => view(client, out).await,
        LicenseCommands::Install { license_file } => install(client, &license_file, out).await,
    }
}

async fn view<W: Write>(client: &ElasticClient, out: &mut W) -> Result<()> {
    let content = client
        .get(LICENSE_PATH)
        .await
        .context("Failed to get the license information")?;
    print_json(out, None, &content).context("Failed to indent the license content")
}

async fn install<W: Write>(client: &ElasticClient, license_file: &Path, out: &mut W) -> Result<()> {
    if !license_file.exists() {
        return Err(AdminError::DefinitionFileNotFound {
            kind: "License",
            path: license_file.to_path_buf(),
        }
        .into());
    }
    let file = tokio::fs::File::open(license_file).await.with_context(|| {
        format!(
            "Failed to open the license file '{}'",
            license_file.display()
        )
    })?;

    let content = client
        .send(
            Method::PUT,
            LICENSE_PATH,
            Some(Body::wrap_stream(ReaderStream::new(file))),
            Expect::OK,
        )
        .await
        .context("Failed to install the license")?;

    writeln!(out, "License installed.")?;
    match indent_json(&content) {
        Ok(pretty) => writeln!(out, "{pretty}")?,
        Err(e) => tracing::warn!(error = %e, "license install response is not JSON"),
    }
    Ok(())
}
