use crate::{
    client::{ElasticClient, Expect},
    constants::{AZURE_SNAPSHOT_TYPE, SNAPSHOT_PATH},
    output::print_json,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use reqwest::{Body, Method};
use serde::Serialize;
use std::io::Write;

/// Repository/snapshot pair every snapshot operation targets
#[derive(Args, Debug, Clone)]
pub struct SnapshotTarget {
    /// Repository name where the snapshot is created
    #[arg(long)]
    pub repository: String,
    /// Snapshot name
    #[arg(long)]
    pub snapshot: String,
}

impl SnapshotTarget {
    pub fn path(&self) -> String {
        format!("{}/{}/{}", SNAPSHOT_PATH, self.repository, self.snapshot)
    }
}

impl std::fmt::Display for SnapshotTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.repository, self.snapshot)
    }
}

/// Body sent when creating a snapshot; the storage backend is fixed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSettings {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        SnapshotSettings {
            kind: AZURE_SNAPSHOT_TYPE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Create a new snapshot of the entire cluster in an Azure storage
    Create {
        #[command(flatten)]
        target: SnapshotTarget,
        /// Enable the repository verification
        #[arg(long)]
        verify: bool,
    },
    /// Retrieve the status of a snapshot
    Status {
        #[command(flatten)]
        target: SnapshotTarget,
    },
    /// Restore an entire cluster snapshot from Azure storage
    Restore {
        #[command(flatten)]
        target: SnapshotTarget,
    },
}

pub async fn run<W: Write>(
    cmd: SnapshotCommands,
    client: &ElasticClient,
    out: &mut W,
) -> Result<()> {
    match cmd {
        SnapshotCommands::Create { target, verify } => {
            let mut path = target.path();
            if !verify {
                path.push_str("?verify=false");
            }
            let body = serde_json::to_vec(&SnapshotSettings::default())
                .context("Failed to build the HTTP request body")?;
            client
                .send(Method::PUT, &path, Some(Body::from(body)), Expect::CREATED)
                .await
                .context("Failed to create the snapshot")?;
            tracing::info!(snapshot = %target, "snapshot creation started");
            writeln!(out, "Start creating snapshot: {target}")?;
        }
        SnapshotCommands::Status { target } => {
            let content = client
                .get(&format!("{}/_status", target.path()))
                .await
                .context("Failed to read the snapshot status")?;
            print_json(out, Some("Status:"), &content)
                .context("Failed to indent the status information")?;
        }
        SnapshotCommands::Restore { target } => {
            client
                .send(
                    Method::POST,
                    &format!("{}/_restore", target.path()),
                    None,
                    Expect::OK,
                )
                .await
                .context("Failed to restore the snapshot")?;
            tracing::info!(snapshot = %target, "snapshot restore started");
            writeln!(out, "Start restoring snapshot: {target}")?;
        }
    }
    Ok(())
}
