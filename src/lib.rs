//! # Elasticsearch administration tools
//!
//! Core library shared by four small command-line clients of the cluster
//! management API:
//!
//! - `elasticlicense` - view or install the cluster license
//! - `elasticsnapshot` - create, inspect and restore snapshots
//! - `elastictemplate` - create, retrieve, delete and list index templates
//! - `elasticwatcher` - create, retrieve, delete, (de)activate and list watches
//!
//! Every tool accepts `--host`, `--port` and `--auth-file`. The auth file is a
//! JSON document `{"Username": "...", "Password": "..."}`; when it is given
//! every request carries HTTP Basic credentials.

use clap::Parser;

pub mod auth;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod output;
pub mod stream;

use config::ConnectionArgs;
use logging::LogArgs;

/// Manage the Elasticsearch license
#[derive(Parser, Debug)]
#[command(name = "elasticlicense", version, about = "Manage the Elasticsearch license")]
pub struct LicenseCli {
    #[command(flatten)]
    pub conn: ConnectionArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(subcommand)]
    pub cmd: commands::license::LicenseCommands,
}

/// Create, inspect and restore Elasticsearch snapshots
#[derive(Parser, Debug)]
#[command(
    name = "elasticsnapshot",
    version,
    about = "Create, inspect and restore Elasticsearch snapshots"
)]
pub struct SnapshotCli {
    #[command(flatten)]
    pub conn: ConnectionArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(subcommand)]
    pub cmd: commands::snapshot::SnapshotCommands,
}

/// Manage Elasticsearch index templates
#[derive(Parser, Debug)]
#[command(
    name = "elastictemplate",
    version,
    about = "Manage Elasticsearch index templates"
)]
pub struct TemplateCli {
    #[command(flatten)]
    pub conn: ConnectionArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(subcommand)]
    pub cmd: commands::template::TemplateCommands,
}

/// Manage Elasticsearch Watcher watches
#[derive(Parser, Debug)]
#[command(
    name = "elasticwatcher",
    version,
    about = "Manage Elasticsearch Watcher watches"
)]
pub struct WatcherCli {
    #[command(flatten)]
    pub conn: ConnectionArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(subcommand)]
    pub cmd: commands::watcher::WatcherCommands,
}
