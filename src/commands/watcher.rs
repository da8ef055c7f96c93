use crate::{
    client::{ElasticClient, Expect},
    config::{load_watches, parse_names},
    constants::{WATCH_ID_QUERY, WATCH_PATH, WATCH_SEARCH_PATH},
    output::print_json,
    stream,
};
use anyhow::{anyhow, bail, Context, Result};
use clap::Subcommand;
use reqwest::Method;
use serde_json::Value;
use serde_json_path::JsonPath;
use std::{fmt, io::Write, path::PathBuf};

#[derive(Subcommand, Debug)]
pub enum WatcherCommands {
    /// Register watches in Watcher or update them
    Create {
        /// Path to watches file
        #[arg(long = "watches-file", value_name = "PATH")]
        watches_file: PathBuf,
    },
    /// Retrieve watches by their name
    Retrieve {
        /// Comma separated list of watch names
        #[arg(long)]
        watches: String,
    },
    /// Delete watches
    Delete {
        /// Comma separated list of watch names
        #[arg(long)]
        watches: String,
    },
    /// Activate watches
    Activate {
        /// Comma separated list of watch names
        #[arg(long)]
        watches: String,
    },
    /// Deactivate watches
    Deactivate {
        /// Comma separated list of watch names
        #[arg(long)]
        watches: String,
    },
    /// List all watches installed in Watcher
    List,
}

/// State switch applied by `activate` / `deactivate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Activate,
    Deactivate,
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Activate => "activate",
            Toggle::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn watch_path(name: &str) -> String {
    format!("{WATCH_PATH}/{name}")
}

pub fn toggle_path(name: &str, toggle: Toggle) -> String {
    format!("{}/_{}", watch_path(name), toggle)
}

pub async fn run<W: Write>(
    cmd: WatcherCommands,
    client: &ElasticClient,
    out: &mut W,
) -> Result<()> {
    match cmd {
        WatcherCommands::Create { watches_file } => {
            let cfg = load_watches(&watches_file)?;
            for watch in cfg.watches {
                stream::put_json(client, &watch_path(&watch.name), watch.body)
                    .await
                    .with_context(|| format!("Failed to create/update the watch '{}'", watch.name))?;
                tracing::info!(watch = %watch.name, "watch stored");
                writeln!(
                    out,
                    "Successfully created/updated the watch '{}'.",
                    watch.name
                )?;
            }
        }
        WatcherCommands::Retrieve { watches } => {
            for name in parse_names(&watches, "watch")? {
                let content = client
                    .get(&watch_path(&name))
                    .await
                    .with_context(|| format!("Failed to retrieve the watch '{name}'"))?;
                print_json(out, Some(&format!("Watch: {name}")), &content)
                    .with_context(|| format!("Failed to indent the content of watch '{name}'"))?;
            }
        }
        WatcherCommands::Delete { watches } => {
            for name in parse_names(&watches, "watch")? {
                let content = client
                    .delete(&watch_path(&name))
                    .await
                    .with_context(|| format!("Failed to delete the watch '{name}'"))?;
                print_json(out, Some(&format!("Deleted watch '{name}':")), &content)
                    .with_context(|| format!("Failed to indent the content of watch '{name}'"))?;
            }
        }
        WatcherCommands::Activate { watches } => {
            for name in parse_names(&watches, "watch")? {
                switch_watch(client, &name, Toggle::Activate, out).await?;
            }
        }
        WatcherCommands::Deactivate { watches } => {
            for name in parse_names(&watches, "watch")? {
                switch_watch(client, &name, Toggle::Deactivate, out).await?;
            }
        }
        WatcherCommands::List => list(client, out).await?,
    }
    Ok(())
}

async fn switch_watch<W: Write>(
    client: &ElasticClient,
    name: &str,
    toggle: Toggle,
    out: &mut W,
) -> Result<()> {
    let content = client
        .send(Method::PUT, &toggle_path(name, toggle), None, Expect::OK)
        .await
        .with_context(|| format!("Failed to {toggle} the watch '{name}'"))?;
    print_json(out, Some(&format!("{toggle} watch '{name}':")), &content)
        .with_context(|| format!("Failed to indent the content of {toggle} response"))
}

async fn list<W: Write>(client: &ElasticClient, out: &mut W) -> Result<()> {
    let content = client
        .get(WATCH_SEARCH_PATH)
        .await
        .context("Failed to list the watches")?;
    let doc: Value = serde_json::from_slice(&content).context("Failed to parse the response")?;
    let ids = watch_ids(&doc).context("Failed to find the watch IDs in the response")?;

    writeln!(out, "Installed Watches:")?;
    for id in ids {
        writeln!(out, "  {id}")?;
    }
    Ok(())
}

/// Ids of the watches in a `.watches` search response.
///
/// A response without a `hits.hits` array is rejected instead of read as an
/// empty listing.
pub fn watch_ids(doc: &Value) -> Result<Vec<String>> {
    if !doc.pointer("/hits/hits").is_some_and(Value::is_array) {
        bail!("response has no 'hits.hits' array");
    }
    let path = JsonPath::parse(WATCH_ID_QUERY)
        .map_err(|e| anyhow!("invalid path '{}': {}", WATCH_ID_QUERY, e))?;
    Ok(path
        .query(doc)
        .all()
        .into_iter()
        .map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect())
}
