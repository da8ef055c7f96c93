use crate::{
    client::ElasticClient,
    config::{load_templates, parse_names},
    constants::TEMPLATE_PATH,
    output::print_json,
    stream,
};
use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::{Map, Value};
use std::{io::Write, path::PathBuf};

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Create index templates or update existing ones
    Create {
        /// Path to templates file
        #[arg(long = "templates-file", value_name = "PATH")]
        templates_file: PathBuf,
    },
    /// Retrieve the content of index templates
    Retrieve {
        /// Comma separated list of template names
        #[arg(long)]
        templates: String,
    },
    /// Delete index templates
    Delete {
        /// Comma separated list of template names
        #[arg(long)]
        templates: String,
    },
    /// List all index templates
    List,
}

pub fn template_path(name: &str) -> String {
    format!("{TEMPLATE_PATH}/{name}")
}

pub async fn run<W: Write>(
    cmd: TemplateCommands,
    client: &ElasticClient,
    out: &mut W,
) -> Result<()> {
    match cmd {
        TemplateCommands::Create { templates_file } => {
            let cfg = load_templates(&templates_file)?;
            for template in cfg.templates {
                stream::put_json(client, &template_path(&template.name), template.body)
                    .await
                    .with_context(|| {
                        format!("Failed to create/update the template '{}'", template.name)
                    })?;
                tracing::info!(template = %template.name, "template stored");
                writeln!(
                    out,
                    "Successfully created/updated the template '{}'.",
                    template.name
                )?;
            }
        }
        TemplateCommands::Retrieve { templates } => {
            for name in parse_names(&templates, "template")? {
                let content = client
                    .get(&template_path(&name))
                    .await
                    .with_context(|| format!("Failed to retrieve the template '{name}'"))?;
                print_json(out, Some(&format!("Template: {name}")), &content)
                    .with_context(|| format!("Failed to indent the content of the template '{name}'"))?;
            }
        }
        TemplateCommands::Delete { templates } => {
            for name in parse_names(&templates, "template")? {
                let content = client
                    .delete(&template_path(&name))
                    .await
                    .with_context(|| format!("Failed to delete the template '{name}'"))?;
                print_json(out, Some(&format!("Deleted template '{name}':")), &content)
                    .with_context(|| format!("Failed to indent the delete response of template '{name}'"))?;
            }
        }
        TemplateCommands::List => {
            let content = client
                .get(&template_path("*"))
                .await
                .context("Failed to retrieve the templates")?;
            let templates: Map<String, Value> =
                serde_json::from_slice(&content).context("Failed to unmarshal the templates")?;
            writeln!(out, "Templates:")?;
            for name in templates.keys() {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}
