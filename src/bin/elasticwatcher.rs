use anyhow::Result;
use clap::Parser;
use elastic_admin::{client::ElasticClient, commands::watcher, logging, WatcherCli};

/// Parses the command line, connects to the cluster and runs the selected
/// subcommand. Any failure is reported on stderr with a non-zero exit status.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = WatcherCli::parse();
    logging::init(&cli.log)?;
    let client = ElasticClient::new(&cli.conn)?;
    watcher::run(cli.cmd, &client, &mut std::io::stdout()).await
}
