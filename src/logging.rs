//! Diagnostic logging on stderr.
//!
//! Results go to stdout; tracing output is kept on stderr so it never mixes
//! with JSON a caller may be piping elsewhere. `RUST_LOG` overrides the level
//! derived from `-v`/`-q`.

use anyhow::{anyhow, Result};
use clap::Args;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Verbosity flags shared by every tool
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl LogArgs {
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
pub fn init(args: &LogArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
