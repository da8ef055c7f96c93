//! Subcommands of the four tools.
//!
//! Each module exposes a clap `Subcommand` enum, which is the command set its
//! binary registers at startup, and a `run` entry point that executes one
//! parsed command against a cluster and writes the result to `out`.

pub mod license;
pub mod snapshot;
pub mod template;
pub mod watcher;
