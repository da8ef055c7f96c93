//! Typed failures the tools report.
//!
//! Most errors travel as `anyhow::Error` with context attached; the variants
//! here are the ones callers (and tests) need to tell apart.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    /// The cluster answered with a status the operation does not accept.
    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// A comma separated name list contained nothing but separators or blanks.
    #[error("no {kind} names given")]
    NoNames { kind: &'static str },

    #[error("{kind} file '{shown}' not found", shown = path.display())]
    DefinitionFileNotFound { kind: &'static str, path: PathBuf },

    /// The JSON body could not be serialised into the request stream.
    #[error("failed to encode the request body: {0}")]
    BodyProducer(String),
}

impl AdminError {
    /// Status code carried by an [`AdminError::UnexpectedStatus`] somewhere in the chain.
    pub fn status_of(err: &anyhow::Error) -> Option<StatusCode> {
        err.chain().find_map(|cause| match cause.downcast_ref::<AdminError>() {
            Some(AdminError::UnexpectedStatus { status, .. }) => Some(*status),
            _ => None,
        })
    }
}
