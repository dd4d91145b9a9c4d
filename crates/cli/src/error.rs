//! Driver-level errors (configuration, cart loading, output).

use std::path::PathBuf;

use stockroom_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read cart file {path}: {source}")]
    CartIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed cart: {0}")]
    CartFormat(#[from] serde_json::Error),

    #[error("cart entry #{index} ({name}) is invalid: {source}")]
    InvalidEntry {
        index: usize,
        name: String,
        #[source]
        source: DomainError,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
