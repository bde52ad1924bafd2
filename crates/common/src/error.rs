//! Error types for Atoll

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the Atoll Error
pub type Result<T> = std::result::Result<T, Error>;

/// Atoll error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("target directory {0} exists and is not empty")]
    TargetNotEmpty(PathBuf),

    #[error("{0} is not an atoll project (missing {1})")]
    NotAProject(PathBuf, &'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
