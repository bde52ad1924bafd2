//! Error types for the verification suite.
//!
//! Every variant is fatal to its test case: this is a verification suite,
//! not a resilient service, so nothing here is retried or downgraded.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with code {got} (expected {expected}); stderr:\n{stderr}")]
    UnexpectedExit {
        command: String,
        expected: i32,
        got: i32,
        stderr: String,
    },

    #[error("expected path is missing: {0}")]
    MissingPath(PathBuf),

    #[error("{path} is a {actual}, expected a {expected}")]
    KindMismatch {
        path: PathBuf,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("server did not start: {0}")]
    ServerStart(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GET {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no element matched selector {0:?}")]
    ElementNotFound(String),

    #[error("{what}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        what: &'static str,
        expected: String,
        actual: String,
    },

    #[error("browser toolchain unavailable (node with playwright required)")]
    BrowserUnavailable,

    #[error("browser driver error: {0}")]
    Browser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
