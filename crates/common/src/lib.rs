//! Atoll Common Library
//!
//! Shared types and helpers for the Atoll toolchain: the error type used by
//! the binaries, the canonical layout of a scaffolded project, and the
//! handful of constants the scaffolder, the preview server, and the e2e
//! suite all have to agree on.

pub mod error;
pub mod layout;

pub use error::{Error, Result};
pub use layout::ProjectLayout;

/// Atoll version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of the line the preview server prints to stdout once its listener
/// is bound. The e2e probe treats the first stdout line containing this
/// substring as the readiness signal.
pub const LISTEN_BANNER: &str = "Server listening on http://";

/// Default port for the preview server.
pub const DEFAULT_PORT: u16 = 8000;

/// Initial value of the scaffolded counter island.
pub const COUNTER_START: u32 = 3;
