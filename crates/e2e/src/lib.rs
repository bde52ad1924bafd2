//! Atoll E2E verification suite
//!
//! Proves that a scaffolded project actually works, end to end:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Scenario test (tests/)                    │
//! ├────────────────────────────────────────────────────────────┤
//! │  process   — run atoll-init, capture exit code + streams   │
//! │  tree      — assert the generated file tree's shape        │
//! │  server    — boot atoll-dev, probe stdout for readiness    │
//! │  http      — one GET /, status must be 200                 │
//! │  browser   — headless Chromium: read counter, click, read  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each scenario owns its temp directory, subprocess, and browser session
//! exclusively and releases them on every exit path. Failures are fatal to
//! their test case; nothing is retried.

pub mod browser;
pub mod error;
pub mod http;
pub mod process;
pub mod server;
pub mod tree;
pub mod workspace;

pub use error::{E2eError, E2eResult};
