//! Atoll preview server
//!
//! Serves a scaffolded project so it can be smoke-checked without any
//! JavaScript toolchain: the index route renders the counter island with a
//! minimal inline hydration script, `/api/joke` serves the canonical
//! one-liners, dynamic `/<name>` routes greet, and everything else falls
//! back to the project's `static/` directory.
//!
//! This is a stand-in for the real framework runtime, not an implementation
//! of it; it renders exactly the pages a fresh scaffold contains.

pub mod render;
pub mod server;

pub use server::{serve, DevServerConfig};
