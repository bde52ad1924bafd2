//! Atoll scaffolder
//!
//! Materializes a new island-architecture project skeleton from embedded
//! templates. The binary front-end lives in `main.rs`; everything it does is
//! reachable through [`scaffold::scaffold`] so the preview server's tests can
//! generate fixture projects without shelling out.

pub mod scaffold;
pub mod templates;

pub use scaffold::scaffold;
