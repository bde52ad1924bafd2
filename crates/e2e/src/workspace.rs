//! Locating (and, if need be, building) the workspace binaries under test.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// Workspace root, resolved from this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(manifest)
}

fn target_dir() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace_root().join("target"))
}

/// Path of the scaffolder binary.
pub fn init_bin() -> PathBuf {
    target_dir().join("debug").join("atoll-init")
}

/// Path of the preview-server binary.
pub fn dev_bin() -> PathBuf {
    target_dir().join("debug").join("atoll-dev")
}

/// Make sure both binaries exist, building them once if they do not.
///
/// Returns `false` when they cannot be produced (no `cargo` on PATH), so
/// callers can skip rather than fail on an under-provisioned machine.
pub fn ensure_binaries() -> bool {
    static BUILT: OnceLock<bool> = OnceLock::new();
    *BUILT.get_or_init(|| {
        if init_bin().is_file() && dev_bin().is_file() {
            return true;
        }
        let status = Command::new("cargo")
            .args(["build", "-p", "atoll-cli", "-p", "atoll-dev"])
            .current_dir(workspace_root())
            .status();
        match status {
            Ok(status) if status.success() => init_bin().is_file() && dev_bin().is_file(),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binaries_live_under_the_workspace_target_dir() {
        assert!(init_bin().ends_with("debug/atoll-init"));
        assert!(dev_bin().ends_with("debug/atoll-dev"));
    }
}
