//! Canonical layout of a scaffolded project.
//!
//! Both the scaffolder (which writes these paths) and the preview server
//! (which reads them) resolve project files through [`ProjectLayout`], so
//! the two sides cannot drift apart.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the generated entry point.
pub const ENTRYPOINT: &str = "main.ts";

/// Name of the generated route/island manifest.
pub const MANIFEST: &str = "fresh.gen.ts";

/// Relative path of the styling utility that marks the styled variant.
pub const TWIND_UTIL: &str = "utils/twind.ts";

/// Paths of a scaffolded project, resolved against its root directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entrypoint(&self) -> PathBuf {
        self.root.join(ENTRYPOINT)
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST)
    }

    pub fn islands_dir(&self) -> PathBuf {
        self.root.join("islands")
    }

    pub fn routes_dir(&self) -> PathBuf {
        self.root.join("routes")
    }

    pub fn api_dir(&self) -> PathBuf {
        self.routes_dir().join("api")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join("static")
    }

    pub fn utils_dir(&self) -> PathBuf {
        self.root.join("utils")
    }

    /// Whether the project was scaffolded with the styling layer.
    pub fn has_styling(&self) -> bool {
        self.root.join(TWIND_UTIL).is_file()
    }

    /// Check that the directory actually holds a scaffolded project.
    ///
    /// The entry point and the manifest are the two files the preview server
    /// cannot do without; everything else is allowed to have been edited or
    /// removed by the user.
    pub fn validate(&self) -> Result<()> {
        if !self.entrypoint().is_file() {
            return Err(Error::NotAProject(self.root.clone(), ENTRYPOINT));
        }
        if !self.manifest().is_file() {
            return Err(Error::NotAProject(self.root.clone(), MANIFEST));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_paths_against_root() {
        let layout = ProjectLayout::new("/tmp/app");
        assert_eq!(layout.entrypoint(), Path::new("/tmp/app/main.ts"));
        assert_eq!(layout.api_dir(), Path::new("/tmp/app/routes/api"));
        assert_eq!(layout.static_dir(), Path::new("/tmp/app/static"));
    }

    #[test]
    fn validate_requires_entrypoint_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());

        assert!(layout.validate().is_err());

        fs::write(layout.entrypoint(), "// entry").unwrap();
        assert!(layout.validate().is_err());

        fs::write(layout.manifest(), "// manifest").unwrap();
        layout.validate().unwrap();
    }

    #[test]
    fn styling_detection_keys_off_twind_util() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert!(!layout.has_styling());

        fs::create_dir_all(layout.utils_dir()).unwrap();
        fs::write(dir.path().join(TWIND_UTIL), "// twind").unwrap();
        assert!(layout.has_styling());
    }
}
