//! Project generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use atoll_common::error::{Error, Result};
use atoll_common::layout::TWIND_UTIL;

use crate::templates;

/// Materialize a new project skeleton under `target`.
///
/// `target` is created if absent. An existing file, or an existing directory
/// with any entries in it, is rejected so a scaffold can never clobber user
/// work. Output is fully determined by `styling`.
pub fn scaffold(target: &Path, styling: bool) -> Result<()> {
    if target.is_file() || (target.is_dir() && fs::read_dir(target)?.next().is_some()) {
        return Err(Error::TargetNotEmpty(target.to_path_buf()));
    }

    for dir in ["islands", "routes", "routes/api", "static"] {
        fs::create_dir_all(target.join(dir))?;
    }
    if styling {
        fs::create_dir_all(target.join("utils"))?;
    }

    let mut files: Vec<(&str, String)> = vec![
        ("README.md", templates::readme(styling)),
        ("import_map.json", templates::import_map(styling)),
        ("fresh.gen.ts", templates::MANIFEST.to_string()),
        ("main.ts", templates::main_ts(styling)),
        ("islands/Counter.tsx", templates::counter(styling)),
        ("routes/index.tsx", templates::index_route()),
        ("routes/[name].tsx", templates::NAME_ROUTE.to_string()),
        ("routes/api/joke.ts", templates::JOKE_API.to_string()),
        ("static/logo.svg", templates::LOGO_SVG.to_string()),
    ];
    if styling {
        files.push((TWIND_UTIL, templates::TWIND_UTIL.to_string()));
    }

    for (rel, contents) in files {
        fs::write(target.join(rel), contents)?;
        debug!(file = rel, "wrote");
    }

    info!(target = %target.display(), styling, "project scaffolded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_common::ProjectLayout;

    #[test]
    fn plain_scaffold_writes_expected_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("app");
        scaffold(&target, false).unwrap();

        for rel in [
            "README.md",
            "import_map.json",
            "fresh.gen.ts",
            "main.ts",
            "islands/Counter.tsx",
            "routes/index.tsx",
            "routes/[name].tsx",
            "routes/api/joke.ts",
            "static/logo.svg",
        ] {
            assert!(target.join(rel).is_file(), "missing {rel}");
        }

        let layout = ProjectLayout::new(&target);
        layout.validate().unwrap();
        assert!(!layout.has_styling());
    }

    #[test]
    fn styled_scaffold_adds_twind_util() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("app");
        scaffold(&target, true).unwrap();

        let layout = ProjectLayout::new(&target);
        layout.validate().unwrap();
        assert!(layout.has_styling());
    }

    #[test]
    fn rejects_non_empty_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "user data").unwrap();

        let err = scaffold(dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::TargetNotEmpty(_)));
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn scaffolds_into_existing_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), false).unwrap();
        assert!(dir.path().join("main.ts").is_file());
    }
}
