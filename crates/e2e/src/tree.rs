//! Expected file-tree description and verification.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{E2eError, E2eResult};

/// One node of an expected file-system shape.
///
/// `Summary` is a human-authored annotation of the tree's totals. It carries
/// no filesystem meaning: verification skips it and must never resolve it as
/// a path. Keeping it a distinct variant (rather than a third "kind") means
/// exhaustive matches catch any future confusion.
#[derive(Debug, Clone)]
pub enum Entry {
    File(&'static str),
    Dir(&'static str, Vec<Entry>),
    Summary { dirs: usize, files: usize },
}

/// Assert that every named entry exists under `base` with exactly the
/// declared kind, recursing into directories. Sibling order is irrelevant;
/// this is a pure read-side check.
pub fn verify(entries: &[Entry], base: Option<&Path>) -> E2eResult<()> {
    for entry in entries {
        match entry {
            Entry::Summary { .. } => {}
            Entry::File(name) => check_kind(resolve(base, name), true)?,
            Entry::Dir(name, children) => {
                let path = resolve(base, name);
                check_kind(path.clone(), false)?;
                verify(children, Some(&path))?;
            }
        }
    }
    Ok(())
}

fn resolve(base: Option<&Path>, name: &str) -> PathBuf {
    match base {
        Some(base) => base.join(name),
        None => PathBuf::from(name),
    }
}

fn check_kind(path: PathBuf, want_file: bool) -> E2eResult<()> {
    let metadata = fs::metadata(&path).map_err(|_| E2eError::MissingPath(path.clone()))?;
    if metadata.is_file() != want_file {
        return Err(E2eError::KindMismatch {
            path,
            expected: kind_name(want_file),
            actual: kind_name(metadata.is_file()),
        });
    }
    Ok(())
}

fn kind_name(is_file: bool) -> &'static str {
    if is_file {
        "file"
    } else {
        "directory"
    }
}
