//! Scans the filesystem for asset files under a root.
//!
//! Implements the file-enumeration collaborator for the organiser: a
//! recursive walk that leaves out hidden entries, sidecar metadata files, and
//! anything matched by the configured exclude globs.

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns all candidate files under `root`, in walk order. The order is
/// stable for a single run, which is all the organiser assumes.
pub fn discover(root: &Path, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let exclude_set = build_globset(excludes)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || should_descend(e.path(), &exclude_set))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if entry.file_type().is_dir()
            || is_excluded(path, &exclude_set)
            || is_hidden(path)
            || is_sidecar(path)
        {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Sidecar/metadata companion files (Unity-style `.meta`) are never organised.
pub fn is_sidecar(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("meta"))
        .unwrap_or(false)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(builder.build()?)
}

fn should_descend(path: &Path, excludes: &GlobSet) -> bool {
    !is_excluded(path, excludes) && !is_hidden(path)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_excluded(path: &Path, excludes: &GlobSet) -> bool {
    excludes.is_match(path)
}
