use anyhow::Result;
use organiser_core::organiser::AssetStore;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Real-filesystem asset store. In dry-run mode mutations are logged and
/// reported as successful without touching disk; planned folders and moves
/// are tracked so the preview sees the same occupancy a real run would,
/// collisions included.
#[derive(Debug, Default)]
pub struct FsAssetStore {
    dry_run: bool,
    planned_folders: HashSet<PathBuf>,
    planned_assets: HashSet<PathBuf>,
    planned_removals: HashSet<PathBuf>,
}

impl FsAssetStore {
    pub fn new(dry_run: bool) -> Self {
        FsAssetStore {
            dry_run,
            ..Default::default()
        }
    }
}

impl AssetStore for FsAssetStore {
    fn folder_exists(&self, path: &Path) -> bool {
        path.is_dir() || self.planned_folders.contains(path)
    }

    fn create_folder(&mut self, parent: &Path, name: &str) -> Result<()> {
        let path = parent.join(name);
        if self.dry_run {
            debug!("dry-run: would create {}", path.display());
            self.planned_folders.insert(path);
            return Ok(());
        }
        fs::create_dir_all(&path)?;
        Ok(())
    }

    fn asset_exists(&self, path: &Path) -> bool {
        if self.planned_assets.contains(path) {
            return true;
        }
        path.exists() && !self.planned_removals.contains(path)
    }

    fn move_asset(&mut self, from: &Path, to: &Path) -> Result<(), String> {
        if self.dry_run {
            debug!("dry-run: would move {} -> {}", from.display(), to.display());
            self.planned_removals.insert(from.to_path_buf());
            self.planned_assets.insert(to.to_path_buf());
            return Ok(());
        }
        move_file(from, to).map_err(|e| e.to_string())
    }
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            // rename fails across devices; fall back to copy + delete
            fs::copy(from, to)?;
            fs::remove_file(from)?;
            Ok(())
        }
    }
}
