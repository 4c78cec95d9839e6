//! Asset organiser pipeline: classifies files by extension and moves them
//! into the type-based folder hierarchy, redirecting name collisions into a
//! duplicates folder.

use crate::classify;
use crate::report::OrganiseReport;
use crate::scanner;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Asset-store collaborator. The organiser never touches the filesystem
/// directly; all existence checks, folder creation, and moves go through this
/// trait.
pub trait AssetStore {
    fn folder_exists(&self, path: &Path) -> bool;
    fn create_folder(&mut self, parent: &Path, name: &str) -> anyhow::Result<()>;
    fn asset_exists(&self, path: &Path) -> bool;
    fn move_asset(&mut self, from: &Path, to: &Path) -> Result<(), String>;
}

/// Folder layout the organiser builds under the project root.
#[derive(Debug, Clone)]
pub struct OrganiseLayout {
    pub root: PathBuf,
    pub organised_root: String,
    pub duplicates_folder: String,
}

impl Default for OrganiseLayout {
    fn default() -> Self {
        OrganiseLayout {
            root: PathBuf::from("Assets"),
            organised_root: "OrganisedAssets".to_string(),
            duplicates_folder: "Duplicates".to_string(),
        }
    }
}

impl OrganiseLayout {
    pub fn main_folder(&self) -> PathBuf {
        self.root.join(&self.organised_root)
    }

    pub fn duplicates_path(&self) -> PathBuf {
        self.main_folder().join(&self.duplicates_folder)
    }
}

/// Runs one organise pass over `files`, in the supplied order. Every file
/// gets exactly one outcome (moved, duplicate, or skipped); per-file failures
/// are folded into the report and never abort the batch. Re-running over an
/// already-organised tree is a no-op apart from folder-existence checks.
pub fn organise(
    files: &[PathBuf],
    store: &mut dyn AssetStore,
    layout: &OrganiseLayout,
) -> OrganiseReport {
    let mut report = OrganiseReport::default();

    let main_folder = layout.main_folder();
    let duplicates_path = layout.duplicates_path();

    if let Err(e) = ensure_folder(store, &layout.root, &layout.organised_root, &mut report) {
        warn!("could not create {}: {e}", main_folder.display());
    }
    if let Err(e) = ensure_folder(store, &main_folder, &layout.duplicates_folder, &mut report) {
        warn!("could not create {}: {e}", duplicates_path.display());
    }

    for file in files {
        // Sidecar entries never count toward any outcome.
        if scanner::is_sidecar(file) {
            continue;
        }

        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(classification) = classify::classify(ext) else {
            report.skip(file, "unsupported file type");
            continue;
        };

        let category_path = main_folder.join(classification.category);
        let target_folder = category_path.join(&classification.subfolder);

        if let Err(e) = ensure_folder(store, &main_folder, classification.category, &mut report) {
            report.skip(file, format!("failed to create folder: {e}"));
            continue;
        }
        if let Err(e) = ensure_folder(store, &category_path, &classification.subfolder, &mut report)
        {
            report.skip(file, format!("failed to create folder: {e}"));
            continue;
        }

        // A path that classified has an extension, hence a final component.
        let Some(file_name) = file.file_name() else {
            continue;
        };
        let target_path = target_folder.join(file_name);

        if file.starts_with(&target_folder) {
            report.skip(file, "already in target folder");
            continue;
        }

        if file.starts_with(&duplicates_path) {
            // Already parked as a duplicate on a previous run; never
            // re-duplicate it.
            report.skip(file, "already in duplicates folder");
            continue;
        }

        if store.asset_exists(&target_path) {
            let duplicate_target = duplicates_path.join(file_name);
            match store.move_asset(file, &duplicate_target) {
                Ok(()) => {
                    debug!("duplicate: {} -> {}", file.display(), duplicate_target.display());
                    report.duplicate(
                        file,
                        format!("duplicate moved to {} folder", layout.duplicates_folder),
                    );
                }
                Err(e) => report.skip(file, format!("duplicate move failed: {e}")),
            }
            continue;
        }

        match store.move_asset(file, &target_path) {
            Ok(()) => {
                debug!("moved: {} -> {}", file.display(), target_path.display());
                report.moved += 1;
            }
            Err(e) => report.skip(file, format!("failed to move: {e}")),
        }
    }

    report
}

fn ensure_folder(
    store: &mut dyn AssetStore,
    parent: &Path,
    name: &str,
    report: &mut OrganiseReport,
) -> Result<(), String> {
    let path = parent.join(name);
    if store.folder_exists(&path) {
        return Ok(());
    }
    match store.create_folder(parent, name) {
        Ok(()) => {
            report.folders_created += 1;
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
