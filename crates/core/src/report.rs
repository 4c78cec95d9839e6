//! Run reports produced by the organiser and tagger pipelines.
//!
//! Both reports are plain data: counts plus per-item annotations, built
//! incrementally during a run and rendered as the console report afterwards.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One skipped or redirected file, with the reason it was not moved normally.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganiseReport {
    pub folders_created: u32,
    pub moved: u32,
    pub duplicates_moved: u32,
    pub skipped: u32,
    /// Ordered skip/duplicate annotations, one per affected file.
    pub details: Vec<Annotation>,
}

impl OrganiseReport {
    pub(crate) fn skip(&mut self, path: &Path, reason: impl Into<String>) {
        self.skipped += 1;
        self.details.push(Annotation {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    pub(crate) fn duplicate(&mut self, path: &Path, reason: impl Into<String>) {
        self.duplicates_moved += 1;
        self.details.push(Annotation {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }
}

impl fmt::Display for OrganiseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Organiser Report]")?;
        writeln!(f, "Folders created: {}", self.folders_created)?;
        writeln!(f, "Assets moved: {}", self.moved)?;
        writeln!(f, "Duplicates moved: {}", self.duplicates_moved)?;
        writeln!(f, "Skipped: {}", self.skipped)?;
        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped Files Details:")?;
            for a in &self.details {
                writeln!(f, "- {} ({})", a.path.display(), a.reason)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagReport {
    pub tagged: u32,
    pub skipped: u32,
    /// How many subjects each winning rule tagged, keyed by provenance label.
    pub rule_usage: BTreeMap<String, u32>,
}

impl fmt::Display for TagReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Scene Tagger Report]")?;
        writeln!(f, "Tagged objects: {}", self.tagged)?;
        writeln!(f, "Skipped objects: {}", self.skipped)?;
        if !self.rule_usage.is_empty() {
            writeln!(f)?;
            for (source, count) in &self.rule_usage {
                writeln!(f, "Rule Applied: {source} ({count} objects)")?;
            }
        }
        Ok(())
    }
}
