//! JSON-file scene store: a flat document of scene objects that stands in
//! for a live scene graph. Objects implement the core `Subject` trait so the
//! tagger can read and mutate them.

use anyhow::{Context, Result};
use organiser_core::tagger::Subject;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    /// Provenance note: label of the rule that assigned the current tag.
    #[serde(default)]
    pub rule_source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Subject for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn component_types(&self) -> &[String] {
        &self.components
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_tag(&mut self, tag: &str) -> Result<()> {
        self.tag = Some(tag.to_string());
        Ok(())
    }

    fn set_rule_source(&mut self, source: &str) -> Result<()> {
        self.rule_source = Some(source.to_string());
        Ok(())
    }
}

pub fn load(path: &Path) -> Result<SceneFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid scene file {}", path.display()))
}

pub fn save(path: &Path, scene: &SceneFile) -> Result<()> {
    let content = serde_json::to_string_pretty(scene)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write scene file {}", path.display()))
}
