//! Declarative tagging rules and the priority-based match resolver.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tags subjects that carry a component of the named type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentRule {
    pub component_type: String,
    pub tag_name: String,
    #[serde(default)]
    pub priority: i32,
}

/// Tags subjects whose name contains the given substring (case-sensitive).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameRule {
    pub name_contains: String,
    pub tag_name: String,
    #[serde(default)]
    pub priority: i32,
}

/// Externally-owned rule configuration. Rule order within each list is
/// significant: it is the tie-break order for equal priorities.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TagRuleSet {
    #[serde(default)]
    pub component_rules: Vec<ComponentRule>,
    #[serde(default)]
    pub name_rules: Vec<NameRule>,
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("no tag rule configuration found at {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read tag rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tag rules: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads the rule set from a single TOML document. A missing file is a hard
/// error: tagging must not run without configuration.
pub fn load_rule_set(path: &Path) -> Result<TagRuleSet, RuleError> {
    if !path.exists() {
        return Err(RuleError::Missing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Winning rule for one subject, if any.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub tag: Option<String>,
    /// Label of the winning rule, e.g. "Component:Light" or "Name:Enemy".
    pub provenance: Option<String>,
    priority: i32,
}

impl MatchResult {
    fn none() -> Self {
        MatchResult {
            tag: None,
            provenance: None,
            priority: i32::MIN,
        }
    }
}

/// Picks the highest-priority rule matching the subject. Strict-greater
/// comparison means the first rule seen at the maximum priority wins;
/// component rules are evaluated before name rules, each in stored order.
/// Rules with an empty trigger, an empty tag, or a tag outside `known_tags`
/// never match.
pub fn resolve(
    name: &str,
    component_types: &[String],
    rule_set: &TagRuleSet,
    known_tags: &HashSet<String>,
) -> MatchResult {
    let mut best = MatchResult::none();

    for rule in &rule_set.component_rules {
        if rule.component_type.is_empty() || !is_valid_tag(&rule.tag_name, known_tags) {
            continue;
        }
        if component_types.iter().any(|c| c == &rule.component_type)
            && rule.priority > best.priority
        {
            best = MatchResult {
                tag: Some(rule.tag_name.clone()),
                provenance: Some(format!("Component:{}", rule.component_type)),
                priority: rule.priority,
            };
        }
    }

    for rule in &rule_set.name_rules {
        if rule.name_contains.is_empty() || !is_valid_tag(&rule.tag_name, known_tags) {
            continue;
        }
        if name.contains(&rule.name_contains) && rule.priority > best.priority {
            best = MatchResult {
                tag: Some(rule.tag_name.clone()),
                provenance: Some(format!("Name:{}", rule.name_contains)),
                priority: rule.priority,
            };
        }
    }

    best
}

fn is_valid_tag(tag: &str, known_tags: &HashSet<String>) -> bool {
    !tag.is_empty() && known_tags.contains(tag)
}
