//! Scene tagger pipeline: resolves the rule set against every subject and
//! applies the winning tag plus its provenance note.

use crate::report::TagReport;
use crate::rules::{self, TagRuleSet};
use std::collections::HashSet;
use tracing::warn;

/// Scene-object collaborator: the tagger reads names and component types
/// through this trait and writes the tag and provenance back through it.
pub trait Subject {
    fn name(&self) -> &str;
    fn component_types(&self) -> &[String];
    /// Editor-internal objects are excluded from tagging entirely.
    fn is_hidden(&self) -> bool;
    fn set_tag(&mut self, tag: &str) -> anyhow::Result<()>;
    fn set_rule_source(&mut self, source: &str) -> anyhow::Result<()>;
}

/// Runs one tagging pass. Hidden subjects are passed over silently; a subject
/// with no winning rule counts as skipped; a mutation failure is fatal for
/// that subject only.
pub fn tag_all<S: Subject>(
    subjects: &mut [S],
    rule_set: &TagRuleSet,
    known_tags: &HashSet<String>,
) -> TagReport {
    let mut report = TagReport::default();

    for subject in subjects.iter_mut() {
        if subject.is_hidden() {
            continue;
        }

        let result = rules::resolve(
            subject.name(),
            subject.component_types(),
            rule_set,
            known_tags,
        );

        let (Some(tag), Some(source)) = (result.tag, result.provenance) else {
            report.skipped += 1;
            continue;
        };

        let applied = subject
            .set_tag(&tag)
            .and_then(|_| subject.set_rule_source(&source));
        if let Err(e) = applied {
            warn!("failed to tag {}: {e:#}", subject.name());
            report.skipped += 1;
            continue;
        }

        report.tagged += 1;
        *report.rule_usage.entry(source).or_insert(0) += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ComponentRule, NameRule};

    #[derive(Debug, Clone, Default)]
    struct FakeSubject {
        name: String,
        components: Vec<String>,
        hidden: bool,
        refuse_mutation: bool,
        tag: Option<String>,
        rule_source: Option<String>,
    }

    impl FakeSubject {
        fn new(name: &str, components: &[&str]) -> Self {
            FakeSubject {
                name: name.to_string(),
                components: components.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Subject for FakeSubject {
        fn name(&self) -> &str {
            &self.name
        }

        fn component_types(&self) -> &[String] {
            &self.components
        }

        fn is_hidden(&self) -> bool {
            self.hidden
        }

        fn set_tag(&mut self, tag: &str) -> anyhow::Result<()> {
            if self.refuse_mutation {
                anyhow::bail!("object is read-only");
            }
            self.tag = Some(tag.to_string());
            Ok(())
        }

        fn set_rule_source(&mut self, source: &str) -> anyhow::Result<()> {
            self.rule_source = Some(source.to_string());
            Ok(())
        }
    }

    fn rule_set() -> TagRuleSet {
        TagRuleSet {
            component_rules: vec![ComponentRule {
                component_type: "Light".to_string(),
                tag_name: "Illuminated".to_string(),
                priority: 5,
            }],
            name_rules: vec![NameRule {
                name_contains: "Enemy".to_string(),
                tag_name: "Hostile".to_string(),
                priority: 10,
            }],
        }
    }

    fn known() -> HashSet<String> {
        ["Illuminated", "Hostile"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn applies_winning_tag_and_records_provenance() {
        let mut subjects = vec![
            FakeSubject::new("EnemySpawner", &["Light"]),
            FakeSubject::new("Torch", &["Light"]),
            FakeSubject::new("Cube", &["MeshRenderer"]),
        ];

        let report = tag_all(&mut subjects, &rule_set(), &known());

        assert_eq!(report.tagged, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(subjects[0].tag.as_deref(), Some("Hostile"));
        assert_eq!(subjects[0].rule_source.as_deref(), Some("Name:Enemy"));
        assert_eq!(subjects[1].tag.as_deref(), Some("Illuminated"));
        assert_eq!(subjects[1].rule_source.as_deref(), Some("Component:Light"));
        assert!(subjects[2].tag.is_none());

        assert_eq!(report.rule_usage.get("Name:Enemy"), Some(&1));
        assert_eq!(report.rule_usage.get("Component:Light"), Some(&1));
    }

    #[test]
    fn hidden_subjects_are_excluded_from_both_counts() {
        let mut hidden = FakeSubject::new("EnemyCamera", &[]);
        hidden.hidden = true;
        let mut subjects = vec![hidden];

        let report = tag_all(&mut subjects, &rule_set(), &known());

        assert_eq!(report.tagged, 0);
        assert_eq!(report.skipped, 0);
        assert!(subjects[0].tag.is_none());
    }

    #[test]
    fn mutation_failure_only_affects_that_subject() {
        let mut broken = FakeSubject::new("EnemyBoss", &[]);
        broken.refuse_mutation = true;
        let mut subjects = vec![broken, FakeSubject::new("EnemyGrunt", &[])];

        let report = tag_all(&mut subjects, &rule_set(), &known());

        assert_eq!(report.tagged, 1);
        assert_eq!(report.skipped, 1);
        assert!(subjects[0].tag.is_none());
        assert_eq!(subjects[1].tag.as_deref(), Some("Hostile"));
    }

    #[test]
    fn usage_counter_accumulates_per_provenance_label() {
        let mut subjects = vec![
            FakeSubject::new("EnemyA", &[]),
            FakeSubject::new("EnemyB", &[]),
            FakeSubject::new("EnemyC", &[]),
        ];

        let report = tag_all(&mut subjects, &rule_set(), &known());

        assert_eq!(report.tagged, 3);
        assert_eq!(report.rule_usage.get("Name:Enemy"), Some(&3));
    }
}
