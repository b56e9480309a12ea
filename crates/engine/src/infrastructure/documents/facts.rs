//! Quest facts loading.

use std::collections::BTreeMap;
use std::path::Path;

use ironpath_domain::common::StringExt;
use ironpath_domain::{QuestFact, QuestFacts, QuestRegistry};

use super::{
    parse_skill_levels, parse_skill_xp, parse_tags, read_document, QuestFactDocument,
    QuestFactsDocument,
};

/// Loads the per-quest facts map against a quest registry.
///
/// Keys resolve by exact id, then by normalized name. Keys that match no
/// quest and entries whose values do not decode are counted and skipped.
/// When two keys name the same quest, the one authored first wins.
pub struct QuestFactsLoader<'a> {
    registry: &'a QuestRegistry,
}

impl<'a> QuestFactsLoader<'a> {
    pub fn new(registry: &'a QuestRegistry) -> Self {
        Self { registry }
    }

    pub fn load_str(&self, json: &str) -> QuestFacts {
        match serde_json::from_str::<QuestFactsDocument>(json) {
            Ok(document) => self.from_document(document),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse quest facts, using empty facts");
                QuestFacts::default()
            }
        }
    }

    pub fn load_path(&self, path: &Path) -> QuestFacts {
        match read_document::<QuestFactsDocument>(path) {
            Ok(document) => self.from_document(document),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to load quest facts, using empty facts"
                );
                QuestFacts::default()
            }
        }
    }

    pub fn from_document(&self, document: QuestFactsDocument) -> QuestFacts {
        let mut by_quest = BTreeMap::new();
        let mut unresolved = 0;
        let mut malformed = 0;

        for (key, value) in document {
            let Some(definition) = self.registry.resolve(&key) else {
                tracing::debug!(key = %key, "Skipping facts for unknown quest");
                unresolved += 1;
                continue;
            };
            let raw = match serde_json::from_value::<QuestFactDocument>(value) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "Skipping malformed quest facts");
                    malformed += 1;
                    continue;
                }
            };
            by_quest
                .entry(definition.id.clone())
                .or_insert_with(|| Self::convert(raw));
        }

        if unresolved > 0 || malformed > 0 {
            tracing::warn!(
                loaded = by_quest.len(),
                unresolved_keys = unresolved,
                malformed_entries = malformed,
                "Quest facts loaded with skipped entries"
            );
        }

        QuestFacts::new(by_quest, unresolved).with_malformed_entries(malformed)
    }

    fn convert(raw: QuestFactDocument) -> QuestFact {
        QuestFact {
            min_skills: parse_skill_levels(raw.min_skills),
            xp_rewards: parse_skill_xp(raw.xp_rewards),
            tags: parse_tags(raw.tags),
            why: raw.why.trimmed_non_blank(),
            prerequisites: raw
                .prereqs
                .unwrap_or_default()
                .into_iter()
                .filter_map(|name| Some(name).trimmed_non_blank())
                .collect(),
        }
    }
}
