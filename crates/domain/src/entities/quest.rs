//! Quest registry - the canonical quests route references resolve against.
//!
//! The host owns the quest list; the registry indexes it by exact id and by
//! normalized name so hand-authored documents can refer to quests either way.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::normalize_key;
use crate::QuestId;

/// One canonical quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub id: QuestId,
    pub name: String,
}

impl QuestDefinition {
    pub fn new(id: QuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only lookup over the canonical quests.
#[derive(Debug, Clone, Default)]
pub struct QuestRegistry {
    quests: Vec<QuestDefinition>,
    by_id: HashMap<QuestId, usize>,
    by_key: HashMap<String, usize>,
}

impl QuestRegistry {
    /// Build a registry. The first definition of an id or name key wins.
    pub fn new(definitions: impl IntoIterator<Item = QuestDefinition>) -> Self {
        let mut registry = Self::default();

        for definition in definitions {
            if registry.by_id.contains_key(&definition.id) {
                continue;
            }
            let index = registry.quests.len();

            registry.by_id.insert(definition.id.clone(), index);
            for key in [
                normalize_key(&definition.name),
                normalize_key(definition.id.as_str()),
            ] {
                if !key.is_empty() {
                    registry.by_key.entry(key).or_insert(index);
                }
            }
            registry.quests.push(definition);
        }

        registry
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestDefinition> {
        self.quests.iter()
    }

    pub fn get(&self, id: &QuestId) -> Option<&QuestDefinition> {
        self.by_id.get(id).map(|&index| &self.quests[index])
    }

    /// Exact canonical id match (`COOKS_ASSISTANT`).
    pub fn find_by_id(&self, raw: &str) -> Option<&QuestDefinition> {
        let id = QuestId::new(raw).ok()?;
        self.get(&id)
    }

    /// Normalized name match ("Cook's Assistant", "cooks assistant").
    pub fn find_by_name(&self, name: &str) -> Option<&QuestDefinition> {
        let key = normalize_key(name);
        if key.is_empty() {
            return None;
        }
        self.by_key.get(&key).map(|&index| &self.quests[index])
    }

    /// Exact id first, then normalized name.
    pub fn resolve(&self, reference: &str) -> Option<&QuestDefinition> {
        self.find_by_id(reference)
            .or_else(|| self.find_by_name(reference))
    }

    pub fn name_of(&self, id: &QuestId) -> Option<&str> {
        self.get(id).map(|definition| definition.name.as_str())
    }
}
