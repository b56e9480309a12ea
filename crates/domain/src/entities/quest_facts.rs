//! Quest facts - per-quest metadata kept apart from the route order.
//!
//! The route decides *when* a quest is done; the facts say what it needs and
//! what it gives: skill gates, experience rewards, tags, and a rationale.
//! Quests without facts read as empty defaults, never as errors.

use std::collections::{BTreeMap, BTreeSet};

use crate::{QuestId, Skill};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestFact {
    pub min_skills: BTreeMap<Skill, i32>,
    pub xp_rewards: BTreeMap<Skill, i64>,
    pub tags: BTreeSet<String>,
    pub why: Option<String>,
    /// Prerequisite quests by display name
    pub prerequisites: Vec<String>,
}

static EMPTY_FACT: QuestFact = QuestFact {
    min_skills: BTreeMap::new(),
    xp_rewards: BTreeMap::new(),
    tags: BTreeSet::new(),
    why: None,
    prerequisites: Vec::new(),
};

/// Read-only quest facts lookup.
#[derive(Debug, Clone, Default)]
pub struct QuestFacts {
    by_quest: BTreeMap<QuestId, QuestFact>,
    unresolved_keys: usize,
    malformed_entries: usize,
}

impl QuestFacts {
    /// `unresolved_keys` counts document keys that matched no quest.
    pub fn new(by_quest: BTreeMap<QuestId, QuestFact>, unresolved_keys: usize) -> Self {
        Self {
            by_quest,
            unresolved_keys,
            malformed_entries: 0,
        }
    }

    /// Records how many document entries were skipped because their values
    /// did not have the expected shape.
    pub fn with_malformed_entries(mut self, malformed_entries: usize) -> Self {
        self.malformed_entries = malformed_entries;
        self
    }

    pub fn len(&self) -> usize {
        self.by_quest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_quest.is_empty()
    }

    pub fn unresolved_keys(&self) -> usize {
        self.unresolved_keys
    }

    pub fn malformed_entries(&self) -> usize {
        self.malformed_entries
    }

    pub fn get(&self, quest: &QuestId) -> Option<&QuestFact> {
        self.by_quest.get(quest)
    }

    /// Facts for a quest, or the empty fact when none were authored.
    pub fn fact(&self, quest: &QuestId) -> &QuestFact {
        self.by_quest.get(quest).unwrap_or(&EMPTY_FACT)
    }

    pub fn min_skills(&self, quest: &QuestId) -> &BTreeMap<Skill, i32> {
        &self.fact(quest).min_skills
    }

    pub fn xp_rewards(&self, quest: &QuestId) -> &BTreeMap<Skill, i64> {
        &self.fact(quest).xp_rewards
    }

    pub fn tags(&self, quest: &QuestId) -> &BTreeSet<String> {
        &self.fact(quest).tags
    }

    pub fn why(&self, quest: &QuestId) -> Option<&str> {
        self.fact(quest).why.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_quest_reads_as_empty() {
        let facts = QuestFacts::default();
        let quest = QuestId::new("DRAGON_SLAYER_I").expect("id");
        assert!(facts.min_skills(&quest).is_empty());
        assert!(facts.xp_rewards(&quest).is_empty());
        assert!(facts.tags(&quest).is_empty());
        assert_eq!(facts.why(&quest), None);
    }

    #[test]
    fn test_lookup_returns_authored_fact() {
        let quest = QuestId::new("WATERFALL_QUEST").expect("id");
        let fact = QuestFact {
            xp_rewards: BTreeMap::from([(Skill::Attack, 13_750), (Skill::Strength, 13_750)]),
            why: Some("Huge early melee experience.".to_string()),
            ..QuestFact::default()
        };
        let facts = QuestFacts::new(BTreeMap::from([(quest.clone(), fact)]), 2);

        assert_eq!(facts.len(), 1);
        assert_eq!(facts.unresolved_keys(), 2);
        assert_eq!(facts.malformed_entries(), 0);
        assert_eq!(facts.clone().with_malformed_entries(3).malformed_entries(), 3);
        assert_eq!(facts.xp_rewards(&quest).get(&Skill::Attack), Some(&13_750));
        assert_eq!(facts.why(&quest), Some("Huge early melee experience."));
    }
}
