//! Quest entry - one quest as seen by planning and readiness scoring.
//!
//! Entries are assembled per evaluation from a route row and the quest facts;
//! they are never cached between calls.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{QuestId, Skill};

const WIKI_BASE_URL: &str = "https://oldschool.runescape.wiki/w/";

/// Wiki page for a quest display name.
pub fn wiki_url_for(name: &str) -> String {
    format!("{}{}", WIKI_BASE_URL, name.trim().replace(' ', "_"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestEntry {
    /// Canonical id; `None` only for legacy name-only entries
    pub quest_id: Option<QuestId>,
    pub name: String,
    /// Short rationale shown next to the quest
    pub why: Option<String>,
    pub wiki_url: Option<String>,
    /// Minimum tracked skill requirements (subset)
    pub min_skills: BTreeMap<Skill, i32>,
    /// Tracked prerequisite quests by display name (subset)
    pub prerequisite_quests: Vec<String>,
    /// Experience granted on completion (subset)
    pub xp_rewards: BTreeMap<Skill, i64>,
    /// Tags used for scoring and grouping
    pub tags: BTreeSet<String>,
}

impl QuestEntry {
    pub fn new(quest_id: Option<QuestId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            quest_id,
            wiki_url: Some(wiki_url_for(&name)),
            name,
            why: None,
            min_skills: BTreeMap::new(),
            prerequisite_quests: Vec::new(),
            xp_rewards: BTreeMap::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_why(mut self, why: Option<String>) -> Self {
        self.why = why;
        self
    }

    pub fn with_min_skill(mut self, skill: Skill, level: i32) -> Self {
        self.min_skills.insert(skill, level);
        self
    }

    pub fn with_prerequisite(mut self, quest_name: impl Into<String>) -> Self {
        self.prerequisite_quests.push(quest_name.into());
        self
    }

    pub fn with_xp_reward(mut self, skill: Skill, xp: i64) -> Self {
        self.xp_rewards.insert(skill, xp);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
