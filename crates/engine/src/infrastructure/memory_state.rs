//! In-memory live-state adapter.
//!
//! Backs the live-state port with a plain snapshot. Hosts that poll their
//! client can fill one per tick; tests deserialize one from JSON.

use std::collections::BTreeMap;

use ironpath_domain::{Counter, QuestId, QuestState, Skill};
use serde::{Deserialize, Serialize};

use super::ports::{LiveStateError, LiveStatePort};

/// A counter reading in a snapshot document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterValue {
    pub counter: Counter,
    pub value: i64,
}

/// Snapshot of a character's live state.
///
/// Quests missing from the snapshot read as not started, skills as level 1
/// and counters as 0. An offline snapshot fails every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryLiveState {
    #[serde(default)]
    quests: BTreeMap<QuestId, QuestState>,
    #[serde(default)]
    skills: BTreeMap<Skill, i32>,
    #[serde(default)]
    counters: Vec<CounterValue>,
    #[serde(default)]
    offline: bool,
}

impl InMemoryLiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot for a host with no character loaded.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_quest(mut self, quest: QuestId, state: QuestState) -> Self {
        self.quests.insert(quest, state);
        self
    }

    pub fn with_skill(mut self, skill: Skill, level: i32) -> Self {
        self.skills.insert(skill, level);
        self
    }

    pub fn with_counter(mut self, counter: Counter, value: i64) -> Self {
        self.counters.retain(|existing| existing.counter != counter);
        self.counters.push(CounterValue { counter, value });
        self
    }

    fn ensure_online(&self) -> Result<(), LiveStateError> {
        if self.offline {
            return Err(LiveStateError::Unavailable);
        }
        Ok(())
    }
}

impl LiveStatePort for InMemoryLiveState {
    fn quest_state(&self, quest: &QuestId) -> Result<QuestState, LiveStateError> {
        self.ensure_online()?;
        Ok(self.quests.get(quest).copied().unwrap_or_default())
    }

    fn skill_level(&self, skill: Skill) -> Result<i32, LiveStateError> {
        self.ensure_online()?;
        Ok(self.skills.get(&skill).copied().unwrap_or(1))
    }

    fn counter(&self, counter: Counter) -> Result<i64, LiveStateError> {
        self.ensure_online()?;
        Ok(self
            .counters
            .iter()
            .find(|reading| reading.counter == counter)
            .map(|reading| reading.value)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use ironpath_domain::{AchievementTier, DiaryRegion};

    use super::*;

    #[test]
    fn when_snapshot_is_empty_then_reads_are_baseline() {
        let state = InMemoryLiveState::new();
        let quest = QuestId::new("COOKS_ASSISTANT").expect("id");

        assert_eq!(state.quest_state(&quest), Ok(QuestState::NotStarted));
        assert_eq!(state.skill_level(Skill::Magic), Ok(1));
        assert_eq!(state.counter(Counter::TutorialProgress), Ok(0));
    }

    #[test]
    fn when_offline_then_every_read_fails() {
        let state = InMemoryLiveState::offline();
        assert_eq!(
            state.skill_level(Skill::Magic),
            Err(LiveStateError::Unavailable)
        );
    }

    #[test]
    fn when_deserialized_from_json_then_values_are_read() {
        let state: InMemoryLiveState = serde_json::from_str(
            r#"{
                "quests": {"COOKS_ASSISTANT": "FINISHED"},
                "skills": {"ATTACK": 5},
                "counters": [
                    {"counter": {"kind": "diary_tier", "region": "varrock", "tier": "easy"}, "value": 1}
                ]
            }"#,
        )
        .expect("snapshot");

        let quest = QuestId::new("COOKS_ASSISTANT").expect("id");
        assert_eq!(state.quest_state(&quest), Ok(QuestState::Finished));
        assert_eq!(state.skill_level(Skill::Attack), Ok(5));
        let diary = Counter::DiaryTier {
            region: DiaryRegion::Varrock,
            tier: AchievementTier::Easy,
        };
        assert_eq!(state.counter(diary), Ok(1));
    }

    #[test]
    fn when_counter_is_set_twice_then_last_value_wins() {
        let state = InMemoryLiveState::new()
            .with_counter(Counter::TutorialProgress, 10)
            .with_counter(Counter::TutorialProgress, 1000);
        assert_eq!(state.counter(Counter::TutorialProgress), Ok(1000));
    }
}
