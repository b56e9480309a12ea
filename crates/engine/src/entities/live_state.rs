//! Live state entity module.
//!
//! Every read answers: a port error turns into the value that means
//! "more work remains" (not started, level 1, counter 0).

use std::sync::Arc;

use ironpath_domain::{Counter, QuestId, QuestRegistry, QuestState, Skill};

use crate::infrastructure::ports::LiveStatePort;

/// Lowest level a skill can have.
pub const MIN_SKILL_LEVEL: i32 = 1;

/// Fail-soft reads over the live-state port.
#[derive(Clone)]
pub struct LiveState {
    port: Arc<dyn LiveStatePort>,
}

impl LiveState {
    pub fn new(port: Arc<dyn LiveStatePort>) -> Self {
        Self { port }
    }

    pub fn quest_state(&self, quest: &QuestId) -> QuestState {
        self.port.quest_state(quest).unwrap_or_else(|e| {
            tracing::debug!(error = %e, quest = %quest, "Quest state read failed, assuming not started");
            QuestState::NotStarted
        })
    }

    /// Quest state by display name; names the registry does not know read as not started.
    pub fn quest_state_by_name(&self, registry: &QuestRegistry, name: &str) -> QuestState {
        match registry.resolve(name) {
            Some(definition) => self.quest_state(&definition.id),
            None => {
                tracing::debug!(quest = %name, "Unknown quest name, assuming not started");
                QuestState::NotStarted
            }
        }
    }

    /// Current level, never below 1.
    pub fn skill_level(&self, skill: Skill) -> i32 {
        self.port
            .skill_level(skill)
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, skill = %skill, "Skill level read failed, assuming level 1");
                MIN_SKILL_LEVEL
            })
            .max(MIN_SKILL_LEVEL)
    }

    pub fn counter(&self, counter: Counter) -> i64 {
        self.port.counter(counter).unwrap_or_else(|e| {
            tracing::debug!(error = %e, counter = ?counter, "Counter read failed, assuming 0");
            0
        })
    }
}

#[cfg(test)]
mod tests {
    use ironpath_domain::QuestDefinition;

    use super::*;
    use crate::infrastructure::ports::{LiveStateError, MockLiveStatePort};

    fn quest_id(raw: &str) -> QuestId {
        QuestId::new(raw).expect("valid id")
    }

    #[test]
    fn when_port_fails_then_reads_are_conservative() {
        let mut port = MockLiveStatePort::new();
        port.expect_quest_state()
            .returning(|_| Err(LiveStateError::Unavailable));
        port.expect_skill_level()
            .returning(|_| Err(LiveStateError::read("skill", "client not ready")));
        port.expect_counter()
            .returning(|_| Err(LiveStateError::Unavailable));

        let live = LiveState::new(Arc::new(port));

        assert_eq!(live.quest_state(&quest_id("COOKS_ASSISTANT")), QuestState::NotStarted);
        assert_eq!(live.skill_level(Skill::Attack), 1);
        assert_eq!(live.counter(Counter::TutorialProgress), 0);
    }

    #[test]
    fn when_port_reports_level_zero_then_level_is_floored() {
        let mut port = MockLiveStatePort::new();
        port.expect_skill_level().returning(|_| Ok(0));

        let live = LiveState::new(Arc::new(port));
        assert_eq!(live.skill_level(Skill::Hitpoints), 1);
    }

    #[test]
    fn when_name_resolves_then_state_is_read_by_id() {
        let registry = QuestRegistry::new([QuestDefinition::new(
            quest_id("DRUIDIC_RITUAL"),
            "Druidic Ritual",
        )]);
        let mut port = MockLiveStatePort::new();
        port.expect_quest_state()
            .withf(|quest| quest.as_str() == "DRUIDIC_RITUAL")
            .times(1)
            .returning(|_| Ok(QuestState::Finished));

        let live = LiveState::new(Arc::new(port));

        assert_eq!(
            live.quest_state_by_name(&registry, "druidic ritual"),
            QuestState::Finished
        );
        assert_eq!(
            live.quest_state_by_name(&registry, "Legends' Quest"),
            QuestState::NotStarted
        );
    }
}
