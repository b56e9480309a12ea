use ironpath_domain::{Counter, QuestId, QuestState, Skill};

use super::error::LiveStateError;

/// Synchronous read access to the character's live state.
///
/// Reads are expected to be cheap and non-blocking; the engine calls them on
/// every plan build and never caches the answers.
#[cfg_attr(test, mockall::automock)]
pub trait LiveStatePort: Send + Sync {
    fn quest_state(&self, quest: &QuestId) -> Result<QuestState, LiveStateError>;

    /// Current (boosted-free) level.
    fn skill_level(&self, skill: Skill) -> Result<i32, LiveStateError>;

    fn counter(&self, counter: Counter) -> Result<i64, LiveStateError>;
}
