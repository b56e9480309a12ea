//! Value objects - Immutable objects defined by their attributes

mod counter;
mod quest_state;
mod skill;
pub mod xp_table;

pub use counter::{AchievementTier, Counter, DiaryRegion, TUTORIAL_COMPLETE_VALUE};
pub use quest_state::QuestState;
pub use skill::Skill;
