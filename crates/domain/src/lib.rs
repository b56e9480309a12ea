//! IronPath domain vocabulary.
//!
//! Pure data and arithmetic: quest ids, skills, the quest registry, route
//! rows, plan steps, readiness rows, and the experience table. Nothing in this
//! crate performs IO or logging.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    wiki_url_for, InfoStep, PlanSnapshot, PlanStep, QuestBlocker, QuestDefinition, QuestEntry,
    QuestFact, QuestFacts, QuestReadiness, QuestRegistry, QuestRow, QuestStep, RouteStep, SpineStep, StepType, TrainStep,
};

pub use error::DomainError;

pub use ids::QuestId;

pub use value_objects::{
    xp_table, AchievementTier, Counter, DiaryRegion, QuestState, Skill, TUTORIAL_COMPLETE_VALUE,
};
