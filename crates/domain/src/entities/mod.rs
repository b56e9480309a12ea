//! Entities - route rows, quest entries, plan steps, and readiness rows.

mod plan_step;
mod quest;
mod quest_entry;
mod quest_facts;
mod readiness;
mod route_step;

pub use plan_step::{InfoStep, PlanStep, QuestStep, SpineStep, TrainStep};
pub use quest::{QuestDefinition, QuestRegistry};
pub use quest_entry::{wiki_url_for, QuestEntry};
pub use quest_facts::{QuestFact, QuestFacts};
pub use readiness::{PlanSnapshot, QuestBlocker, QuestReadiness, QuestRow};
pub use route_step::{RouteStep, StepType};
