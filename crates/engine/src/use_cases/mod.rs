//! Use cases - planner operations.
//!
//! Each module orchestrates the loaded planner data and the live state to
//! answer one question for the presentation layer.

pub mod completion;
pub mod plan;
pub mod quest_entries;
pub mod readiness;
pub mod simulation;

pub use completion::{detect_counter, CompletionHeuristics};
pub use plan::{extract_lamp_instruction, ComputePlanSteps};
pub use quest_entries::{fallback_rationale, QuestEntryBuilder};
pub use readiness::ComputeReadinessSnapshot;
pub use simulation::SimulatedPlanSteps;
