//! Entity modules - Domain capability encapsulation.
//!
//! `LiveState` wraps the live-state port with conservative fallbacks;
//! `PlannerData` is the immutable snapshot loaded once at startup.

pub mod live_state;
pub mod planner_data;

pub use live_state::LiveState;
pub use planner_data::PlannerData;
