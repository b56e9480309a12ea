//! IronPath Engine library.
//!
//! Computes an ordered progression plan and a readiness snapshot from a
//! hand-authored route and the character's live state.
//!
//! ## Structure
//!
//! - `entities/` - Wrappers over ports and the loaded planner data
//! - `use_cases/` - Plan building, readiness scoring, simulation
//! - `infrastructure/` - Document loaders, settings, live-state ports and adapters
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
