//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! Fixtures live in the crate's `test_data/` directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{fixture_planner_data, quest_step};
//!
//! #[test]
//! fn test_route_loads() {
//!     let data = fixture_planner_data();
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

use ironpath_domain::{QuestDefinition, QuestId, QuestRegistry, RouteStep, StepType};

use crate::entities::PlannerData;
use crate::infrastructure::documents::{
    QuestDefinitionDocument, QuestFactsDocument, QuestFactsLoader, QuestRegistryLoader,
    RouteDocument, RouteSpineLoader,
};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Planner data built from the `test_data/` registry, route and facts.
pub fn fixture_planner_data() -> PlannerData {
    let registry =
        QuestRegistryLoader::from_rows(load_fixture::<Vec<QuestDefinitionDocument>>("quests.json"));
    let spine = RouteSpineLoader::new(&registry)
        .from_rows(load_fixture::<RouteDocument>("route.json"));
    let facts = QuestFactsLoader::new(&registry)
        .from_document(load_fixture::<QuestFactsDocument>("quest_facts.json"));

    PlannerData {
        spine: spine.steps,
        spine_report: spine.report,
        facts,
        registry,
    }
}

// =============================================================================
// Builders
// =============================================================================

pub fn quest_id(raw: &str) -> QuestId {
    QuestId::new(raw).expect("valid quest id")
}

/// A quest row named after its spaced id.
pub fn quest_step(id: &str, why: Option<&str>) -> RouteStep {
    let quest = quest_id(id);
    let name = quest.spaced();
    RouteStep::quest_row(StepType::Quest, quest, name, why.map(str::to_string))
}

/// Small registry-only planner data; spine and facts are empty.
pub fn planner_data() -> PlannerData {
    PlannerData::new(
        QuestRegistry::new([
            QuestDefinition::new(quest_id("Q1"), "Q1"),
            QuestDefinition::new(quest_id("WATERFALL_QUEST"), "Waterfall Quest"),
            QuestDefinition::new(quest_id("ENTER_THE_ABYSS"), "Enter the Abyss"),
            QuestDefinition::new(quest_id("DRUIDIC_RITUAL"), "Druidic Ritual"),
        ]),
        Vec::new(),
        Default::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_route_loads_with_expected_report() {
        let data = fixture_planner_data();

        assert_eq!(data.registry.len(), 8);
        assert_eq!(data.spine.len(), 12);
        assert_eq!(data.spine_report.dropped_malformed, 0);
        assert_eq!(data.spine_report.dropped_duplicate, 1);
        assert_eq!(data.spine_report.dropped_invalid_train, 1);
        assert_eq!(data.spine_report.dropped_unknown_type, 1);
        assert_eq!(data.spine_report.degraded_unresolved, 1);
        assert_eq!(data.facts.len(), 5);
        assert_eq!(data.facts.unresolved_keys(), 1);
        assert_eq!(data.facts.malformed_entries(), 0);
    }
}
