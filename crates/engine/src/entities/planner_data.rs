//! Planner data entity module.
//!
//! The registry, spine and facts are loaded once and shared read-only by
//! every engine call.

use ironpath_domain::{QuestFacts, QuestRegistry, RouteStep};

use crate::infrastructure::documents::{
    QuestFactsLoader, QuestRegistryLoader, RouteSpineLoader, SpineLoadReport,
};
use crate::infrastructure::settings::EngineSettings;

/// Immutable snapshot of the loaded documents.
#[derive(Debug, Clone, Default)]
pub struct PlannerData {
    pub registry: QuestRegistry,
    pub spine: Vec<RouteStep>,
    pub facts: QuestFacts,
    pub spine_report: SpineLoadReport,
}

impl PlannerData {
    pub fn new(registry: QuestRegistry, spine: Vec<RouteStep>, facts: QuestFacts) -> Self {
        let spine_report = SpineLoadReport {
            loaded: spine.len(),
            ..SpineLoadReport::default()
        };
        Self {
            registry,
            spine,
            facts,
            spine_report,
        }
    }

    /// Load from JSON strings (bundled resources).
    pub fn from_documents(registry_json: &str, route_json: &str, facts_json: &str) -> Self {
        let registry = QuestRegistryLoader::load_str(registry_json);
        let spine = RouteSpineLoader::new(&registry).load_str(route_json);
        let facts = QuestFactsLoader::new(&registry).load_str(facts_json);
        Self {
            spine: spine.steps,
            spine_report: spine.report,
            facts,
            registry,
        }
    }

    /// Load from the paths in `settings`. A missing path yields empty data.
    pub fn load(settings: &EngineSettings) -> Self {
        let registry = match settings.registry_path.as_deref() {
            Some(path) => QuestRegistryLoader::load_path(path),
            None => {
                tracing::warn!("No quest registry path configured, using empty registry");
                QuestRegistry::default()
            }
        };
        let spine = match settings.route_path.as_deref() {
            Some(path) => RouteSpineLoader::new(&registry).load_path(path),
            None => {
                tracing::warn!("No route path configured, using empty spine");
                Default::default()
            }
        };
        let facts = match settings.facts_path.as_deref() {
            Some(path) => QuestFactsLoader::new(&registry).load_path(path),
            None => {
                tracing::warn!("No quest facts path configured, using empty facts");
                QuestFacts::default()
            }
        };

        tracing::info!(
            quests = registry.len(),
            spine = spine.steps.len(),
            facts = facts.len(),
            "Planner data loaded"
        );

        Self {
            spine: spine.steps,
            spine_report: spine.report,
            facts,
            registry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_paths_are_missing_then_data_is_empty() {
        let data = PlannerData::load(&EngineSettings::default());
        assert!(data.registry.is_empty());
        assert!(data.spine.is_empty());
        assert!(data.facts.is_empty());
    }

    #[test]
    fn when_documents_are_given_then_spine_resolves_against_registry() {
        let data = PlannerData::from_documents(
            r#"[{"id": "COOKS_ASSISTANT", "name": "Cook's Assistant"}]"#,
            r#"[{"type": "QUEST", "quest": "Cook's Assistant"}, {"type": "QUEST", "quest": "X"}]"#,
            r#"{"COOKS_ASSISTANT": {"why": "Cooking."}}"#,
        );

        assert_eq!(data.spine.len(), 2);
        assert_eq!(data.spine_report.degraded_unresolved, 1);
        assert_eq!(data.facts.len(), 1);
    }

    #[test]
    fn when_paths_point_at_files_then_they_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = dir.path().join("quests.json");
        let route = dir.path().join("route.json");
        let facts = dir.path().join("facts.json");
        std::fs::write(&registry, r#"[{"id": "RUNE_MYSTERIES", "name": "Rune Mysteries"}]"#)
            .expect("write");
        std::fs::write(&route, r#"[{"type": "QUEST", "quest": "RUNE_MYSTERIES"}]"#)
            .expect("write");
        std::fs::write(&facts, "{}").expect("write");

        let settings = EngineSettings {
            registry_path: Some(registry),
            route_path: Some(route),
            facts_path: Some(facts),
            ..EngineSettings::default()
        };
        let data = PlannerData::load(&settings);

        assert_eq!(data.registry.len(), 1);
        assert_eq!(data.spine.len(), 1);
    }
}
