//! Route spine loading.
//!
//! Turns the authored route rows into immutable [`RouteStep`]s. Quest rows
//! resolve against the registry; rows that cannot be planned are dropped
//! here so evaluation never has to second-guess the spine.

use std::collections::HashSet;
use std::path::Path;

use ironpath_domain::common::{none_if_blank, StringExt};
use ironpath_domain::{QuestDefinition, QuestId, QuestRegistry, RouteStep, Skill, StepType};

use super::{parse_skill_levels, parse_tags, read_document, RouteDocument, RouteStepDocument};

/// Counts of what happened to each row during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpineLoadReport {
    pub loaded: usize,
    /// Rows whose fields did not decode (e.g. a string `toLevel`)
    pub dropped_malformed: usize,
    pub dropped_unknown_type: usize,
    pub dropped_duplicate: usize,
    pub dropped_invalid_train: usize,
    /// Quest rows kept as unresolved notes
    pub degraded_unresolved: usize,
}

impl SpineLoadReport {
    pub fn dropped(&self) -> usize {
        self.dropped_malformed
            + self.dropped_unknown_type
            + self.dropped_duplicate
            + self.dropped_invalid_train
    }
}

/// A loaded spine with its load report.
#[derive(Debug, Clone, Default)]
pub struct LoadedSpine {
    pub steps: Vec<RouteStep>,
    pub report: SpineLoadReport,
}

/// Loads the route spine against a quest registry.
pub struct RouteSpineLoader<'a> {
    registry: &'a QuestRegistry,
}

impl<'a> RouteSpineLoader<'a> {
    pub fn new(registry: &'a QuestRegistry) -> Self {
        Self { registry }
    }

    /// Parse a route document. Malformed JSON yields an empty spine; a
    /// malformed row is dropped on its own.
    pub fn load_str(&self, json: &str) -> LoadedSpine {
        match serde_json::from_str::<RouteDocument>(json) {
            Ok(rows) => self.from_rows(rows),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse route, using empty spine");
                LoadedSpine::default()
            }
        }
    }

    pub fn load_path(&self, path: &Path) -> LoadedSpine {
        match read_document::<RouteDocument>(path) {
            Ok(rows) => self.from_rows(rows),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to load route, using empty spine"
                );
                LoadedSpine::default()
            }
        }
    }

    pub fn from_rows(&self, rows: RouteDocument) -> LoadedSpine {
        let mut report = SpineLoadReport::default();
        let mut placed: HashSet<QuestId> = HashSet::new();
        let mut steps = Vec::with_capacity(rows.len());

        for (index, value) in rows.into_iter().enumerate() {
            let row = match serde_json::from_value::<RouteStepDocument>(value) {
                Ok(row) => row,
                Err(e) => {
                    tracing::debug!(index, error = %e, "Dropping malformed route row");
                    report.dropped_malformed += 1;
                    continue;
                }
            };
            if let Some(step) = self.convert_row(index, row, &mut placed, &mut report) {
                steps.push(step);
            }
        }
        report.loaded = steps.len();

        if report.dropped() > 0 || report.degraded_unresolved > 0 {
            tracing::warn!(
                loaded = report.loaded,
                dropped_malformed = report.dropped_malformed,
                dropped_unknown_type = report.dropped_unknown_type,
                dropped_duplicate = report.dropped_duplicate,
                dropped_invalid_train = report.dropped_invalid_train,
                degraded_unresolved = report.degraded_unresolved,
                "Route loaded with skipped rows"
            );
        } else {
            tracing::debug!(loaded = report.loaded, "Route loaded");
        }

        LoadedSpine { steps, report }
    }

    fn convert_row(
        &self,
        index: usize,
        row: RouteStepDocument,
        placed: &mut HashSet<QuestId>,
        report: &mut SpineLoadReport,
    ) -> Option<RouteStep> {
        let step_type = match row.step_type.as_deref().map(str::parse::<StepType>) {
            Some(Ok(step_type)) => step_type,
            _ => {
                tracing::debug!(index, step_type = ?row.step_type, "Dropping row with unknown type");
                report.dropped_unknown_type += 1;
                return None;
            }
        };

        let display_name = row.display_name.trimmed_non_blank();
        let why = row.why.trimmed_non_blank();
        let tags = parse_tags(row.tags);
        let min_skills = parse_skill_levels(row.min_skills);

        let step = match step_type {
            StepType::Quest | StepType::Miniquest => {
                let Some(definition) =
                    self.resolve_quest(row.quest.as_deref(), display_name.as_deref())
                else {
                    tracing::debug!(index, quest = ?row.quest, "Unresolved quest row kept as note");
                    report.degraded_unresolved += 1;
                    return Some(RouteStep::unresolved(display_name, why));
                };
                if !placed.insert(definition.id.clone()) {
                    tracing::debug!(index, quest = %definition.id, "Dropping duplicate quest row");
                    report.dropped_duplicate += 1;
                    return None;
                }
                let name = display_name.unwrap_or_else(|| definition.name.clone());
                RouteStep::quest_row(step_type, definition.id.clone(), name, why)
            }
            StepType::Train => {
                let skill = row.skill.as_deref().and_then(|s| s.parse::<Skill>().ok());
                let to_level = row
                    .to_level
                    .filter(|level| *level >= 1)
                    .and_then(|level| i32::try_from(level).ok());
                match (skill, to_level) {
                    (Some(skill), Some(to_level)) => {
                        RouteStep::train(skill, to_level, display_name, why)
                    }
                    _ => {
                        tracing::debug!(index, skill = ?row.skill, to_level = ?row.to_level, "Dropping invalid train row");
                        report.dropped_invalid_train += 1;
                        return None;
                    }
                }
            }
            other => RouteStep::milestone(other, display_name, why),
        };

        Some(step.with_tags(tags).with_min_skills(min_skills))
    }

    /// Quest reference first (exact id, then normalized name), then the display name.
    fn resolve_quest(
        &self,
        reference: Option<&str>,
        display_name: Option<&str>,
    ) -> Option<&'a QuestDefinition> {
        reference
            .and_then(none_if_blank)
            .and_then(|reference| self.registry.resolve(reference))
            .or_else(|| display_name.and_then(|name| self.registry.find_by_name(name)))
    }
}
