//! Application state and composition.

use std::sync::Arc;

use ironpath_domain::{PlanSnapshot, QuestEntry, SpineStep};

use crate::entities::{LiveState, PlannerData};
use crate::infrastructure::ports::LiveStatePort;
use crate::infrastructure::settings::EngineSettings;
use crate::use_cases::{
    ComputePlanSteps, ComputeReadinessSnapshot, QuestEntryBuilder, SimulatedPlanSteps,
};

/// Main application state.
///
/// Built once at startup from the loaded documents and a live-state adapter.
/// Every call recomputes from live state; nothing is cached between calls.
pub struct App {
    pub data: Arc<PlannerData>,
    pub settings: EngineSettings,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub plan: ComputePlanSteps,
    pub readiness: ComputeReadinessSnapshot,
    pub simulation: SimulatedPlanSteps,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        data: Arc<PlannerData>,
        live_state: Arc<dyn LiveStatePort>,
        settings: EngineSettings,
    ) -> Self {
        let live = LiveState::new(live_state);
        let use_cases = UseCases {
            plan: ComputePlanSteps::new(data.clone(), live.clone()),
            readiness: ComputeReadinessSnapshot::new(data.clone(), live.clone()),
            simulation: SimulatedPlanSteps::new(data.clone(), live),
        };

        tracing::info!(
            spine = data.spine.len(),
            max_steps = settings.max_steps,
            simulation = settings.simulation.enabled,
            "IronPath engine ready"
        );

        Self {
            data,
            settings,
            use_cases,
        }
    }

    /// Load the documents named in `settings` and wire up the App.
    pub fn from_settings(settings: EngineSettings, live_state: Arc<dyn LiveStatePort>) -> Self {
        let data = Arc::new(PlannerData::load(&settings));
        Self::new(data, live_state, settings)
    }

    /// Next steps along the loaded spine, capped at `settings.max_steps`.
    pub fn plan_steps(&self) -> Vec<SpineStep> {
        self.plan_steps_with_limit(self.settings.max_steps)
    }

    /// Next steps along the loaded spine with an explicit cap.
    ///
    /// Uses the forward simulation only when it is enabled in settings.
    pub fn plan_steps_with_limit(&self, max_steps: usize) -> Vec<SpineStep> {
        let simulation = self.settings.simulation;
        if simulation.enabled {
            self.use_cases.simulation.execute(
                &self.data.spine,
                max_steps,
                simulation.max_level_delta_per_step,
            )
        } else {
            self.use_cases.plan.execute(&self.data.spine, max_steps)
        }
    }

    /// Readiness snapshot for an arbitrary entry list.
    pub fn readiness_snapshot(&self, entries: &[QuestEntry]) -> PlanSnapshot {
        self.use_cases.readiness.execute(entries)
    }

    /// Quest entries for every quest row in the loaded spine.
    pub fn route_entries(&self) -> Vec<QuestEntry> {
        QuestEntryBuilder::new(&self.data.registry, &self.data.facts)
            .entries_for_spine(&self.data.spine)
    }

    /// Readiness snapshot for the quests on the loaded spine.
    pub fn route_readiness_snapshot(&self) -> PlanSnapshot {
        self.readiness_snapshot(&self.route_entries())
    }
}
