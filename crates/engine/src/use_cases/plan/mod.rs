//! Plan step building.
//!
//! Walks the spine in order against live state and emits the next pending
//! steps, capped at a requested count. Every emitted step keeps the absolute
//! spine index of the row it came from.

mod lamp;

use std::sync::Arc;

use ironpath_domain::{wiki_url_for, InfoStep, PlanStep, RouteStep, SpineStep, StepType};

use crate::entities::{LiveState, PlannerData};
use crate::use_cases::completion::CompletionHeuristics;
use crate::use_cases::quest_entries::QuestEntryBuilder;

pub use lamp::{extract_lamp_instruction, LAMP_STEP_TITLE};

/// Capped accumulator of emitted steps.
pub(crate) struct PlanBuffer {
    steps: Vec<SpineStep>,
    max_steps: usize,
    spine_total: usize,
}

impl PlanBuffer {
    pub(crate) fn new(max_steps: usize, spine_total: usize) -> Self {
        Self {
            steps: Vec::with_capacity(max_steps.min(spine_total)),
            max_steps,
            spine_total,
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.steps.len() >= self.max_steps
    }

    /// Returns `false` when the cap was already reached.
    pub(crate) fn push(&mut self, step: PlanStep, spine_index: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.steps
            .push(SpineStep::new(step, spine_index, self.spine_total));
        true
    }

    /// Push an informational step, plus a lamp follow-up when the rationale
    /// carries a lamp instruction and there is room for it.
    pub(crate) fn push_milestone(&mut self, step: &RouteStep, rationale: String, spine_index: usize) {
        let lamp = extract_lamp_instruction(&rationale).map(str::to_string);

        let mut info = InfoStep::new(step.step_type(), step.title(), Some(rationale));
        if step.step_type() == StepType::Miniquest {
            info.wiki_url = Some(wiki_url_for(&info.title));
        }
        if !self.push(PlanStep::Info(info), spine_index) {
            return;
        }

        if let Some(instruction) = lamp {
            self.push(
                PlanStep::info(StepType::Lamp, LAMP_STEP_TITLE, Some(instruction)),
                spine_index,
            );
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    pub(crate) fn into_steps(self) -> Vec<SpineStep> {
        self.steps
    }
}

/// Builds the pending step list from live state.
pub struct ComputePlanSteps {
    data: Arc<PlannerData>,
    live: LiveState,
    completion: CompletionHeuristics,
}

impl ComputePlanSteps {
    pub fn new(data: Arc<PlannerData>, live: LiveState) -> Self {
        let completion = CompletionHeuristics::new(live.clone());
        Self {
            data,
            live,
            completion,
        }
    }

    /// Compute at most `max_steps` pending steps from `spine`.
    ///
    /// Finished quests, reached training targets and milestones the completion
    /// heuristics can verify are skipped and never count toward the cap.
    pub fn execute(&self, spine: &[RouteStep], max_steps: usize) -> Vec<SpineStep> {
        let mut buffer = PlanBuffer::new(max_steps, spine.len());
        let entries = QuestEntryBuilder::new(&self.data.registry, &self.data.facts);

        for (index, step) in spine.iter().enumerate() {
            if buffer.is_full() {
                break;
            }
            if !step.is_structurally_valid() {
                continue;
            }

            match step.step_type() {
                StepType::Quest => {
                    let Some(quest) = step.quest() else {
                        continue;
                    };
                    let state = self.live.quest_state(quest);
                    if state.is_finished() {
                        continue;
                    }
                    if let Some(entry) = entries.entry_for(step) {
                        buffer.push(PlanStep::quest(entry, state), index);
                    }
                }
                StepType::Train => {
                    let (Some(skill), Some(target)) = (step.skill(), step.to_level()) else {
                        continue;
                    };
                    let have = self.live.skill_level(skill);
                    if have >= target {
                        continue;
                    }
                    buffer.push(
                        PlanStep::train(skill, have, target, Some(entries.rationale_for(step))),
                        index,
                    );
                }
                other => {
                    if other == StepType::Miniquest {
                        let finished = step
                            .quest()
                            .is_some_and(|quest| self.live.quest_state(quest).is_finished());
                        if finished {
                            continue;
                        }
                    }
                    if self.completion.is_complete(step) {
                        continue;
                    }
                    buffer.push_milestone(step, entries.rationale_for(step), index);
                }
            }
        }

        tracing::debug!(
            spine = spine.len(),
            max_steps,
            emitted = buffer.len(),
            "Plan steps computed"
        );
        buffer.into_steps()
    }
}
