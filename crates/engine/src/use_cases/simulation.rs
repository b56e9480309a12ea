//! Forward simulation (opt-in).
//!
//! Plans ahead as if every emitted step were done: quests are marked
//! finished, their experience rewards raise simulated levels, and skill gates
//! the simulated character misses are met with chunked catch-up training.
//! Off by default; see `SimulationSettings`.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ironpath_domain::{
    xp_table, PlanStep, QuestId, QuestState, RouteStep, Skill, SpineStep, StepType, TrainStep,
};

use crate::entities::{LiveState, PlannerData};
use crate::use_cases::completion::CompletionHeuristics;
use crate::use_cases::plan::PlanBuffer;
use crate::use_cases::quest_entries::QuestEntryBuilder;

/// One round of catch-up training toward `requirements`.
///
/// Each deficient skill gets one step of at most `max_delta` levels (0 means
/// straight to the requirement). Largest step first, then skill name.
pub fn catch_up_round(
    requirements: &BTreeMap<Skill, i32>,
    level_of: impl Fn(Skill) -> i32,
    max_delta: u32,
    reason: &str,
) -> Vec<TrainStep> {
    let max_delta = i32::try_from(max_delta).unwrap_or(i32::MAX);
    let mut round: Vec<TrainStep> = requirements
        .iter()
        .filter_map(|(&skill, &need)| {
            let have = level_of(skill);
            if have >= need {
                return None;
            }
            let to_level = if max_delta > 0 {
                need.min(have.saturating_add(max_delta))
            } else {
                need
            };
            Some(TrainStep {
                skill,
                from_level: have,
                to_level,
                reason: Some(reason.to_string()),
            })
        })
        .collect();

    round.sort_by(|a, b| {
        (b.to_level - b.from_level)
            .cmp(&(a.to_level - a.from_level))
            .then_with(|| a.skill.key().cmp(b.skill.key()))
    });
    round
}

/// Simulated character: live state plus everything planned so far.
struct SimulatedState<'a> {
    live: &'a LiveState,
    finished: HashSet<QuestId>,
    levels: BTreeMap<Skill, i32>,
}

impl<'a> SimulatedState<'a> {
    fn new(live: &'a LiveState) -> Self {
        Self {
            live,
            finished: HashSet::new(),
            levels: BTreeMap::new(),
        }
    }

    fn quest_state(&self, quest: &QuestId) -> QuestState {
        if self.finished.contains(quest) {
            QuestState::Finished
        } else {
            self.live.quest_state(quest)
        }
    }

    fn level(&self, skill: Skill) -> i32 {
        self.levels
            .get(&skill)
            .copied()
            .unwrap_or_else(|| self.live.skill_level(skill))
    }

    fn raise(&mut self, skill: Skill, level: i32) {
        let current = self.level(skill);
        self.levels.insert(skill, current.max(level));
    }

    fn apply_reward(&mut self, skill: Skill, xp: i64) {
        let level = xp_table::level_after_reward(self.level(skill), xp);
        self.raise(skill, level);
    }
}

/// Plan builder that simulates progress along the spine.
pub struct SimulatedPlanSteps {
    data: Arc<PlannerData>,
    live: LiveState,
    completion: CompletionHeuristics,
}

impl SimulatedPlanSteps {
    pub fn new(data: Arc<PlannerData>, live: LiveState) -> Self {
        let completion = CompletionHeuristics::new(live.clone());
        Self {
            data,
            live,
            completion,
        }
    }

    /// Compute at most `max_steps` steps, inserting catch-up training of at
    /// most `max_level_delta_per_step` levels per step.
    pub fn execute(
        &self,
        spine: &[RouteStep],
        max_steps: usize,
        max_level_delta_per_step: u32,
    ) -> Vec<SpineStep> {
        let mut buffer = PlanBuffer::new(max_steps, spine.len());
        let entries = QuestEntryBuilder::new(&self.data.registry, &self.data.facts);
        let mut state = SimulatedState::new(&self.live);

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
                    let quest_state = state.quest_state(quest);
                    if quest_state.is_finished() {
                        continue;
                    }
                    let Some(entry) = entries.entry_for(step) else {
                        continue;
                    };

                    let reason = format!("Required for {}.", entry.name);
                    if !self.catch_up(
                        &mut buffer,
                        &mut state,
                        &entry.min_skills,
                        max_level_delta_per_step,
                        &reason,
                        index,
                    ) {
                        break;
                    }

                    let rewards = entry.xp_rewards.clone();
                    if !buffer.push(PlanStep::quest(entry, quest_state), index) {
                        break;
                    }
                    state.finished.insert(quest.clone());
                    for (skill, xp) in rewards {
                        state.apply_reward(skill, xp);
                    }
                }
                StepType::Train => {
                    let (Some(skill), Some(target)) = (step.skill(), step.to_level()) else {
                        continue;
                    };
                    let requirement = BTreeMap::from([(skill, target)]);
                    let reason = entries.rationale_for(step);
                    if !self.catch_up(
                        &mut buffer,
                        &mut state,
                        &requirement,
                        max_level_delta_per_step,
                        &reason,
                        index,
                    ) {
                        break;
                    }
                }
                other => {
                    if other == StepType::Miniquest
                        && step
                            .quest()
                            .is_some_and(|quest| state.quest_state(quest).is_finished())
                    {
                        continue;
                    }
                    if self.completion.is_complete(step) {
                        continue;
                    }
                    buffer.push_milestone(step, entries.rationale_for(step), index);
                    if let Some(quest) = step.quest() {
                        state.finished.insert(quest.clone());
                    }
                }
            }
        }

        tracing::debug!(
            spine = spine.len(),
            max_steps,
            max_level_delta_per_step,
            emitted = buffer.len(),
            "Simulated plan steps computed"
        );
        buffer.into_steps()
    }

    /// Emit catch-up rounds until every requirement is met. Returns `false`
    /// once the cap stops emission.
    fn catch_up(
        &self,
        buffer: &mut PlanBuffer,
        state: &mut SimulatedState<'_>,
        requirements: &BTreeMap<Skill, i32>,
        max_delta: u32,
        reason: &str,
        index: usize,
    ) -> bool {
        loop {
            let round = catch_up_round(requirements, |skill| state.level(skill), max_delta, reason);
            if round.is_empty() {
                return true;
            }
            for train in round {
                let (skill, to_level) = (train.skill, train.to_level);
                if !buffer.push(PlanStep::Train(train), index) {
                    return false;
                }
                state.raise(skill, to_level);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ironpath_domain::{QuestFact, QuestFacts};

    use super::*;
    use crate::infrastructure::ports::MockLiveStatePort;
    use crate::test_fixtures::{planner_data, quest_id, quest_step};

    fn train_ranges(steps: &[SpineStep]) -> Vec<(Skill, i32, i32)> {
        steps
            .iter()
            .filter_map(|view| match &view.step {
                PlanStep::Train(train) => Some((train.skill, train.from_level, train.to_level)),
                _ => None,
            })
            .collect()
    }

    fn use_case(data: PlannerData, port: MockLiveStatePort) -> SimulatedPlanSteps {
        SimulatedPlanSteps::new(Arc::new(data), LiveState::new(Arc::new(port)))
    }

    #[test]
    fn catch_up_round_orders_by_largest_step_then_skill_name() {
        let requirements = BTreeMap::from([
            (Skill::Woodcutting, 20),
            (Skill::Agility, 3),
            (Skill::Crafting, 3),
            (Skill::Magic, 1),
        ]);
        let round = catch_up_round(&requirements, |_| 1, 5, "Required for X.");

        let ranges: Vec<(Skill, i32, i32)> = round
            .iter()
            .map(|t| (t.skill, t.from_level, t.to_level))
            .collect();
        assert_eq!(
            ranges,
            vec![
                (Skill::Woodcutting, 1, 6),
                (Skill::Agility, 1, 3),
                (Skill::Crafting, 1, 3),
            ]
        );
        assert_eq!(round[0].reason.as_deref(), Some("Required for X."));
    }

    #[test]
    fn catch_up_round_with_zero_delta_goes_straight_to_requirement() {
        let requirements = BTreeMap::from([(Skill::Woodcutting, 20)]);
        let round = catch_up_round(&requirements, |_| 1, 0, "r");
        assert_eq!((round[0].from_level, round[0].to_level), (1, 20));
    }

    #[test]
    fn when_quest_needs_levels_then_training_is_chunked_before_the_quest() {
        let quest = quest_id("WATERFALL_QUEST");
        let mut data = planner_data();
        data.facts = QuestFacts::new(
            BTreeMap::from([(
                quest.clone(),
                QuestFact {
                    min_skills: BTreeMap::from([(Skill::Agility, 12)]),
                    ..QuestFact::default()
                },
            )]),
            0,
        );
        let spine = vec![quest_step("WATERFALL_QUEST", None)];
        let mut port = MockLiveStatePort::new();
        port.expect_quest_state()
            .returning(|_| Ok(QuestState::NotStarted));
        port.expect_skill_level().returning(|_| Ok(1));

        let steps = use_case(data, port).execute(&spine, 10, 5);

        assert_eq!(
            train_ranges(&steps),
            vec![(Skill::Agility, 1, 6), (Skill::Agility, 6, 11), (Skill::Agility, 11, 12)]
        );
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3].step.step_type(), StepType::Quest);
        assert!(steps.iter().all(|view| view.spine_index == 0));
    }

    #[test]
    fn when_quest_rewards_experience_then_later_training_starts_higher() {
        let quest = quest_id("WATERFALL_QUEST");
        let mut data = planner_data();
        data.facts = QuestFacts::new(
            BTreeMap::from([(
                quest,
                QuestFact {
                    xp_rewards: BTreeMap::from([(Skill::Attack, 13_750)]),
                    ..QuestFact::default()
                },
            )]),
            0,
        );
        let spine = vec![
            quest_step("WATERFALL_QUEST", None),
            RouteStep::train(Skill::Attack, 40, None, None),
        ];
        let mut port = MockLiveStatePort::new();
        port.expect_quest_state()
            .returning(|_| Ok(QuestState::NotStarted));
        port.expect_skill_level().returning(|_| Ok(1));

        let steps = use_case(data, port).execute(&spine, 10, 0);

        // 13,750 xp from level 1 reaches level 30
        assert_eq!(train_ranges(&steps), vec![(Skill::Attack, 30, 40)]);
    }

    #[test]
    fn when_quest_repeats_across_rows_then_it_is_only_planned_once() {
        let spine = vec![
            quest_step("Q1", None),
            RouteStep::quest_row(StepType::Miniquest, quest_id("Q1"), "Q1", None),
        ];
        let mut port = MockLiveStatePort::new();
        port.expect_quest_state()
            .returning(|_| Ok(QuestState::NotStarted));

        let steps = use_case(planner_data(), port).execute(&spine, 10, 5);
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn when_cap_is_hit_during_catch_up_then_output_is_capped() {
        let spine = vec![RouteStep::train(Skill::Slayer, 50, None, None)];
        let mut port = MockLiveStatePort::new();
        port.expect_skill_level().returning(|_| Ok(1));

        let steps = use_case(planner_data(), port).execute(&spine, 3, 5);

        assert_eq!(
            train_ranges(&steps),
            vec![(Skill::Slayer, 1, 6), (Skill::Slayer, 6, 11), (Skill::Slayer, 11, 16)]
        );
    }
}
