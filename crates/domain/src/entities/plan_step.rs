//! Plan steps - the actionable output of a planning pass.
//!
//! A plan step is one of three closed shapes; callers match on the enum (or on
//! [`PlanStep::step_type`]) instead of inspecting concrete types.

use serde::{Deserialize, Serialize};

use crate::{QuestEntry, QuestState, Skill, StepType};

/// A quest to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestStep {
    pub entry: QuestEntry,
    pub state: QuestState,
}

/// Manual skilling up to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainStep {
    pub skill: Skill,
    pub from_level: i32,
    pub to_level: i32,
    pub reason: Option<String>,
}

/// A milestone the host cannot verify (diary tiers, unlocks, notes, lamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoStep {
    pub step_type: StepType,
    pub title: String,
    pub detail: Option<String>,
    pub wiki_url: Option<String>,
    // Optional guidance used by lamp and diary steps
    pub skill: Option<Skill>,
    pub from_level: Option<i32>,
    pub to_level: Option<i32>,
    pub xp: Option<i64>,
}

impl InfoStep {
    pub fn new(step_type: StepType, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            step_type,
            title: title.into(),
            detail,
            wiki_url: None,
            skill: None,
            from_level: None,
            to_level: None,
            xp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanStep {
    Quest(QuestStep),
    Train(TrainStep),
    Info(InfoStep),
}

impl PlanStep {
    pub fn quest(entry: QuestEntry, state: QuestState) -> Self {
        Self::Quest(QuestStep { entry, state })
    }

    pub fn train(skill: Skill, from_level: i32, to_level: i32, reason: Option<String>) -> Self {
        Self::Train(TrainStep {
            skill,
            from_level,
            to_level,
            reason,
        })
    }

    pub fn info(step_type: StepType, title: impl Into<String>, detail: Option<String>) -> Self {
        Self::Info(InfoStep::new(step_type, title, detail))
    }

    pub fn step_type(&self) -> StepType {
        match self {
            Self::Quest(_) => StepType::Quest,
            Self::Train(_) => StepType::Train,
            Self::Info(info) => info.step_type,
        }
    }

    /// Headline for compact displays ("Train Attack to 10", "Diary: Varrock easy").
    pub fn title(&self) -> String {
        match self {
            Self::Quest(quest) => quest.entry.name.clone(),
            Self::Train(train) => {
                format!("Train {} to {}", train.skill.display_name(), train.to_level)
            }
            Self::Info(info) => match info.step_type {
                StepType::Note => info.title.clone(),
                other => format!("{}: {}", other.display_name(), info.title),
            },
        }
    }

    /// Body text for the step, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Quest(quest) => quest.entry.why.as_deref(),
            Self::Train(train) => train.reason.as_deref(),
            Self::Info(info) => info.detail.as_deref(),
        }
    }
}

/// A plan step plus its absolute position in the route spine, for
/// "step X of Y" displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpineStep {
    pub step: PlanStep,
    /// 0-based index of the source row in the spine
    pub spine_index: usize,
    pub spine_total: usize,
}

impl SpineStep {
    pub fn new(step: PlanStep, spine_index: usize, spine_total: usize) -> Self {
        Self {
            step,
            spine_index,
            spine_total,
        }
    }

    /// 1-based position for display.
    pub fn step_number(&self) -> usize {
        self.spine_index + 1
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step_number(), self.spine_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_type_discriminant() {
        let train = PlanStep::train(Skill::Attack, 5, 10, None);
        assert_eq!(train.step_type(), StepType::Train);

        let lamp = PlanStep::info(StepType::Lamp, "Use lamp", None);
        assert_eq!(lamp.step_type(), StepType::Lamp);

        let quest = PlanStep::quest(QuestEntry::new(None, "Rune Mysteries"), QuestState::NotStarted);
        assert_eq!(quest.step_type(), StepType::Quest);
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            PlanStep::train(Skill::Woodcutting, 10, 20, None).title(),
            "Train Woodcutting to 20"
        );
        assert_eq!(
            PlanStep::info(StepType::Diary, "Easy Varrock Diary", None).title(),
            "Diary: Easy Varrock Diary"
        );
        assert_eq!(PlanStep::info(StepType::Note, "Bank run", None).title(), "Bank run");
    }

    #[test]
    fn test_spine_step_progress_label() {
        let view = SpineStep::new(PlanStep::info(StepType::Unlock, "Fairy rings", None), 41, 250);
        assert_eq!(view.step_number(), 42);
        assert_eq!(view.progress_label(), "Step 42 of 250");
    }

    #[test]
    fn test_plan_step_serializes_with_kind_tag() {
        let json = serde_json::to_value(PlanStep::train(Skill::Attack, 5, 10, None))
            .expect("serialize");
        assert_eq!(json["kind"], "train");
        assert_eq!(json["skill"], "ATTACK");
        assert_eq!(json["fromLevel"], 5);
    }
}
