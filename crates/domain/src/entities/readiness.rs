//! Readiness rows and the bucketed plan snapshot.

use serde::{Deserialize, Serialize};

use crate::{QuestEntry, QuestState, Skill};

/// Where a quest stands relative to the character right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestReadiness {
    Done,
    InProgress,
    Ready,
    Blocked,
}

impl QuestReadiness {
    /// Readiness is a pure function of the journal state and the open blockers.
    pub fn classify(state: QuestState, blockers: &[QuestBlocker]) -> Self {
        match state {
            QuestState::Finished => Self::Done,
            QuestState::InProgress => Self::InProgress,
            QuestState::NotStarted if blockers.is_empty() => Self::Ready,
            QuestState::NotStarted => Self::Blocked,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In progress",
            Self::Ready => "Ready",
            Self::Blocked => "Blocked",
        }
    }
}

/// A specific unmet requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestBlocker {
    PrerequisiteQuest { name: String },
    SkillLevel { skill: Skill, have: i32, need: i32 },
}

impl QuestBlocker {
    pub fn prerequisite(name: impl Into<String>) -> Self {
        Self::PrerequisiteQuest { name: name.into() }
    }

    pub fn skill(skill: Skill, have: i32, need: i32) -> Self {
        Self::SkillLevel { skill, have, need }
    }

    pub fn is_skill(&self) -> bool {
        matches!(self, Self::SkillLevel { .. })
    }

    /// Short human-readable form ("Requires Druidic Ritual", "Herblore 1/3").
    pub fn describe(&self) -> String {
        match self {
            Self::PrerequisiteQuest { name } => format!("Requires {}", name),
            Self::SkillLevel { skill, have, need } => {
                format!("{} {}/{}", skill.display_name(), have, need)
            }
        }
    }
}

/// One scored quest in a readiness pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRow {
    pub entry: QuestEntry,
    pub state: QuestState,
    pub readiness: QuestReadiness,
    pub blockers: Vec<QuestBlocker>,
    pub score: i64,
    /// Position in the input list
    pub route_index: usize,
}

/// Bucketed, sorted view of a readiness pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub completed: usize,
    pub total: usize,
    /// Never a done row
    pub recommended: Option<QuestRow>,
    pub in_progress: Vec<QuestRow>,
    pub ready: Vec<QuestRow>,
    pub blocked: Vec<QuestRow>,
    pub done: Vec<QuestRow>,
}

impl PlanSnapshot {
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}
