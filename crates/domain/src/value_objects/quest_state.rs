//! Live quest journal state.

use serde::{Deserialize, Serialize};

/// Quest journal state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestState {
    /// Also the conservative fallback when the host cannot answer.
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl QuestState {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
        }
    }
}

impl std::fmt::Display for QuestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
