//! Route spine rows.
//!
//! The spine is the hand-authored progression order. Each row is created once
//! when the route document is loaded and never changes afterwards; planning
//! reads it against live state on every call.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::error::DomainError;
use crate::{QuestId, Skill};

/// Discriminant shared by route rows and plan steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    Quest,
    Train,
    Miniquest,
    Diary,
    Note,
    Unlock,
    Lamp,
}

impl StepType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Quest => "Quest",
            Self::Train => "Train",
            Self::Miniquest => "Miniquest",
            Self::Diary => "Diary",
            Self::Note => "Note",
            Self::Unlock => "Unlock",
            Self::Lamp => "Lamp",
        }
    }

    /// Rows of this type point at an entry in the quest registry.
    pub fn is_quest_backed(&self) -> bool {
        matches!(self, Self::Quest | Self::Miniquest)
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StepType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QUEST" => Ok(Self::Quest),
            "TRAIN" => Ok(Self::Train),
            "MINIQUEST" => Ok(Self::Miniquest),
            "DIARY" => Ok(Self::Diary),
            "NOTE" => Ok(Self::Note),
            "UNLOCK" => Ok(Self::Unlock),
            "LAMP" => Ok(Self::Lamp),
            _ => Err(DomainError::parse(format!("Unknown step type: {}", s.trim()))),
        }
    }
}

/// A single row of the route spine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    step_type: StepType,
    quest: Option<QuestId>,
    skill: Option<Skill>,
    to_level: Option<i32>,
    display_name: Option<String>,
    why: Option<String>,
    /// Replaces the quest facts tags when non-empty
    tags_override: BTreeSet<String>,
    /// Layered over the quest facts skill gates
    min_skills_override: BTreeMap<Skill, i32>,
    unresolved: bool,
}

impl RouteStep {
    /// A quest or miniquest row backed by a registry id.
    pub fn quest_row(
        step_type: StepType,
        quest: QuestId,
        display_name: impl Into<String>,
        why: Option<String>,
    ) -> Self {
        Self {
            quest: Some(quest),
            display_name: Some(display_name.into()),
            why,
            ..Self::blank(step_type)
        }
    }

    /// A training gate.
    pub fn train(skill: Skill, to_level: i32, display_name: Option<String>, why: Option<String>) -> Self {
        Self {
            skill: Some(skill),
            to_level: Some(to_level),
            display_name: Some(
                display_name.unwrap_or_else(|| format!("Train {}", skill.display_name())),
            ),
            why,
            ..Self::blank(StepType::Train)
        }
    }

    /// Any other milestone (diary, note, unlock, lamp, unverifiable miniquest).
    pub fn milestone(step_type: StepType, display_name: Option<String>, why: Option<String>) -> Self {
        Self {
            display_name,
            why,
            ..Self::blank(step_type)
        }
    }

    /// A quest row whose reference did not resolve. Kept as a note so the
    /// spine order stays visible.
    pub fn unresolved(display_name: Option<String>, why: Option<String>) -> Self {
        Self {
            display_name: Some(display_name.unwrap_or_else(|| "Unresolved quest".to_string())),
            why: Some(why.unwrap_or_else(|| "Unresolved quest row from route.".to_string())),
            unresolved: true,
            ..Self::blank(StepType::Note)
        }
    }

    fn blank(step_type: StepType) -> Self {
        Self {
            step_type,
            quest: None,
            skill: None,
            to_level: None,
            display_name: None,
            why: None,
            tags_override: BTreeSet::new(),
            min_skills_override: BTreeMap::new(),
            unresolved: false,
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags_override = tags.into_iter().collect();
        self
    }

    pub fn with_min_skills(mut self, min_skills: BTreeMap<Skill, i32>) -> Self {
        self.min_skills_override = min_skills;
        self
    }

    // === Accessors ===

    pub fn step_type(&self) -> StepType {
        self.step_type
    }

    pub fn quest(&self) -> Option<&QuestId> {
        self.quest.as_ref()
    }

    pub fn skill(&self) -> Option<Skill> {
        self.skill
    }

    pub fn to_level(&self) -> Option<i32> {
        self.to_level
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn why(&self) -> Option<&str> {
        self.why.as_deref()
    }

    pub fn tags_override(&self) -> &BTreeSet<String> {
        &self.tags_override
    }

    pub fn min_skills_override(&self) -> &BTreeMap<Skill, i32> {
        &self.min_skills_override
    }

    pub fn is_unresolved(&self) -> bool {
        self.unresolved
    }

    /// The row carries the fields its type needs to be planned.
    pub fn is_structurally_valid(&self) -> bool {
        match self.step_type {
            StepType::Quest | StepType::Miniquest => self.quest.is_some(),
            StepType::Train => self.skill.is_some() && self.to_level.is_some(),
            StepType::Diary | StepType::Note => {
                self.display_name.as_deref().and_then(none_if_blank).is_some()
            }
            StepType::Unlock | StepType::Lamp => true,
        }
    }

    /// Display title, falling back to the type label.
    pub fn title(&self) -> String {
        if let Some(name) = self.display_name.as_deref().and_then(none_if_blank) {
            return name.to_string();
        }
        match (self.step_type, self.quest.as_ref(), self.skill, self.to_level) {
            (StepType::Quest | StepType::Miniquest, Some(quest), _, _) => quest.spaced(),
            (StepType::Train, _, Some(skill), Some(level)) => {
                format!("Train {} to {}", skill.display_name(), level)
            }
            _ => self.step_type.display_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest_id(raw: &str) -> QuestId {
        QuestId::new(raw).expect("valid id")
    }

    #[test]
    fn test_step_type_parse_case_insensitive() {
        assert_eq!("quest".parse::<StepType>(), Ok(StepType::Quest));
        assert_eq!(" Miniquest ".parse::<StepType>(), Ok(StepType::Miniquest));
        assert!("BOSS".parse::<StepType>().is_err());
    }

    #[test]
    fn test_train_default_display_name() {
        let step = RouteStep::train(Skill::Attack, 10, None, None);
        assert_eq!(step.display_name(), Some("Train Attack"));
        assert!(step.is_structurally_valid());
    }

    #[test]
    fn test_unresolved_becomes_note() {
        let step = RouteStep::unresolved(Some("Mystery Quest".to_string()), None);
        assert_eq!(step.step_type(), StepType::Note);
        assert!(step.is_unresolved());
        assert_eq!(step.why(), Some("Unresolved quest row from route."));
    }

    #[test]
    fn test_structural_validity() {
        assert!(!RouteStep::milestone(StepType::Quest, Some("No id".into()), None)
            .is_structurally_valid());
        assert!(!RouteStep::milestone(StepType::Diary, Some("  ".into()), None)
            .is_structurally_valid());
        assert!(RouteStep::milestone(StepType::Unlock, None, None).is_structurally_valid());
        assert!(
            RouteStep::quest_row(StepType::Quest, quest_id("COOKS_ASSISTANT"), "Cook's Assistant", None)
                .is_structurally_valid()
        );
    }

    #[test]
    fn test_quest_row_exposes_quest_id() {
        let step = RouteStep::quest_row(
            StepType::Miniquest,
            quest_id("ENTER_THE_ABYSS"),
            "Enter the Abyss",
            Some("Pouches".to_string()),
        );
        assert_eq!(step.step_type(), StepType::Miniquest);
        assert_eq!(step.quest(), Some(&quest_id("ENTER_THE_ABYSS")));
        assert_eq!(step.display_name(), Some("Enter the Abyss"));
        assert_eq!(step.why(), Some("Pouches"));
        assert!(!step.is_unresolved());
    }

    #[test]
    fn test_title_fallbacks() {
        assert_eq!(RouteStep::milestone(StepType::Unlock, None, None).title(), "Unlock");
        assert_eq!(
            RouteStep::milestone(StepType::Note, Some(" Bank your runes ".into()), None).title(),
            "Bank your runes"
        );
    }

    #[test]
    fn test_overrides() {
        let step = RouteStep::quest_row(StepType::Quest, quest_id("WATERFALL_QUEST"), "Waterfall Quest", None)
            .with_tags(["combatxp".to_string()])
            .with_min_skills(BTreeMap::from([(Skill::Attack, 30)]));
        assert!(step.tags_override().contains("combatxp"));
        assert_eq!(step.min_skills_override().get(&Skill::Attack), Some(&30));
    }
}
