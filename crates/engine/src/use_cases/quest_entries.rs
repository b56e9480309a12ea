//! Quest entry derivation.
//!
//! Combines a spine row with its quest facts into the `QuestEntry` that plan
//! steps carry and the readiness engine scores.

use std::collections::BTreeMap;

use ironpath_domain::common::none_if_blank;
use ironpath_domain::{QuestEntry, QuestFacts, QuestRegistry, RouteStep, Skill, StepType};

/// Rationale used when neither the facts nor the row has one.
pub fn fallback_rationale(step_type: StepType) -> &'static str {
    match step_type {
        StepType::Quest => "Complete this quest in route order to minimise extra training.",
        StepType::Miniquest => "Recommended miniquest on the route.",
        StepType::Unlock => "Recommended unlock on the route.",
        StepType::Diary => "Recommended diary step on the route.",
        StepType::Train => "Recommended training checkpoint on the route.",
        StepType::Note | StepType::Lamp => "Follow the route order.",
    }
}

/// Builds quest entries and merged row data from the registry and facts.
#[derive(Clone, Copy)]
pub struct QuestEntryBuilder<'a> {
    registry: &'a QuestRegistry,
    facts: &'a QuestFacts,
}

impl<'a> QuestEntryBuilder<'a> {
    pub fn new(registry: &'a QuestRegistry, facts: &'a QuestFacts) -> Self {
        Self { registry, facts }
    }

    /// Facts rationale, then the row's own, then the per-type fallback.
    pub fn rationale_for(&self, step: &RouteStep) -> String {
        step.quest()
            .and_then(|quest| self.facts.why(quest))
            .and_then(none_if_blank)
            .or_else(|| step.why().and_then(none_if_blank))
            .unwrap_or_else(|| fallback_rationale(step.step_type()))
            .to_string()
    }

    /// Facts skill gates with the row's overrides layered on top.
    pub fn min_skills_for(&self, step: &RouteStep) -> BTreeMap<Skill, i32> {
        let mut merged = step
            .quest()
            .map(|quest| self.facts.min_skills(quest).clone())
            .unwrap_or_default();
        merged.extend(step.min_skills_override().iter().map(|(s, l)| (*s, *l)));
        merged
    }

    /// Entry for a quest-backed row with a resolved id.
    pub fn entry_for(&self, step: &RouteStep) -> Option<QuestEntry> {
        if !step.step_type().is_quest_backed() {
            return None;
        }
        let quest = step.quest()?;
        let fact = self.facts.fact(quest);

        let name = step
            .display_name()
            .and_then(none_if_blank)
            .or_else(|| self.registry.name_of(quest))
            .map(str::to_string)
            .unwrap_or_else(|| quest.spaced());

        let tags = if step.tags_override().is_empty() {
            fact.tags.clone()
        } else {
            step.tags_override().clone()
        };

        let mut entry = QuestEntry::new(Some(quest.clone()), name)
            .with_why(Some(self.rationale_for(step)));
        entry.min_skills = self.min_skills_for(step);
        entry.prerequisite_quests = fact.prerequisites.clone();
        entry.xp_rewards = fact.xp_rewards.clone();
        entry.tags = tags;
        Some(entry)
    }

    /// Entries for every quest-backed row, in spine order.
    pub fn entries_for_spine(&self, spine: &[RouteStep]) -> Vec<QuestEntry> {
        spine.iter().filter_map(|step| self.entry_for(step)).collect()
    }
}
