//! Completion heuristics for non-quest milestones.
//!
//! A few milestones can be checked against a host counter. Detection only
//! looks at the normalized display name and must never report a milestone
//! complete that is not: anything it does not recognize stays pending.

use ironpath_domain::common::normalize_key;
use ironpath_domain::{AchievementTier, Counter, DiaryRegion, RouteStep, StepType};

use crate::entities::LiveState;

const TUTORIAL_KEYWORD: &str = "tutorialisland";
const COMBAT_ACHIEVEMENT_KEYWORD: &str = "combatachievement";

/// The counter that proves a milestone complete, if any.
pub fn detect_counter(step_type: StepType, display_name: &str) -> Option<Counter> {
    let key = normalize_key(display_name);
    if key.is_empty() {
        return None;
    }

    if key.contains(TUTORIAL_KEYWORD) {
        return Some(Counter::TutorialProgress);
    }

    if step_type == StepType::Diary {
        let tier = AchievementTier::detect(&key).filter(AchievementTier::is_diary_tier)?;
        let region = DiaryRegion::detect(&key)?;
        return Some(Counter::DiaryTier { region, tier });
    }

    if key.contains(COMBAT_ACHIEVEMENT_KEYWORD) {
        let tier = AchievementTier::detect(&key)?;
        return Some(Counter::CombatAchievementTier { tier });
    }

    None
}

/// Checks detected milestones against live counters.
#[derive(Clone)]
pub struct CompletionHeuristics {
    live: LiveState,
}

impl CompletionHeuristics {
    pub fn new(live: LiveState) -> Self {
        Self { live }
    }

    /// `true` only when a detected counter has reached its completion value.
    pub fn is_complete(&self, step: &RouteStep) -> bool {
        let Some(name) = step.display_name() else {
            return false;
        };
        let Some(counter) = detect_counter(step.step_type(), name) else {
            return false;
        };
        counter.is_complete(self.live.counter(counter))
    }
}
