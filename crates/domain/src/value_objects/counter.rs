//! Externally observable progress counters.
//!
//! A host exposes achievement progress as plain integers (varbits/varps). The
//! engine never sees the host's numeric ids: it asks for a [`Counter`] and the
//! live-state adapter maps it to whatever the host uses.

use serde::{Deserialize, Serialize};

/// Tutorial progress value once the onboarding sequence is complete.
pub const TUTORIAL_COMPLETE_VALUE: i64 = 1000;

/// Achievement tiers shared by diaries and combat achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    Easy,
    Medium,
    Hard,
    Elite,
    Master,
    Grandmaster,
}

impl AchievementTier {
    /// Detects a tier from a normalized name; the first matching keyword wins.
    ///
    /// `grandmaster` is tested before `master` since one contains the other.
    pub fn detect(normalized: &str) -> Option<Self> {
        const KEYWORDS: [(&str, AchievementTier); 6] = [
            ("grandmaster", AchievementTier::Grandmaster),
            ("master", AchievementTier::Master),
            ("elite", AchievementTier::Elite),
            ("hard", AchievementTier::Hard),
            ("medium", AchievementTier::Medium),
            ("easy", AchievementTier::Easy),
        ];

        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, tier)| *tier)
    }

    /// Achievement diaries stop at elite.
    pub fn is_diary_tier(&self) -> bool {
        matches!(self, Self::Easy | Self::Medium | Self::Hard | Self::Elite)
    }
}

/// Achievement diary regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiaryRegion {
    Ardougne,
    Desert,
    Falador,
    Fremennik,
    Kandarin,
    Karamja,
    KourendKebos,
    LumbridgeDraynor,
    Morytania,
    Varrock,
    Western,
    Wilderness,
}

impl DiaryRegion {
    /// Detects a region from a normalized name; the first matching keyword wins.
    pub fn detect(normalized: &str) -> Option<Self> {
        const KEYWORDS: [(&str, DiaryRegion); 14] = [
            ("ardougne", DiaryRegion::Ardougne),
            ("desert", DiaryRegion::Desert),
            ("falador", DiaryRegion::Falador),
            ("fremennik", DiaryRegion::Fremennik),
            ("kandarin", DiaryRegion::Kandarin),
            ("karamja", DiaryRegion::Karamja),
            ("kourend", DiaryRegion::KourendKebos),
            ("kebos", DiaryRegion::KourendKebos),
            ("lumbridge", DiaryRegion::LumbridgeDraynor),
            ("draynor", DiaryRegion::LumbridgeDraynor),
            ("morytania", DiaryRegion::Morytania),
            ("varrock", DiaryRegion::Varrock),
            ("western", DiaryRegion::Western),
            ("wilderness", DiaryRegion::Wilderness),
        ];

        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, region)| *region)
    }
}

/// A counter the live-state adapter can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Counter {
    /// Onboarding progress; complete at [`TUTORIAL_COMPLETE_VALUE`].
    TutorialProgress,
    /// Reward-claimed flag for one diary tier in one region.
    DiaryTier {
        region: DiaryRegion,
        tier: AchievementTier,
    },
    /// Reward-claimed flag for one combat achievement tier.
    CombatAchievementTier { tier: AchievementTier },
}

impl Counter {
    /// The value at which the counter means "done".
    pub fn completion_value(&self) -> i64 {
        match self {
            Self::TutorialProgress => TUTORIAL_COMPLETE_VALUE,
            Self::DiaryTier { .. } | Self::CombatAchievementTier { .. } => 1,
        }
    }

    pub fn is_complete(&self, value: i64) -> bool {
        value >= self.completion_value()
    }
}
