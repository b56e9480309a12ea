//! Trainable skills.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A trainable skill. Declaration order is the in-game skill guide order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecraft,
    Hunter,
    Construction,
}

impl Skill {
    pub const ALL: [Skill; 23] = [
        Self::Attack,
        Self::Defence,
        Self::Strength,
        Self::Hitpoints,
        Self::Ranged,
        Self::Prayer,
        Self::Magic,
        Self::Cooking,
        Self::Woodcutting,
        Self::Fletching,
        Self::Fishing,
        Self::Firemaking,
        Self::Crafting,
        Self::Smithing,
        Self::Mining,
        Self::Herblore,
        Self::Agility,
        Self::Thieving,
        Self::Slayer,
        Self::Farming,
        Self::Runecraft,
        Self::Hunter,
        Self::Construction,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defence => "Defence",
            Self::Strength => "Strength",
            Self::Hitpoints => "Hitpoints",
            Self::Ranged => "Ranged",
            Self::Prayer => "Prayer",
            Self::Magic => "Magic",
            Self::Cooking => "Cooking",
            Self::Woodcutting => "Woodcutting",
            Self::Fletching => "Fletching",
            Self::Fishing => "Fishing",
            Self::Firemaking => "Firemaking",
            Self::Crafting => "Crafting",
            Self::Smithing => "Smithing",
            Self::Mining => "Mining",
            Self::Herblore => "Herblore",
            Self::Agility => "Agility",
            Self::Thieving => "Thieving",
            Self::Slayer => "Slayer",
            Self::Farming => "Farming",
            Self::Runecraft => "Runecraft",
            Self::Hunter => "Hunter",
            Self::Construction => "Construction",
        }
    }

    /// Upper snake case key as used by hosts and documents (`WOODCUTTING`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Attack => "ATTACK",
            Self::Defence => "DEFENCE",
            Self::Strength => "STRENGTH",
            Self::Hitpoints => "HITPOINTS",
            Self::Ranged => "RANGED",
            Self::Prayer => "PRAYER",
            Self::Magic => "MAGIC",
            Self::Cooking => "COOKING",
            Self::Woodcutting => "WOODCUTTING",
            Self::Fletching => "FLETCHING",
            Self::Fishing => "FISHING",
            Self::Firemaking => "FIREMAKING",
            Self::Crafting => "CRAFTING",
            Self::Smithing => "SMITHING",
            Self::Mining => "MINING",
            Self::Herblore => "HERBLORE",
            Self::Agility => "AGILITY",
            Self::Thieving => "THIEVING",
            Self::Slayer => "SLAYER",
            Self::Farming => "FARMING",
            Self::Runecraft => "RUNECRAFT",
            Self::Hunter => "HUNTER",
            Self::Construction => "CONSTRUCTION",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    /// Accepts `WOODCUTTING`, `Woodcutting`, `wood cutting` style keys and the
    /// aliases commonly found in wiki exports (`HP`, `Runecrafting`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_ascii_uppercase()
            .replace([' ', '-'], "_");
        let key = match key.as_str() {
            "HP" | "HITPOINT" => "HITPOINTS",
            "RUNECRAFTING" => "RUNECRAFT",
            other => other,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.key() == key)
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s.trim())))
    }
}

impl TryFrom<String> for Skill {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
