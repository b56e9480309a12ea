//! Type definitions for the bundled JSON documents.
//!
//! These mirror the authored document shapes and are converted to domain
//! types by the loaders. Documents are read as raw JSON values first and each
//! row is decoded on its own, so a row with a mistyped field is dropped
//! without failing the rest of the document. Every field is optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the route document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStepDocument {
    #[serde(rename = "type", default)]
    pub step_type: Option<String>,
    /// Quest id or display name
    #[serde(default)]
    pub quest: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub to_level: Option<i64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub min_skills: Option<BTreeMap<String, i64>>,
}

/// Facts for one quest, keyed by quest id or display name in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestFactDocument {
    #[serde(default)]
    pub min_skills: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    pub xp_rewards: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub prereqs: Option<Vec<String>>,
}

/// The route document: an ordered array of rows, decoded one at a time.
pub type RouteDocument = Vec<serde_json::Value>;

/// The quest facts document: keys in authored order, values decoded one at a time.
pub type QuestFactsDocument = serde_json::Map<String, serde_json::Value>;

/// One row of the quest registry document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinitionDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
