//! Loaders for the bundled route, facts and registry documents.
//!
//! Loading is fail-soft: a missing or malformed document logs a warning and
//! yields empty data, and bad rows are skipped one at a time.

mod error;
mod facts;
mod registry;
mod route;
mod types;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ironpath_domain::Skill;
use serde::de::DeserializeOwned;

pub use error::DocumentError;
pub use facts::QuestFactsLoader;
pub use registry::QuestRegistryLoader;
pub use route::{LoadedSpine, RouteSpineLoader, SpineLoadReport};
pub use types::{
    QuestDefinitionDocument, QuestFactDocument, QuestFactsDocument, RouteDocument,
    RouteStepDocument,
};

/// Read and parse a JSON document from disk.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolve `{skill name: level}` pairs, skipping unknown skills and levels
/// outside `i32`.
pub(crate) fn parse_skill_levels(raw: Option<BTreeMap<String, i64>>) -> BTreeMap<Skill, i32> {
    parse_skill_map(raw, |value| i32::try_from(value).ok())
}

/// Resolve `{skill name: xp}` pairs, skipping unknown skills.
pub(crate) fn parse_skill_xp(raw: Option<BTreeMap<String, i64>>) -> BTreeMap<Skill, i64> {
    parse_skill_map(raw, Some)
}

fn parse_skill_map<V>(
    raw: Option<BTreeMap<String, i64>>,
    convert: impl Fn(i64) -> Option<V>,
) -> BTreeMap<Skill, V> {
    let mut resolved = BTreeMap::new();
    for (name, value) in raw.unwrap_or_default() {
        let skill = match name.parse::<Skill>() {
            Ok(skill) => skill,
            Err(e) => {
                tracing::debug!(error = %e, skill = %name, "Skipping unknown skill key");
                continue;
            }
        };
        if let Some(value) = convert(value) {
            resolved.insert(skill, value);
        }
    }
    resolved
}

/// Trimmed, non-blank tags.
pub(crate) fn parse_tags(raw: Option<Vec<String>>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_maps_skip_unknown_skills_and_resolve_aliases() {
        let raw = BTreeMap::from([
            ("HP".to_string(), 10),
            ("runecrafting".to_string(), 5),
            ("DUNGEONEERING".to_string(), 50),
        ]);

        let levels = parse_skill_levels(Some(raw));

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(&Skill::Hitpoints), Some(&10));
        assert_eq!(levels.get(&Skill::Runecraft), Some(&5));
    }

    #[test]
    fn skill_levels_skip_values_outside_i32() {
        let raw = BTreeMap::from([("ATTACK".to_string(), i64::MAX)]);
        assert!(parse_skill_levels(Some(raw)).is_empty());
    }

    #[test]
    fn tags_are_trimmed_and_blank_tags_dropped() {
        let tags = parse_tags(Some(vec![" early ".into(), "".into(), "unlock".into()]));
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["early".to_string(), "unlock".to_string()]
        );
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        let err = read_document::<Vec<RouteStepDocument>>(&path).expect_err("missing file");
        assert!(matches!(err, DocumentError::NotFound(_)));
    }
}
