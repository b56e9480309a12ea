use std::path::Path;

use ironpath_domain::common::StringExt;
use ironpath_domain::{QuestDefinition, QuestId, QuestRegistry};

use super::{read_document, DocumentError, QuestDefinitionDocument};

/// Builds the canonical quest registry from `[{id, name}]`.
pub struct QuestRegistryLoader;

impl QuestRegistryLoader {
    /// Parse a registry document. Malformed JSON yields an empty registry.
    pub fn load_str(json: &str) -> QuestRegistry {
        match serde_json::from_str::<Vec<QuestDefinitionDocument>>(json) {
            Ok(rows) => Self::from_rows(rows),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse quest registry, using empty registry");
                QuestRegistry::default()
            }
        }
    }

    pub fn load_path(path: &Path) -> QuestRegistry {
        match read_document::<Vec<QuestDefinitionDocument>>(path) {
            Ok(rows) => Self::from_rows(rows),
            Err(e) => {
                Self::log_failure(path, &e);
                QuestRegistry::default()
            }
        }
    }

    /// Rows without an id are skipped; a missing name falls back to the spaced id.
    pub fn from_rows(rows: Vec<QuestDefinitionDocument>) -> QuestRegistry {
        let definitions = rows.into_iter().filter_map(|row| {
            let id = match row.id.trimmed_non_blank().map(QuestId::new) {
                Some(Ok(id)) => id,
                _ => {
                    tracing::debug!(name = ?row.name, "Skipping registry row without id");
                    return None;
                }
            };
            let name = row.name.trimmed_non_blank().unwrap_or_else(|| id.spaced());
            Some(QuestDefinition::new(id, name))
        });
        QuestRegistry::new(definitions)
    }

    fn log_failure(path: &Path, error: &DocumentError) {
        tracing::warn!(
            error = %error,
            path = %path.display(),
            "Failed to load quest registry, using empty registry"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_id_are_skipped() {
        let registry = QuestRegistryLoader::load_str(
            r#"[
                {"id": "COOKS_ASSISTANT", "name": "Cook's Assistant"},
                {"name": "Nameless"},
                {"id": "RUNE_MYSTERIES"}
            ]"#,
        );

        assert_eq!(registry.len(), 2);
        let rune = registry.find_by_id("RUNE_MYSTERIES").expect("registered");
        assert_eq!(rune.name, "RUNE MYSTERIES");
    }

    #[test]
    fn malformed_document_yields_empty_registry() {
        assert!(QuestRegistryLoader::load_str("{not json").is_empty());
    }
}
