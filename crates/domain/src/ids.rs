use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Canonical, host-assigned identifiers are upper snake case strings
/// (`COOKS_ASSISTANT`). The newtype keeps them from mixing with display names.
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a raw string, trimming surrounding whitespace.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
                let trimmed = raw.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!(
                        $entity,
                        " id cannot be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The id with underscores read as spaces (`COOKS_ASSISTANT` -> `COOKS ASSISTANT`).
            pub fn spaced(&self) -> String {
                self.0.replace('_', " ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(QuestId, "Quest");
