//! Character lifecycle status vocabulary.
//!
//! The service accepts exactly three statuses. Anything else is a
//! validation error on its side.

use serde::{Deserialize, Serialize};

/// Closed set of lifecycle statuses shared by every editable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterStatus {
    /// Applied by the service when a create request omits `status`.
    #[default]
    Draft,
    Active,
    Archived,
}

impl CharacterStatus {
    pub const ALL: [CharacterStatus; 3] = [Self::Draft, Self::Active, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Total membership check: `None` for anything outside the vocabulary.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// `DRAFT | ACTIVE | ARCHIVED`
    pub fn allowed_values() -> String {
        Self::ALL.map(Self::as_str).join(" | ")
    }

    /// Error text the service returns for an out-of-vocabulary status.
    pub fn invalid_message(value: &str) -> String {
        format!(
            "Status {value} is not valid. Allowed values: {}",
            Self::allowed_values()
        )
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
