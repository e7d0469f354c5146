//! Character category vocabulary.
//!
//! Mirrors the public contract of the backend: fourteen named categories,
//! no others. Duplicates inside one character are rejected by the service.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PersonajeTrágico")]
    PersonajeTragico,
    Protector,
    Sobreviviente,
    Mentor,
    Oscuro,
    Emocional,
    Tranquilo,
    #[serde(rename = "Caótico")]
    Caotico,
    #[serde(rename = "Melancólico")]
    Melancolico,
    LealtadAbsoluta,
    Dualidad,
    Resiliencia,
    AmorComoMotor,
    Caida,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Self::PersonajeTragico,
        Self::Protector,
        Self::Sobreviviente,
        Self::Mentor,
        Self::Oscuro,
        Self::Emocional,
        Self::Tranquilo,
        Self::Caotico,
        Self::Melancolico,
        Self::LealtadAbsoluta,
        Self::Dualidad,
        Self::Resiliencia,
        Self::AmorComoMotor,
        Self::Caida,
    ];

    /// Wire token, accents included.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonajeTragico => "PersonajeTrágico",
            Self::Protector => "Protector",
            Self::Sobreviviente => "Sobreviviente",
            Self::Mentor => "Mentor",
            Self::Oscuro => "Oscuro",
            Self::Emocional => "Emocional",
            Self::Tranquilo => "Tranquilo",
            Self::Caotico => "Caótico",
            Self::Melancolico => "Melancólico",
            Self::LealtadAbsoluta => "LealtadAbsoluta",
            Self::Dualidad => "Dualidad",
            Self::Resiliencia => "Resiliencia",
            Self::AmorComoMotor => "AmorComoMotor",
            Self::Caida => "Caida",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First value that appears more than once, if any.
pub fn find_duplicate<S: AsRef<str>>(values: &[S]) -> Option<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|value| -> &str { value.as_ref() })
        .find(|value| !seen.insert(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_fourteen_distinct_tokens() {
        let tokens: HashSet<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(tokens.len(), 14);
    }

    #[test]
    fn serde_uses_accented_tokens() {
        let json = serde_json::to_value(Category::Melancolico).unwrap();
        assert_eq!(json, "Melancólico");

        let parsed: Category = serde_json::from_value(serde_json::json!("Caótico")).unwrap();
        assert_eq!(parsed, Category::Caotico);
    }

    #[test]
    fn serde_token_matches_as_str_for_every_variant() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn parse_rejects_unaccented_spelling() {
        assert_eq!(Category::parse("Melancolico"), None);
        assert!(!Category::is_valid("Villano"));
        assert!(Category::is_valid("Caida"));
    }

    #[test]
    fn duplicate_detection() {
        assert_eq!(find_duplicate(&["Mentor", "Oscuro", "Mentor"]), Some("Mentor"));
        assert_eq!(find_duplicate(&["Mentor", "Oscuro"]), None);
        assert_eq!(find_duplicate::<&str>(&[]), None);
    }
}
