//! Character payload factory.
//!
//! Every payload starts from one valid baseline. Variants are overlays on
//! that baseline so scenarios never spell out a full character by hand.
//! Invalid payloads break exactly one field, which keeps a failing negative
//! test attributable to that field alone.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::category::Category;
use crate::character::CreateCharacterPayload;
use crate::error::CoreError;
use crate::invalid_value::{build_invalid_field_value, FieldKind, ViolationKind};
use crate::naming::generate_character_name;
use crate::status::CharacterStatus;

// ---------------------------------------------------------------------------
// Baseline
// ---------------------------------------------------------------------------

pub const BASELINE_CATEGORIES: [Category; 4] = [
    Category::PersonajeTragico,
    Category::Melancolico,
    Category::Dualidad,
    Category::AmorComoMotor,
];

pub const BASELINE_IDENTITY: &str = "Una joven sacerdotisa marcada por la pérdida, cuya dulzura \
     oculta una determinación feroz para proteger aquello que ama.";

pub const BASELINE_INSPIRATIONS: [&str; 3] = [
    "Anime de fantasía independiente",
    "Folklore japonés",
    "Heroína silenciosa",
];

pub const BASELINE_NOTES: &str = "Contraste entre fragilidad emocional y fortaleza espiritual. \
     Diseño visual con tonos oscuros y mirada profunda.";

/// Valid `ACTIVE` payload with a freshly generated name.
pub fn build_valid_character_payload() -> CreateCharacterPayload {
    CreateCharacterPayload {
        name: generate_character_name(),
        status: Some(CharacterStatus::Active),
        categories: BASELINE_CATEGORIES.to_vec(),
        identity: BASELINE_IDENTITY.to_string(),
        inspirations: BASELINE_INSPIRATIONS.iter().map(|s| s.to_string()).collect(),
        notes: Some(BASELINE_NOTES.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

impl CreateCharacterPayload {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// `None` removes the key, leaving the default to the service.
    pub fn with_status(mut self, status: Option<CharacterStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn with_inspirations(mut self, inspirations: Vec<String>) -> Self {
        self.inspirations = inspirations;
        self
    }

    pub fn without_notes(mut self) -> Self {
        self.notes = None;
        self
    }
}

pub fn build_draft_character_payload() -> CreateCharacterPayload {
    build_valid_character_payload().with_status(Some(CharacterStatus::Draft))
}

pub fn build_archived_character_payload() -> CreateCharacterPayload {
    build_valid_character_payload().with_status(Some(CharacterStatus::Archived))
}

pub fn build_character_with_categories(categories: Vec<Category>) -> CreateCharacterPayload {
    build_valid_character_payload().with_categories(categories)
}

/// Baseline with the `notes` key absent (not null, not empty).
pub fn build_character_without_notes() -> CreateCharacterPayload {
    build_valid_character_payload().without_notes()
}

// ---------------------------------------------------------------------------
// Invalid payloads
// ---------------------------------------------------------------------------

/// Fields that negative scenarios can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    Name,
    Status,
    Categories,
    Identity,
    Inspirations,
    Notes,
}

impl CharacterField {
    pub const ALL: [CharacterField; 6] = [
        Self::Name,
        Self::Status,
        Self::Categories,
        Self::Identity,
        Self::Inspirations,
        Self::Notes,
    ];

    /// JSON key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Status => "status",
            Self::Categories => "categories",
            Self::Identity => "identity",
            Self::Inspirations => "inspirations",
            Self::Notes => "notes",
        }
    }

    /// Fixed field → structural kind table.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Status | Self::Identity | Self::Notes => FieldKind::String,
            Self::Categories | Self::Inspirations => FieldKind::Array,
        }
    }
}

impl std::fmt::Display for CharacterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Serialize a typed payload into the untyped channel.
pub fn to_json_object(payload: &CreateCharacterPayload) -> Map<String, Value> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => map,
        // A struct with named fields always serializes to an object.
        _ => Map::new(),
    }
}

/// Valid baseline with exactly one field broken.
///
/// `missing` removes the key; every other violation replaces the value with
/// the factory output for the field's kind.
pub fn build_invalid_character_payload(
    field: CharacterField,
    violation: ViolationKind,
) -> Result<Map<String, Value>, CoreError> {
    let mut payload = to_json_object(&build_valid_character_payload());

    if violation == ViolationKind::Missing {
        payload.remove(field.as_str());
        return Ok(payload);
    }

    let invalid = build_invalid_field_value(field.kind(), violation)?;
    payload.insert(field.as_str().to_string(), invalid);
    Ok(payload)
}

/// Single-field PATCH body carrying the invalid value for `field`.
///
/// For `missing` the body is empty, since there is nothing left to send.
pub fn build_invalid_update_payload(
    field: CharacterField,
    violation: ViolationKind,
) -> Result<Map<String, Value>, CoreError> {
    let mut full = build_invalid_character_payload(field, violation)?;
    let mut body = Map::new();
    if let Some(value) = full.remove(field.as_str()) {
        body.insert(field.as_str().to_string(), value);
    }
    Ok(body)
}

/// Interpret a scenario token as a JSON item.
///
/// `true`/`false` become booleans, numeric tokens become numbers, and
/// everything else (including `""` and whitespace) stays a string.
pub fn parse_raw_item(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ if !raw.trim().is_empty() => match raw.trim().parse::<f64>() {
            Ok(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Value::from(n as i64),
            Ok(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            Err(_) => Value::String(raw.to_string()),
        },
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    /// Keys whose values differ between two payload objects, ignoring `name`
    /// (freshly generated on every build).
    fn differing_keys(a: &Map<String, Value>, b: &Map<String, Value>) -> Vec<String> {
        let mut keys: Vec<String> = a.keys().chain(b.keys()).cloned().collect();
        keys.sort();
        keys.dedup();
        keys.into_iter()
            .filter(|k| k != "name" && a.get(k) != b.get(k))
            .collect()
    }

    #[test]
    fn baseline_is_active_with_notes() {
        let payload = build_valid_character_payload();
        assert_eq!(payload.status, Some(CharacterStatus::Active));
        assert_eq!(payload.categories, BASELINE_CATEGORIES.to_vec());
        assert_eq!(payload.inspirations.len(), 3);
        assert!(payload.notes.is_some());
        assert!(!payload.name.is_empty());
    }

    #[test]
    fn variants_only_touch_their_field() {
        assert_eq!(
            build_draft_character_payload().status,
            Some(CharacterStatus::Draft)
        );
        assert_eq!(
            build_archived_character_payload().status,
            Some(CharacterStatus::Archived)
        );

        let custom = build_character_with_categories(vec![Category::Mentor]);
        assert_eq!(custom.categories, vec![Category::Mentor]);
        assert_eq!(custom.status, Some(CharacterStatus::Active));
    }

    #[test]
    fn without_notes_removes_the_key() {
        let obj = to_json_object(&build_character_without_notes());
        assert!(!obj.contains_key("notes"));
    }

    #[test]
    fn missing_removes_only_the_target_key() {
        for field in CharacterField::ALL {
            let payload = build_invalid_character_payload(field, ViolationKind::Missing).unwrap();
            assert!(!payload.contains_key(field.as_str()), "{field} still present");

            let baseline = to_json_object(&build_valid_character_payload());
            for key in baseline.keys() {
                if key != field.as_str() {
                    assert!(payload.contains_key(key), "{key} lost when removing {field}");
                }
            }
        }
    }

    #[test]
    fn non_missing_violation_breaks_exactly_one_field() {
        let baseline = to_json_object(&build_valid_character_payload());

        for field in CharacterField::ALL {
            for violation in ViolationKind::ALL {
                let Ok(expected) = build_invalid_field_value(field.kind(), violation) else {
                    continue;
                };
                let payload = build_invalid_character_payload(field, violation).unwrap();

                assert_eq!(payload[field.as_str()], expected, "{field}/{violation}");
                let diff = differing_keys(&baseline, &payload);
                if field != CharacterField::Name {
                    assert_eq!(diff, vec![field.as_str().to_string()], "{field}/{violation}");
                } else {
                    assert!(diff.is_empty(), "{field}/{violation}: {diff:?}");
                }
            }
        }
    }

    #[test]
    fn unsupported_combination_propagates() {
        let err = build_invalid_character_payload(CharacterField::Categories, ViolationKind::InvalidEnum)
            .unwrap_err();
        assert_matches!(err, CoreError::UnsupportedValueKind { .. });
    }

    #[test]
    fn update_payload_carries_single_field() {
        let body =
            build_invalid_update_payload(CharacterField::Identity, ViolationKind::Number).unwrap();
        assert_eq!(Value::Object(body), json!({ "identity": 123 }));

        let body =
            build_invalid_update_payload(CharacterField::Name, ViolationKind::Missing).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn field_tokens_round_trip() {
        for field in CharacterField::ALL {
            assert_eq!(field.as_str().parse::<CharacterField>().unwrap(), field);
        }
        assert_matches!("age".parse::<CharacterField>(), Err(CoreError::UnknownField(_)));
    }

    #[test]
    fn raw_items_are_coerced_like_scenario_tokens() {
        assert_eq!(parse_raw_item("true"), json!(true));
        assert_eq!(parse_raw_item("false"), json!(false));
        assert_eq!(parse_raw_item("123"), json!(123));
        assert_eq!(parse_raw_item("1.5"), json!(1.5));
        assert_eq!(parse_raw_item(""), json!(""));
        assert_eq!(parse_raw_item("   "), json!("   "));
        assert_eq!(parse_raw_item("abc"), json!("abc"));
    }
}
