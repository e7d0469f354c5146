//! Invalid-value factory for negative-path payloads.
//!
//! Given the structural kind of a field and a named violation, returns a
//! JSON value that breaks the field's type or domain. Omitting a field is
//! not a value: [`ViolationKind::Missing`] is rejected here and handled by
//! the payload builder, which removes the key instead.

use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::CoreError;

/// Whitespace-only stand-in for a string field.
const STRING_SPACES: &str = "       ";

/// Whitespace-only string placed where an array is expected.
const ARRAY_SPACES: &str = "   ";

/// Out-of-vocabulary token for enum-backed string fields.
pub const INVALID_ENUM_TOKEN: &str = "ILEGAL";

/// Structural kind of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Array,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named category of intentionally invalid input.
///
/// Tokens match the ones used in scenario tables (`booleanFalse`,
/// `invalidEnum`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Missing,
    Empty,
    Spaces,
    Null,
    BooleanFalse,
    BooleanTrue,
    Number,
    InvalidEnum,
    /// An array where a string is expected.
    Array,
    /// A string where an array is expected.
    String,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 10] = [
        Self::Missing,
        Self::Empty,
        Self::Spaces,
        Self::Null,
        Self::BooleanFalse,
        Self::BooleanTrue,
        Self::Number,
        Self::InvalidEnum,
        Self::Array,
        Self::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::Spaces => "spaces",
            Self::Null => "null",
            Self::BooleanFalse => "booleanFalse",
            Self::BooleanTrue => "booleanTrue",
            Self::Number => "number",
            Self::InvalidEnum => "invalidEnum",
            Self::Array => "array",
            Self::String => "string",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownViolationKind(s.to_string()))
    }
}

/// Build a value violating a field of the given kind.
///
/// Fails with [`CoreError::UnsupportedOperation`] for `missing` and with
/// [`CoreError::UnsupportedValueKind`] for combinations that make no sense
/// for the field kind (e.g. `invalidEnum` on an array).
pub fn build_invalid_field_value(
    field_kind: FieldKind,
    violation: ViolationKind,
) -> Result<Value, CoreError> {
    use ViolationKind as V;

    if violation == V::Missing {
        return Err(CoreError::UnsupportedOperation { violation });
    }

    let value = match (field_kind, violation) {
        (_, V::Null) => Value::Null,
        (_, V::BooleanFalse) => json!(false),
        (_, V::BooleanTrue) => json!(true),
        (_, V::Number) => json!(123),

        (FieldKind::String, V::Empty) => json!(""),
        (FieldKind::String, V::Spaces) => json!(STRING_SPACES),
        (FieldKind::String, V::InvalidEnum) => json!(INVALID_ENUM_TOKEN),
        (FieldKind::String, V::Array) => json!([]),

        (FieldKind::Array, V::Empty) => json!([]),
        (FieldKind::Array, V::Spaces) => json!(ARRAY_SPACES),
        (FieldKind::Array, V::String) => json!("invalid"),

        (field_kind, violation) => {
            return Err(CoreError::UnsupportedValueKind {
                field_kind,
                violation,
            })
        }
    };

    Ok(value)
}
