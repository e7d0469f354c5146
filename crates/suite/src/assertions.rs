//! Assertion helpers shared by the step modules.
//!
//! Each helper returns a [`StepError::Assertion`] on mismatch, carrying a JSON
//! attachment with the evidence.

use std::fmt::Debug;

use forge_client::ApiResponse;
use forge_core::category::Category;
use forge_core::character::CharacterModel;
use forge_core::status::CharacterStatus;
use serde_json::{json, Value};

use crate::attachment::Attachment;
use crate::error::StepError;

pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), StepError> {
    if condition {
        Ok(())
    } else {
        Err(StepError::assertion(message))
    }
}

pub fn ensure_eq<T: PartialEq + Debug>(label: &str, expected: T, actual: T) -> Result<(), StepError> {
    if expected == actual {
        return Ok(());
    }
    Err(StepError::assertion(format!(
        "{label}: expected {expected:?}, got {actual:?}"
    )))
}

/// Like [`ensure_eq`], attaching `evidence` on mismatch.
pub fn ensure_eq_with<T: PartialEq + Debug>(
    label: &str,
    expected: T,
    actual: T,
    evidence: impl FnOnce() -> Attachment,
) -> Result<(), StepError> {
    if expected == actual {
        return Ok(());
    }
    Err(StepError::assertion_with(
        format!("{label}: expected {expected:?}, got {actual:?}"),
        evidence(),
    ))
}

/// The request body sent and the response received, for a failed check on
/// the response.
pub fn exchange_evidence(label: &str, request_body: Option<&Value>, response: &ApiResponse) -> Attachment {
    Attachment::json(
        label,
        json!({
            "requestUrl": response.url(),
            "requestPayload": request_body,
            "responseStatus": response.status(),
            "responseBody": body_for_report(response),
        }),
    )
}

/// Response body as JSON when it parses, as a string otherwise.
pub fn body_for_report(response: &ApiResponse) -> Value {
    response
        .json_value()
        .unwrap_or_else(|_| Value::String(response.text()))
}

pub fn ensure_status(response: &ApiResponse, expected: u16) -> Result<(), StepError> {
    if response.status() == expected {
        return Ok(());
    }
    Err(StepError::assertion_with(
        format!("Expected status {expected}, got {}", response.status()),
        Attachment::json(
            "Unexpected status",
            json!({
                "requestUrl": response.url(),
                "expectedStatus": expected,
                "responseStatus": response.status(),
                "responseBody": body_for_report(response),
            }),
        ),
    ))
}

/// Compare two canonical models, attaching both on mismatch.
pub fn ensure_same_model(
    label: &str,
    expected: &CharacterModel,
    actual: &CharacterModel,
) -> Result<(), StepError> {
    if expected == actual {
        return Ok(());
    }
    Err(StepError::assertion_with(
        format!("{label}: models differ in {}", differing_fields(expected, actual).join(", ")),
        Attachment::json(
            label,
            json!({
                "expected": expected,
                "actual": actual,
            }),
        ),
    ))
}

fn differing_fields(expected: &CharacterModel, actual: &CharacterModel) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if expected.id != actual.id {
        fields.push("id");
    }
    if expected.name != actual.name {
        fields.push("name");
    }
    if expected.status != actual.status {
        fields.push("status");
    }
    if expected.categories != actual.categories {
        fields.push("categories");
    }
    if expected.identity != actual.identity {
        fields.push("identity");
    }
    if expected.inspirations != actual.inspirations {
        fields.push("inspirations");
    }
    if expected.notes != actual.notes {
        fields.push("notes");
    }
    fields
}

// ---------------------------------------------------------------------------
// DTO contract
// ---------------------------------------------------------------------------

fn is_string_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if items.iter().all(Value::is_string))
}

/// A non-empty array whose items are all non-blank strings.
pub fn is_non_blank_string_list(value: Option<&Value>) -> bool {
    matches!(
        value,
        Some(Value::Array(items))
            if !items.is_empty()
                && items.iter().all(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()))
    )
}

/// Structural violations of the character DTO contract, checked on the raw
/// JSON so that a wrong type is reported instead of failing to decode.
pub fn dto_contract_violations(character: &Value) -> Vec<String> {
    let mut violations = Vec::new();
    let Some(object) = character.as_object() else {
        violations.push(format!("character is not an object: {character}"));
        return violations;
    };

    for key in ["id", "name", "identity"] {
        if !object.get(key).is_some_and(Value::is_string) {
            violations.push(format!("{key} must be a string"));
        }
    }

    match object.get("status").and_then(Value::as_str) {
        Some(status) if CharacterStatus::is_valid(status) => {}
        Some(status) => violations.push(CharacterStatus::invalid_message(status)),
        None => violations.push("status must be a string".to_string()),
    }

    if is_string_array(object.get("categories")) {
        for category in object["categories"].as_array().into_iter().flatten() {
            let category = category.as_str().unwrap_or_default();
            if !Category::is_valid(category) {
                violations.push(format!("unknown category {category}"));
            }
        }
    } else {
        violations.push("categories must be an array of strings".to_string());
    }

    if !is_non_blank_string_list(object.get("inspirations")) {
        violations.push("inspirations must be a non-empty array of non-empty strings".to_string());
    }

    if let Some(notes) = object.get("notes") {
        if !notes.is_string() {
            violations.push("notes must be a string when present".to_string());
        }
    }

    violations
}

pub fn ensure_dto_contract(character: &Value) -> Result<(), StepError> {
    let violations = dto_contract_violations(character);
    if violations.is_empty() {
        return Ok(());
    }
    Err(StepError::assertion_with(
        format!("Character breaks the DTO contract: {}", violations.join("; ")),
        Attachment::json("Contract violations", json!({ "character": character, "violations": violations })),
    ))
}
