use std::fmt;

use forge_core::category::Category;
use forge_core::character::CreateCharacterPayload;
use forge_core::invalid_value::ViolationKind;
use forge_core::mapper::{expected_model_from_payload, map_document_to_model};
use forge_core::payload::{
    build_archived_character_payload, build_character_with_categories,
    build_character_without_notes, build_draft_character_payload, build_invalid_character_payload,
    build_valid_character_payload, parse_raw_item, to_json_object, CharacterField,
};
use serde_json::{json, Value};

use crate::assertions::{ensure, ensure_eq_with, ensure_same_model, ensure_status, exchange_evidence};
use crate::attachment::Attachment;
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::steps::character_model;
use crate::world::World;

/// Valid create payloads, all overlays on the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadVariant {
    Baseline,
    Draft,
    Archived,
    Categories(Vec<Category>),
    WithoutNotes,
    WithoutStatus,
}

impl PayloadVariant {
    pub fn build(&self) -> CreateCharacterPayload {
        match self {
            Self::Baseline => build_valid_character_payload(),
            Self::Draft => build_draft_character_payload(),
            Self::Archived => build_archived_character_payload(),
            Self::Categories(categories) => build_character_with_categories(categories.clone()),
            Self::WithoutNotes => build_character_without_notes(),
            Self::WithoutStatus => build_valid_character_payload().with_status(None),
        }
    }
}

impl fmt::Display for PayloadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => write!(f, "a valid payload"),
            Self::Draft => write!(f, "a draft payload"),
            Self::Archived => write!(f, "an archived payload"),
            Self::Categories(categories) => {
                let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
                write!(f, "categories {}", names.join(", "))
            }
            Self::WithoutNotes => write!(f, "a payload without notes"),
            Self::WithoutStatus => write!(f, "a payload without status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateStep {
    Create(PayloadVariant),
    CreateInvalid {
        field: CharacterField,
        violation: ViolationKind,
    },
    CreateWithUnknownCategory(String),
    CreateWithDuplicateCategories,
    CreateWithInspirationItem(String),
    /// Create a character, then another one with the same name.
    CreateWithExistingName,
    /// 201 with a non-empty id. Records the character as the scenario's
    /// current one.
    ExpectCreated,
    ExpectMatchesPayload,
    ExpectStored,
    ExpectStatusField(String),
    ExpectNotesAbsent,
    /// The created character is among the stored documents with `status`.
    ExpectListedUnderStatus(String),
    /// Fetching the created character returns the same canonical model.
    ExpectFetchMatchesCreated,
}

async fn send_raw(ctx: &SuiteContext, world: &mut World, body: Value) -> Result<(), StepError> {
    let response = ctx.characters().create_character_raw(&body).await?;
    world.record(response, Some(body));
    Ok(())
}

async fn send_typed(
    ctx: &SuiteContext,
    world: &mut World,
    payload: CreateCharacterPayload,
) -> Result<(), StepError> {
    let response = ctx.characters().create_character(&payload).await?;
    world.record(response, Some(Value::Object(to_json_object(&payload))));
    world.create_payload = Some(payload);
    Ok(())
}

impl CreateStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::Create(variant) => send_typed(ctx, world, variant.build()).await,
            Self::CreateInvalid { field, violation } => {
                let body = build_invalid_character_payload(*field, *violation)?;
                send_raw(ctx, world, Value::Object(body)).await
            }
            Self::CreateWithUnknownCategory(category) => {
                let mut body = to_json_object(&build_valid_character_payload());
                body.insert("categories".into(), json!([category]));
                send_raw(ctx, world, Value::Object(body)).await
            }
            Self::CreateWithDuplicateCategories => {
                let mut body = to_json_object(&build_valid_character_payload());
                body.insert(
                    "categories".into(),
                    json!([Category::Mentor.as_str(), Category::Mentor.as_str()]),
                );
                send_raw(ctx, world, Value::Object(body)).await
            }
            Self::CreateWithInspirationItem(raw) => {
                let mut body = to_json_object(&build_valid_character_payload());
                body.insert("inspirations".into(), json!([parse_raw_item(raw)]));
                send_raw(ctx, world, Value::Object(body)).await
            }
            Self::CreateWithExistingName => {
                let first = build_valid_character_payload();
                let response = ctx.characters().create_character(&first).await?;
                ensure_status(&response, 201)?;

                let second = build_valid_character_payload().with_name(first.name.clone());
                send_typed(ctx, world, second).await
            }
            Self::ExpectCreated => {
                let response = world.response()?;
                ensure_status(response, 201)?;
                let model = character_model(&response.json_value()?)?;
                ensure(!model.id.trim().is_empty(), "Created character has an empty id")?;
                world.existing_id = Some(model.id.clone());
                world.api_model = Some(model);
                Ok(())
            }
            Self::ExpectMatchesPayload => {
                let actual = world.api_model()?;
                let expected = expected_model_from_payload(&actual.id, world.create_payload()?);
                ensure_same_model("Created vs payload", &expected, actual)
            }
            Self::ExpectStored => {
                let api_model = world.api_model()?.clone();
                let stored = ctx.store().find_by_id(&api_model.id).await?;
                let Some(document) = stored else {
                    return Err(StepError::assertion_with(
                        format!("Character {} was not stored", api_model.id),
                        Attachment::json("Created character", json!(api_model)),
                    ));
                };
                ensure_same_model("Created vs database", &map_document_to_model(&document), &api_model)
            }
            Self::ExpectStatusField(status) => {
                let response = world.response()?;
                let body = world.body()?;
                ensure_eq_with(
                    "status",
                    Some(status.as_str()),
                    body.get("status").and_then(Value::as_str),
                    || exchange_evidence("Unexpected status field", world.request_body.as_ref(), response),
                )
            }
            Self::ExpectNotesAbsent => {
                let response = world.response()?;
                let body = world.body()?;
                match body.get("notes") {
                    None => Ok(()),
                    Some(notes) => Err(StepError::assertion_with(
                        format!("Expected no notes key, got {notes}"),
                        exchange_evidence("Unexpected notes", world.request_body.as_ref(), response),
                    )),
                }
            }
            Self::ExpectListedUnderStatus(status) => {
                let id = world.existing_id()?.to_string();
                let documents = ctx.store().find_by_status(status).await?;
                ensure(
                    documents.iter().any(|doc| doc.id == id),
                    format!("Character {id} is not stored under status {status}"),
                )
            }
            Self::ExpectFetchMatchesCreated => {
                let created = world.api_model()?.clone();
                let response = ctx.characters().get_character_by_id(&created.id).await?;
                ensure_status(&response, 200)?;
                let body = response.json_value()?;
                let fetched = character_model(body.get("character").unwrap_or(&Value::Null))?;
                world.attach(Attachment::json("Fetched character", json!(fetched)));
                world.record(response, None);
                ensure_same_model("Created vs fetched", &created, &fetched)
            }
        }
    }
}

impl fmt::Display for CreateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(variant) => write!(f, "I create a character with {variant}"),
            Self::CreateInvalid { field, violation } => {
                write!(f, "I create a character with {violation} {field}")
            }
            Self::CreateWithUnknownCategory(category) => {
                write!(f, "I create a character with the unknown category \"{category}\"")
            }
            Self::CreateWithDuplicateCategories => {
                write!(f, "I create a character with duplicated categories")
            }
            Self::CreateWithInspirationItem(raw) => {
                write!(f, "I create a character with the inspiration item \"{raw}\"")
            }
            Self::CreateWithExistingName => {
                write!(f, "I create a character with a name that already exists")
            }
            Self::ExpectCreated => write!(f, "the character should be created successfully"),
            Self::ExpectMatchesPayload => write!(f, "the created character should match the payload"),
            Self::ExpectStored => write!(f, "the created character should be stored in the database"),
            Self::ExpectStatusField(status) => write!(f, "the character status should be \"{status}\""),
            Self::ExpectNotesAbsent => write!(f, "the response should not contain notes"),
            Self::ExpectListedUnderStatus(status) => {
                write!(f, "the created character should be stored under status \"{status}\"")
            }
            Self::ExpectFetchMatchesCreated => {
                write!(f, "fetching the created character should return the same character")
            }
        }
    }
}
