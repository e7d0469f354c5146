use std::fmt;

use forge_core::category::Category;
use forge_core::character::UpdateCharacterPayload;
use forge_core::invalid_value::ViolationKind;
use forge_core::mapper::map_document_to_model;
use forge_core::naming::generate_character_name;
use forge_core::payload::{
    build_invalid_update_payload, build_valid_character_payload, parse_raw_item, CharacterField,
};
use forge_core::status::CharacterStatus;
use serde_json::{json, Map, Value};

use crate::assertions::{ensure, ensure_same_model, ensure_status};
use crate::attachment::Attachment;
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::steps::get_by_id::non_existent_id;
use crate::steps::{character_model, enveloped_character};
use crate::world::World;

/// Valid PATCH bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateVariant {
    MultipleFields,
    Categories,
    Inspirations,
}

impl UpdateVariant {
    pub fn build(self) -> UpdateCharacterPayload {
        match self {
            Self::MultipleFields => UpdateCharacterPayload {
                name: Some(generate_character_name()),
                identity: Some("Guardiana de un archivo olvidado".to_string()),
                notes: Some("Revisada tras el primer arco".to_string()),
                ..Default::default()
            },
            Self::Categories => UpdateCharacterPayload {
                categories: Some(vec![Category::Protector, Category::Resiliencia]),
                ..Default::default()
            },
            Self::Inspirations => UpdateCharacterPayload {
                inspirations: Some(vec![
                    "Éowyn".to_string(),
                    "Brienne de Tarth".to_string(),
                ]),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStep {
    Update(UpdateVariant),
    UpdateWithoutId,
    UpdateNonExistent,
    /// PATCH carrying `status`, which is not updatable.
    UpdateStatusField,
    UpdateInvalid {
        field: CharacterField,
        violation: ViolationKind,
    },
    UpdateWithUnknownCategory(String),
    UpdateWithDuplicateCategories,
    UpdateWithInspirationItem(String),
    /// Rename the existing character to the name of another one.
    UpdateWithExistingName,
    UpdateWithEmptyBody,
    /// 200 with the updated character in the envelope.
    ExpectUpdated,
    /// Every field sent is echoed back in the response.
    ExpectReflectsPayload,
    ExpectStored,
}

async fn patch_existing(ctx: &SuiteContext, world: &mut World, body: Value) -> Result<(), StepError> {
    let id = world.existing_id()?.to_string();
    let response = ctx.characters().update_character_raw(&id, &body).await?;
    world.record(response, Some(body));
    Ok(())
}

fn single_field(key: &str, value: Value) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), value);
    Value::Object(body)
}

impl UpdateStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::Update(variant) => {
                let id = world.existing_id()?.to_string();
                let payload = variant.build();
                let response = ctx.characters().update_character(&id, &payload).await?;
                let body = serde_json::to_value(&payload)
                    .map_err(|e| StepError::assertion(format!("Update payload does not serialize: {e}")))?;
                world.record(response, Some(body));
                Ok(())
            }
            Self::UpdateWithoutId => {
                let body = serde_json::to_value(UpdateVariant::MultipleFields.build())
                    .map_err(|e| StepError::assertion(format!("Update payload does not serialize: {e}")))?;
                let response = ctx.characters().update_character_raw("", &body).await?;
                world.record(response, Some(body));
                Ok(())
            }
            Self::UpdateNonExistent => {
                let body = single_field("identity", json!("Nadie"));
                let response = ctx
                    .characters()
                    .update_character_raw(&non_existent_id(), &body)
                    .await?;
                world.record(response, Some(body));
                Ok(())
            }
            Self::UpdateStatusField => {
                let body = single_field("status", json!(CharacterStatus::Archived.as_str()));
                patch_existing(ctx, world, body).await
            }
            Self::UpdateInvalid { field, violation } => {
                let body = build_invalid_update_payload(*field, *violation)?;
                patch_existing(ctx, world, Value::Object(body)).await
            }
            Self::UpdateWithUnknownCategory(category) => {
                patch_existing(ctx, world, single_field("categories", json!([category]))).await
            }
            Self::UpdateWithDuplicateCategories => {
                let duplicated = json!([Category::Dualidad.as_str(), Category::Dualidad.as_str()]);
                patch_existing(ctx, world, single_field("categories", duplicated)).await
            }
            Self::UpdateWithInspirationItem(raw) => {
                let items = json!([parse_raw_item(raw)]);
                patch_existing(ctx, world, single_field("inspirations", items)).await
            }
            Self::UpdateWithExistingName => {
                let other = build_valid_character_payload();
                let response = ctx.characters().create_character(&other).await?;
                ensure_status(&response, 201)?;
                patch_existing(ctx, world, single_field("name", json!(other.name))).await
            }
            Self::UpdateWithEmptyBody => patch_existing(ctx, world, json!({})).await,
            Self::ExpectUpdated => {
                let response = world.response()?;
                ensure_status(response, 200)?;
                let model = character_model(&enveloped_character(response)?)?;
                ensure(
                    model.id == world.existing_id()?,
                    format!("Updated character has id {}", model.id),
                )?;
                world.api_model = Some(model);
                Ok(())
            }
            Self::ExpectReflectsPayload => {
                let sent = world.request_body()?;
                let character = enveloped_character(world.response()?)?;
                let mismatched: Vec<&str> = sent
                    .as_object()
                    .into_iter()
                    .flatten()
                    .filter(|(key, value)| character.get(key.as_str()) != Some(*value))
                    .map(|(key, _)| key.as_str())
                    .collect();
                if mismatched.is_empty() {
                    return Ok(());
                }
                Err(StepError::assertion_with(
                    format!("Update not reflected for {}", mismatched.join(", ")),
                    Attachment::json("Update payload vs response", json!({
                        "payload": sent,
                        "character": character,
                    })),
                ))
            }
            Self::ExpectStored => {
                let api_model = world.api_model()?;
                let document = ctx
                    .store()
                    .find_by_id(&api_model.id)
                    .await?
                    .ok_or_else(|| {
                        StepError::assertion_with(
                            format!("No stored document for {}", api_model.id),
                            Attachment::json("Updated character", json!(api_model)),
                        )
                    })?;
                ensure_same_model("Updated vs database", &map_document_to_model(&document), api_model)
            }
        }
    }
}

impl fmt::Display for UpdateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update(UpdateVariant::MultipleFields) => {
                write!(f, "I update the character with multiple valid fields")
            }
            Self::Update(UpdateVariant::Categories) => {
                write!(f, "I update the character with valid categories")
            }
            Self::Update(UpdateVariant::Inspirations) => {
                write!(f, "I update the character with valid inspirations")
            }
            Self::UpdateWithoutId => write!(f, "I update a character without an id"),
            Self::UpdateNonExistent => write!(f, "I update a character with a non-existent id"),
            Self::UpdateStatusField => write!(f, "I update the character with the unsupported field status"),
            Self::UpdateInvalid { field, violation } => {
                write!(f, "I update the character with {violation} {field}")
            }
            Self::UpdateWithUnknownCategory(category) => {
                write!(f, "I update the character with the unknown category \"{category}\"")
            }
            Self::UpdateWithDuplicateCategories => {
                write!(f, "I update the character with duplicated categories")
            }
            Self::UpdateWithInspirationItem(raw) => {
                write!(f, "I update the character with the inspiration item \"{raw}\"")
            }
            Self::UpdateWithExistingName => {
                write!(f, "I update the character with a name that already exists")
            }
            Self::UpdateWithEmptyBody => write!(f, "I update the character with an empty body"),
            Self::ExpectUpdated => write!(f, "the character should be updated successfully"),
            Self::ExpectReflectsPayload => write!(f, "the response should reflect the update payload"),
            Self::ExpectStored => write!(f, "the updated character should be stored in the database"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_variants_touch_only_their_fields() {
        let categories = UpdateVariant::Categories.build();
        assert!(categories.name.is_none());
        assert_eq!(
            categories.categories,
            Some(vec![Category::Protector, Category::Resiliencia])
        );

        let multiple = UpdateVariant::MultipleFields.build();
        assert!(multiple.name.is_some() && multiple.identity.is_some() && multiple.notes.is_some());
        assert!(multiple.categories.is_none());

        assert!(!UpdateVariant::Inspirations.build().is_empty());
    }

    #[test]
    fn single_field_body_has_one_key() {
        let body = single_field("status", json!("ARCHIVED"));
        assert_eq!(body, json!({ "status": "ARCHIVED" }));
    }
}
