use std::fmt;

use forge_core::category::Category;
use forge_core::mapper::map_document_to_model;
use forge_core::status::CharacterStatus;
use serde_json::{json, Value};

use crate::assertions::{ensure, ensure_same_model, ensure_status, is_non_blank_string_list};
use crate::attachment::Attachment;
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::steps::{character_model, enveloped_character};
use crate::world::World;

/// Which id a get-by-id request targets.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterRef {
    Literal(String),
    /// The character created by the scenario's Arrange step.
    Existing,
    /// A freshly generated id no character can have.
    NonExistent,
}

impl CharacterRef {
    pub(crate) fn resolve(&self, world: &World) -> Result<String, StepError> {
        match self {
            Self::Literal(id) => Ok(id.clone()),
            Self::Existing => Ok(world.existing_id()?.to_string()),
            Self::NonExistent => Ok(non_existent_id()),
        }
    }
}

pub(crate) fn non_existent_id() -> String {
    format!("missing_{}", uuid::Uuid::new_v4().simple())
}

/// Field-level checks on the character of a get response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterCheck {
    ValidId,
    Name,
    ValidStatus,
    Categories,
    EachCategoryValid,
    Identity,
    Inspirations,
    NotesValidIfPresent,
}

impl CharacterCheck {
    fn verify(self, character: &Value) -> Result<(), StepError> {
        let non_empty_str = |key: &str| {
            character
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|v| !v.trim().is_empty())
        };
        let string_items = |key: &str| {
            character
                .get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>())
        };

        match self {
            Self::ValidId => ensure(non_empty_str("id"), "id should be a non-empty string"),
            Self::Name => ensure(non_empty_str("name"), "name should be a non-empty string"),
            Self::Identity => ensure(non_empty_str("identity"), "identity should be a non-empty string"),
            Self::ValidStatus => {
                let status = character.get("status").and_then(Value::as_str).unwrap_or_default();
                ensure(
                    CharacterStatus::is_valid(status),
                    CharacterStatus::invalid_message(status),
                )
            }
            Self::Categories => ensure(
                matches!(string_items("categories"), Some(Some(_))),
                "categories should be an array of strings",
            ),
            Self::EachCategoryValid => match string_items("categories") {
                Some(Some(categories)) => {
                    let unknown: Vec<&str> = categories
                        .into_iter()
                        .filter(|c| !Category::is_valid(c))
                        .collect();
                    ensure(
                        unknown.is_empty(),
                        format!("Unknown categories: {}", unknown.join(", ")),
                    )
                }
                _ => Err(StepError::assertion("categories should be an array of strings")),
            },
            Self::Inspirations => ensure(
                is_non_blank_string_list(character.get("inspirations")),
                "inspirations should be a non-empty array of non-empty strings",
            ),
            Self::NotesValidIfPresent => ensure(
                character.get("notes").is_none_or(Value::is_string),
                "notes should be a string when present",
            ),
        }
    }
}

impl fmt::Display for CharacterCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Self::ValidId => "a valid id",
            Self::Name => "a name",
            Self::ValidStatus => "a valid status",
            Self::Categories => "categories",
            Self::EachCategoryValid => "only valid categories",
            Self::Identity => "an identity",
            Self::Inspirations => "inspirations",
            Self::NotesValidIfPresent => "valid notes if present",
        };
        write!(f, "the character should have {phrase}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GetStep {
    Request(CharacterRef),
    /// 200 with a `character` in the body.
    ExpectReturned,
    Check(CharacterCheck),
    /// The returned character equals the stored document.
    ExpectMatchesDatabase,
}

impl GetStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::Request(target) => {
                let id = target.resolve(world)?;
                let response = ctx.characters().get_character_by_id(&id).await?;
                world.record(response, None);
                Ok(())
            }
            Self::ExpectReturned => {
                let response = world.response()?;
                ensure_status(response, 200)?;
                let model = character_model(&enveloped_character(response)?)?;
                world.api_model = Some(model);
                Ok(())
            }
            Self::Check(check) => check.verify(&enveloped_character(world.response()?)?),
            Self::ExpectMatchesDatabase => {
                let api_model = world.api_model()?.clone();
                let document = ctx
                    .store()
                    .find_by_id(&api_model.id)
                    .await?
                    .ok_or_else(|| {
                        StepError::assertion_with(
                            format!("No stored document for {}", api_model.id),
                            Attachment::json("Returned character", json!(api_model)),
                        )
                    })?;
                ensure_same_model("API vs database", &map_document_to_model(&document), &api_model)
            }
        }
    }
}

impl fmt::Display for GetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(CharacterRef::Literal(id)) => write!(f, "I request the character with id \"{id}\""),
            Self::Request(CharacterRef::Existing) => write!(f, "I request the existing character by its id"),
            Self::Request(CharacterRef::NonExistent) => write!(f, "I request a character with a non-existent id"),
            Self::ExpectReturned => write!(f, "the character should be returned successfully"),
            Self::Check(check) => write!(f, "{check}"),
            Self::ExpectMatchesDatabase => write!(f, "the character should match the stored document"),
        }
    }
}
