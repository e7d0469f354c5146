//! The step catalogue.
//!
//! Every phrase a scenario can use is a variant of one of the per-feature
//! enums below, gathered under the closed [`Step`] enum. Steps receive the
//! shared [`SuiteContext`] and the scenario's [`World`] explicitly.

use std::fmt;

use forge_client::ApiResponse;
use forge_core::character::{CharacterDto, CharacterModel};
use forge_core::mapper::map_dto_to_model;
use serde_json::Value;

use crate::assertions::ensure_dto_contract;
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::world::World;

pub mod common;
pub mod create;
pub mod get_by_id;
pub mod health;
pub mod list;
pub mod update;

pub use common::CommonStep;
pub use create::{CreateStep, PayloadVariant};
pub use get_by_id::{CharacterCheck, CharacterRef, GetStep};
pub use health::HealthStep;
pub use list::ListStep;
pub use update::{UpdateStep, UpdateVariant};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Common(CommonStep),
    Health(HealthStep),
    List(ListStep),
    Get(GetStep),
    Create(CreateStep),
    Update(UpdateStep),
}

impl Step {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::Common(step) => step.run(ctx, world).await,
            Self::Health(step) => step.run(ctx, world).await,
            Self::List(step) => step.run(ctx, world).await,
            Self::Get(step) => step.run(ctx, world).await,
            Self::Create(step) => step.run(ctx, world).await,
            Self::Update(step) => step.run(ctx, world).await,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common(step) => write!(f, "{step}"),
            Self::Health(step) => write!(f, "{step}"),
            Self::List(step) => write!(f, "{step}"),
            Self::Get(step) => write!(f, "{step}"),
            Self::Create(step) => write!(f, "{step}"),
            Self::Update(step) => write!(f, "{step}"),
        }
    }
}

macro_rules! impl_from_step {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Step {
                fn from(step: $ty) -> Self {
                    Self::$variant(step)
                }
            }
        )*
    };
}

impl_from_step!(
    Common(CommonStep),
    Health(HealthStep),
    List(ListStep),
    Get(GetStep),
    Create(CreateStep),
    Update(UpdateStep),
);

// ---------------------------------------------------------------------------
// Shared decoding
// ---------------------------------------------------------------------------

/// Check `character` against the DTO contract, then map it to the canonical
/// model.
pub(crate) fn character_model(character: &Value) -> Result<CharacterModel, StepError> {
    ensure_dto_contract(character)?;
    let dto: CharacterDto = serde_json::from_value(character.clone())
        .map_err(|e| StepError::assertion(format!("Character does not decode: {e}")))?;
    Ok(map_dto_to_model(&dto))
}

/// Character carried by a `{ character }` envelope (get and update).
pub(crate) fn enveloped_character(response: &ApiResponse) -> Result<Value, StepError> {
    let body = response.json_value()?;
    match body.get("character") {
        Some(character) => Ok(character.clone()),
        None => Err(StepError::assertion(format!(
            "Response from {} has no character: {body}",
            response.url()
        ))),
    }
}
