use std::fmt;

use forge_core::payload::build_valid_character_payload;
use serde_json::json;

use crate::assertions::{ensure_eq_with, ensure_status, exchange_evidence};
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::steps::character_model;
use crate::world::World;

/// Steps shared across features.
#[derive(Debug, Clone, PartialEq)]
pub enum CommonStep {
    ServiceAvailable,
    /// Create a character through the API as the scenario's starting point.
    ExistingCharacter,
    ExpectStatus(u16),
    /// The body must be exactly `{"error": message}`.
    ExpectErrorMessage(String),
}

impl CommonStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::ServiceAvailable => {
                tracing::debug!(base_url = ctx.api().base_url(), "Using shared API context");
                Ok(())
            }
            Self::ExistingCharacter => {
                let payload = build_valid_character_payload();
                let response = ctx.characters().create_character(&payload).await?;
                ensure_status(&response, 201)?;

                let model = character_model(&response.json_value()?)?;
                tracing::debug!(id = %model.id, "Created starting character");
                world.existing_id = Some(model.id.clone());
                world.api_model = Some(model);
                world.create_payload = Some(payload);
                Ok(())
            }
            Self::ExpectStatus(expected) => ensure_status(world.response()?, *expected),
            Self::ExpectErrorMessage(message) => {
                let response = world.response()?;
                ensure_eq_with("Error body", json!({ "error": message }), world.body()?, || {
                    exchange_evidence("Unexpected error body", world.request_body.as_ref(), response)
                })
            }
        }
    }
}

impl fmt::Display for CommonStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceAvailable => write!(f, "the Character service is available"),
            Self::ExistingCharacter => write!(f, "an existing character created with a valid payload"),
            Self::ExpectStatus(status) => write!(f, "the response status should be {status}"),
            Self::ExpectErrorMessage(message) => write!(f, "the error message should be \"{message}\""),
        }
    }
}
