use forge_client::ApiResponse;
use forge_core::character::{CharacterModel, CreateCharacterPayload};
use serde_json::Value;

use crate::attachment::Attachment;
use crate::error::StepError;

/// Per-scenario state, created empty for each scenario and dropped after it.
///
/// Every step receives it explicitly; nothing leaks from one scenario into
/// the next.
#[derive(Debug, Default)]
pub struct World {
    /// Last HTTP response received.
    pub response: Option<ApiResponse>,
    /// Body of the last request sent, typed or raw, as JSON.
    pub request_body: Option<Value>,
    /// Typed payload of the last valid create.
    pub create_payload: Option<CreateCharacterPayload>,
    /// Id of the character the scenario created as its starting point, or
    /// of the one it just created.
    pub existing_id: Option<String>,
    /// Canonical model of the character in the last successful response.
    pub api_model: Option<CharacterModel>,
    pub attachments: Vec<Attachment>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a response together with the body that produced it.
    pub fn record(&mut self, response: ApiResponse, request_body: Option<Value>) {
        self.response = Some(response);
        self.request_body = request_body;
    }

    pub fn response(&self) -> Result<&ApiResponse, StepError> {
        self.response.as_ref().ok_or(StepError::MissingState("a response"))
    }

    /// Last response body as untyped JSON.
    pub fn body(&self) -> Result<Value, StepError> {
        Ok(self.response()?.json_value()?)
    }

    pub fn existing_id(&self) -> Result<&str, StepError> {
        self.existing_id
            .as_deref()
            .ok_or(StepError::MissingState("an existing character id"))
    }

    pub fn api_model(&self) -> Result<&CharacterModel, StepError> {
        self.api_model
            .as_ref()
            .ok_or(StepError::MissingState("a character from the API"))
    }

    pub fn create_payload(&self) -> Result<&CreateCharacterPayload, StepError> {
        self.create_payload
            .as_ref()
            .ok_or(StepError::MissingState("a create payload"))
    }

    pub fn request_body(&self) -> Result<&Value, StepError> {
        self.request_body
            .as_ref()
            .ok_or(StepError::MissingState("a request body"))
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}
