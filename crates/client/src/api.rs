//! Client for the `/characters` endpoints.
//!
//! Steps go through this type instead of building URLs or query strings
//! themselves. Typed methods carry valid payloads; the `*_raw` variants send
//! an arbitrary JSON value verbatim for contract-violating requests.

use forge_core::character::{CreateCharacterPayload, UpdateCharacterPayload};
use serde_json::Value;

use crate::context::ApiContext;
use crate::error::ClientError;
use crate::response::ApiResponse;

const CHARACTERS_PATH: &str = "/characters";

/// Optional pagination for `GET /characters`.
///
/// Values are kept as strings so non-numeric values (`limit=abc`) are
/// expressible. A `None` parameter is left out of the query entirely, which
/// is what exercises the service's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    pub fn limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Query pairs for the defined parameters only.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(page) = &self.page {
            pairs.push(("page", page.as_str()));
        }
        if let Some(limit) = &self.limit {
            pairs.push(("limit", limit.as_str()));
        }
        pairs
    }
}

/// API client for the Character domain.
#[derive(Debug, Clone)]
pub struct CharacterApi {
    ctx: ApiContext,
}

impl CharacterApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ApiContext {
        &self.ctx
    }

    /// `GET /characters[?page=&limit=]`
    pub async fn list_characters(&self, params: &ListParams) -> Result<ApiResponse, ClientError> {
        self.ctx
            .get_with_query(CHARACTERS_PATH, &params.query_pairs())
            .await
    }

    /// `GET /characters/{id}`
    pub async fn get_character_by_id(&self, id: &str) -> Result<ApiResponse, ClientError> {
        self.ctx.get(&character_path(id)).await
    }

    /// `POST /characters`
    pub async fn create_character(
        &self,
        payload: &CreateCharacterPayload,
    ) -> Result<ApiResponse, ClientError> {
        self.ctx.post_json(CHARACTERS_PATH, payload).await
    }

    /// `POST /characters` with an arbitrary body.
    pub async fn create_character_raw(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.ctx.post_json(CHARACTERS_PATH, body).await
    }

    /// `PATCH /characters/{id}`
    pub async fn update_character(
        &self,
        id: &str,
        payload: &UpdateCharacterPayload,
    ) -> Result<ApiResponse, ClientError> {
        self.ctx.patch_json(&character_path(id), payload).await
    }

    /// `PATCH /characters/{id}` with an arbitrary body.
    pub async fn update_character_raw(
        &self,
        id: &str,
        body: &Value,
    ) -> Result<ApiResponse, ClientError> {
        self.ctx.patch_json(&character_path(id), body).await
    }
}

/// An empty id yields `/characters/`, which is how the "no id" request is sent.
fn character_path(id: &str) -> String {
    format!("{CHARACTERS_PATH}/{id}")
}
