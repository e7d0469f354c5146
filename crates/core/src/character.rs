//! The three shapes of a character.
//!
//! - [`CharacterDto`]: what the HTTP API exchanges.
//! - [`CharacterDocument`]: what the `characters` collection holds.
//! - [`CharacterModel`]: the canonical shape assertions compare.
//!
//! They are kept as separate types so that drift between the API contract
//! and the persisted shape shows up as a failing comparison. `status` and
//! `categories` stay raw strings on the read side: an out-of-vocabulary value
//! coming back from the service must be observable, not a decode error.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::status::CharacterStatus;
use crate::types::{CharacterId, Timestamp};

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// A character as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub categories: Vec<String>,
    pub identity: String,
    pub inspirations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `GET /characters` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCharactersResponse {
    pub characters: Vec<CharacterDto>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// `GET /characters/{id}` and `PATCH /characters/{id}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEnvelope {
    pub character: CharacterDto,
}

/// Error body returned for every rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Request payloads (typed, valid path only)
// ---------------------------------------------------------------------------

/// Body of `POST /characters`. The id is assigned by the service.
///
/// `status` and `notes` are omitted from the JSON when `None`, which is how
/// the "defaults to DRAFT" and "notes is optional" cases are expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CharacterStatus>,
    pub categories: Vec<Category>,
    pub identity: String,
    pub inspirations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PATCH /characters/{id}`. `status` is deliberately absent: it is
/// not an updatable field, so probing it goes through the untyped channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCharacterPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspirations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateCharacterPayload {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ---------------------------------------------------------------------------
// Persisted shape
// ---------------------------------------------------------------------------

/// A document from the `characters` collection.
///
/// `_id` is an application-assigned string, not an ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    #[serde(rename = "_id")]
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub categories: Vec<String>,
    pub identity: String,
    pub inspirations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Canonical model
// ---------------------------------------------------------------------------

/// Normalized shape used purely for test-side equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterModel {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub categories: Vec<String>,
    pub identity: String,
    pub inspirations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
