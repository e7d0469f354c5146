//! In-process stub of the Character service.
//!
//! The stub writes to an [`InMemoryCharacterStore`] that the test's
//! [`SuiteContext`] reads from, so database assertions see exactly what the
//! stub persisted. Its validation rules are the service contract the
//! scenario catalogue expects.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use forge_client::ApiContext;
use forge_core::category::{find_duplicate, Category};
use forge_core::character::CharacterDocument;
use forge_core::status::CharacterStatus;
use forge_db::{CharacterStore, InMemoryCharacterStore};
use forge_suite::context::SuiteContext;
use serde_json::{json, Map, Value};

pub const NOT_FOUND: &str = "Character not found";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum StubError {
    NotFound,
    BadRequest(String),
    Conflict(String),
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StubError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
            StubError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            StubError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

type StubResult<T> = Result<T, StubError>;

fn bad_request(message: impl Into<String>) -> StubError {
    StubError::BadRequest(message.into())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn text(key: &str, value: &Value) -> StubResult<String> {
    match value.as_str() {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(bad_request(format!("{key} must be a non-empty string"))),
    }
}

fn text_list(key: &str, value: &Value) -> StubResult<Vec<String>> {
    let items = value
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| bad_request(format!("{key} must be a non-empty array")))?;
    items.iter().map(|item| text(key, item)).collect()
}

fn categories(value: &Value) -> StubResult<Vec<String>> {
    let categories = text_list("categories", value)?;
    if let Some(unknown) = categories.iter().find(|c| !Category::is_valid(c)) {
        return Err(bad_request(format!("Category {unknown} is not valid")));
    }
    if let Some(duplicate) = find_duplicate(&categories) {
        return Err(bad_request(format!("Category {duplicate} is duplicated")));
    }
    Ok(categories)
}

fn status(value: &Value) -> StubResult<String> {
    let raw = value.as_str().ok_or_else(|| bad_request("status must be a string"))?;
    CharacterStatus::parse(raw)
        .map(|s| s.as_str().to_string())
        .ok_or_else(|| bad_request(CharacterStatus::invalid_message(raw)))
}

fn notes(value: &Value) -> StubResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| bad_request("notes must be a string"))
}

fn object(body: &Value) -> StubResult<&Map<String, Value>> {
    body.as_object().ok_or_else(|| bad_request("Body must be a JSON object"))
}

fn required<'a>(body: &'a Map<String, Value>, key: &str) -> StubResult<&'a Value> {
    body.get(key).ok_or_else(|| bad_request(format!("{key} is required")))
}

async fn ensure_unique_name(store: &InMemoryCharacterStore, name: &str, except: Option<&str>) -> StubResult<()> {
    let taken = store
        .all()
        .await
        .iter()
        .any(|doc| doc.name == name && Some(doc.id.as_str()) != except);
    if taken {
        return Err(StubError::Conflict(format!("Character name {name} already exists")));
    }
    Ok(())
}

fn to_dto(doc: &CharacterDocument) -> Value {
    let mut dto = json!({
        "id": doc.id,
        "name": doc.name,
        "status": doc.status,
        "categories": doc.categories,
        "identity": doc.identity,
        "inspirations": doc.inspirations,
    });
    if let Some(notes) = &doc.notes {
        dto["notes"] = json!(notes);
    }
    dto
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "service": "world-forge" }))
}

fn positive(params: &HashMap<String, String>, key: &str, default: u64) -> u64 {
    params
        .get(key)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

async fn list_characters(
    State(store): State<InMemoryCharacterStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page = positive(&params, "page", 1);
    let limit = positive(&params, "limit", 10);
    let documents = store.all().await;

    let skip = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    let characters: Vec<Value> = documents.iter().skip(skip).take(take).map(to_dto).collect();

    Json(json!({
        "characters": characters,
        "page": page,
        "limit": limit,
        "total": documents.len(),
    }))
}

async fn get_character(
    State(store): State<InMemoryCharacterStore>,
    Path(id): Path<String>,
) -> StubResult<Json<Value>> {
    let doc = store.find_by_id(&id).await.ok().flatten().ok_or(StubError::NotFound)?;
    Ok(Json(json!({ "character": to_dto(&doc) })))
}

async fn create_character(
    State(store): State<InMemoryCharacterStore>,
    Json(body): Json<Value>,
) -> StubResult<(StatusCode, Json<Value>)> {
    let body = object(&body)?;

    let name = text("name", required(body, "name")?)?;
    let status = match body.get("status") {
        Some(value) => status(value)?,
        None => CharacterStatus::default().as_str().to_string(),
    };
    let categories = categories(required(body, "categories")?)?;
    let identity = text("identity", required(body, "identity")?)?;
    let inspirations = text_list("inspirations", required(body, "inspirations")?)?;
    let notes = body.get("notes").map(notes).transpose()?;

    ensure_unique_name(&store, &name, None).await?;

    let now = Utc::now();
    let doc = CharacterDocument {
        id: format!("char_{}", uuid::Uuid::new_v4().simple()),
        name,
        status,
        categories,
        identity,
        inspirations,
        notes,
        created_at: now,
        updated_at: now,
    };
    store.upsert(doc.clone()).await;
    Ok((StatusCode::CREATED, Json(to_dto(&doc))))
}

async fn update_character(
    State(store): State<InMemoryCharacterStore>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StubResult<Json<Value>> {
    let mut doc = store.find_by_id(&id).await.ok().flatten().ok_or(StubError::NotFound)?;
    let body = object(&body)?;
    if body.is_empty() {
        return Err(bad_request("Update body must not be empty"));
    }

    for (key, value) in body {
        match key.as_str() {
            "name" => {
                let name = text("name", value)?;
                ensure_unique_name(&store, &name, Some(&id)).await?;
                doc.name = name;
            }
            "categories" => doc.categories = categories(value)?,
            "identity" => doc.identity = text("identity", value)?,
            "inspirations" => doc.inspirations = text_list("inspirations", value)?,
            "notes" => doc.notes = Some(notes(value)?),
            "status" => return Err(bad_request("status cannot be updated")),
            other => return Err(bad_request(format!("{other} is not an updatable field"))),
        }
    }

    doc.updated_at = Utc::now();
    store.upsert(doc.clone()).await;
    Ok(Json(json!({ "character": to_dto(&doc) })))
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Router for the stub, backed by `store`.
pub fn build_stub_app(store: InMemoryCharacterStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/characters", get(list_characters).post(create_character))
        .route("/characters/{id}", get(get_character).patch(update_character))
        .with_state(store)
}

/// Serve `app` on an ephemeral port and return a client context for it.
pub async fn serve(app: Router) -> ApiContext {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiContext::new(format!("http://{addr}")).unwrap()
}

/// A running stub plus a run context whose store is the stub's own.
pub async fn stub_context() -> (SuiteContext, InMemoryCharacterStore) {
    let store = InMemoryCharacterStore::new();
    let api = serve(build_stub_app(store.clone())).await;
    (SuiteContext::new(api, Arc::new(store.clone())), store)
}
