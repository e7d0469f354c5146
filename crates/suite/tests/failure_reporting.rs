//! The runner must turn every kind of failure into a failed outcome with
//! evidence, without aborting the run.

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::routing::get;
use axum::{Json, Router};
use forge_client::ApiContext;
use forge_core::invalid_value::ViolationKind;
use forge_core::payload::CharacterField;
use forge_db::InMemoryCharacterStore;
use forge_suite::context::SuiteContext;
use forge_suite::features;
use forge_suite::runner::{OutcomeStatus, Runner};
use forge_suite::scenario::Scenario;
use forge_suite::steps::{CommonStep, CreateStep, HealthStep, PayloadVariant};
use forge_suite::world::World;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: a service that does not persist fails the database comparison
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unpersisted_create_fails_with_attachment() {
    // The stub writes to one store, the run context reads another.
    let api = common::serve(common::build_stub_app(InMemoryCharacterStore::new())).await;
    let ctx = SuiteContext::new(api, Arc::new(InMemoryCharacterStore::new()));

    let scenario = Scenario::new("character-create", "Create is stored")
        .when(CreateStep::Create(PayloadVariant::Baseline))
        .then(CreateStep::ExpectCreated)
        .then(CreateStep::ExpectStored);
    let outcome = Runner::new(&ctx, Duration::from_secs(5)).run_scenario(&scenario).await;

    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert_eq!(
        outcome.failed_step.as_deref(),
        Some("Then the created character should be stored in the database")
    );
    assert!(outcome.error.unwrap().ends_with("was not stored"));
    assert_eq!(outcome.attachments.len(), 1);
    assert_eq!(outcome.attachments[0].label, "Created character");
}

// ---------------------------------------------------------------------------
// Test: wrong status carries request and response evidence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_status_is_reported_with_response_body() {
    let (ctx, _store) = common::stub_context().await;

    let scenario = Scenario::new("character-create", "Wrong expectation")
        .when(CreateStep::Create(PayloadVariant::Baseline))
        .then(CommonStep::ExpectStatus(400));
    let outcome = Runner::new(&ctx, Duration::from_secs(5)).run_scenario(&scenario).await;

    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert_eq!(outcome.error.as_deref(), Some("Expected status 400, got 201"));
    let evidence = &outcome.attachments[0].content;
    assert_eq!(evidence["responseStatus"], 201);
    assert!(evidence["responseBody"]["id"].is_string());
}

// ---------------------------------------------------------------------------
// Test: a wrong error body carries the request payload and the response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_error_body_is_reported_with_request_payload() {
    let (ctx, _store) = common::stub_context().await;

    let scenario = Scenario::new("character-create", "Wrong error message")
        .when(CreateStep::CreateInvalid {
            field: CharacterField::Status,
            violation: ViolationKind::InvalidEnum,
        })
        .then(CommonStep::ExpectStatus(400))
        .then(CommonStep::ExpectErrorMessage(common::NOT_FOUND.to_string()));
    let outcome = Runner::new(&ctx, Duration::from_secs(5)).run_scenario(&scenario).await;

    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert!(outcome.error.unwrap().starts_with("Error body: expected"));
    assert_eq!(outcome.attachments.len(), 1);

    let evidence = &outcome.attachments[0];
    assert_eq!(evidence.label, "Unexpected error body");
    assert_eq!(evidence.content["responseStatus"], 400);
    assert!(evidence.content["requestPayload"]["name"].is_string());
    assert!(evidence.content["responseBody"]["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: a slow service trips the per-scenario budget
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_service_times_out() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "status": "OK", "service": "world-forge" }))
        }),
    );
    let api = common::serve(app).await;
    let ctx = SuiteContext::new(api, Arc::new(InMemoryCharacterStore::new()));

    let scenario = Scenario::new("health", "Slow health")
        .when(HealthStep::CheckHealth)
        .then(HealthStep::ExpectHealthy);
    let outcome = Runner::new(&ctx, Duration::from_millis(100))
        .run_scenario(&scenario)
        .await;

    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert_eq!(outcome.failed_step, None);
    assert!(outcome.error.unwrap().starts_with("Scenario exceeded its"));
}

// ---------------------------------------------------------------------------
// Test: an unreachable service fails every scenario but the run completes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_service_fails_scenarios_without_aborting() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiContext::new(format!("http://{addr}")).unwrap();
    let ctx = SuiteContext::new(api, Arc::new(InMemoryCharacterStore::new()));
    let scenarios = features::select(Some("health/"));

    let report = Runner::new(&ctx, Duration::from_secs(5)).run(&scenarios).await;

    assert_eq!(report.outcomes.len(), scenarios.len());
    assert_eq!(report.failed(), scenarios.len());
    assert!(!report.is_success());
}

// ---------------------------------------------------------------------------
// Test: an assertion with nothing to assert on is a missing-state failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn assertion_without_request_reports_missing_state() {
    let (ctx, _store) = common::stub_context().await;
    let mut world = World::new();

    let err = CommonStep::ExpectStatus(200).run(&ctx, &mut world).await.unwrap_err();
    assert_matches!(err, forge_suite::error::StepError::MissingState("a response"));
}

// ---------------------------------------------------------------------------
// Test: Arrange leaves an existing character in the world
// ---------------------------------------------------------------------------

#[tokio::test]
async fn existing_character_is_created_and_stored() {
    let (ctx, store) = common::stub_context().await;
    let mut world = World::new();

    CommonStep::ExistingCharacter.run(&ctx, &mut world).await.unwrap();

    let id = world.existing_id().unwrap().to_string();
    assert!(id.starts_with("char_"));
    assert_eq!(world.api_model().unwrap().status, "ACTIVE");
    assert_eq!(store.len().await, 1);
}
