//! HTTP client for the Character service under test.
//!
//! A deliberately thin passthrough: one attempt per call, no retries, no
//! client-side validation. Every call hands back the raw [`ApiResponse`] so
//! scenarios observe the service's true wire behaviour, error statuses
//! included. Only transport failures are errors.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod health;
pub mod response;

pub use api::{CharacterApi, ListParams};
pub use config::ClientConfig;
pub use context::ApiContext;
pub use error::ClientError;
pub use health::{HealthApi, HealthResponse};
pub use response::ApiResponse;
pub use reqwest::StatusCode;
