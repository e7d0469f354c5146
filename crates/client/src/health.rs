use serde::{Deserialize, Serialize};

use crate::context::ApiContext;
use crate::error::ClientError;
use crate::response::ApiResponse;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct HealthApi {
    ctx: ApiContext,
}

impl HealthApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// `GET /health`
    pub async fn get_health(&self) -> Result<ApiResponse, ClientError> {
        self.ctx.get("/health").await
    }
}
