use std::fmt;

use forge_client::HealthResponse;

use crate::assertions::{ensure_eq, ensure_status};
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::world::World;

pub const HEALTHY_STATUS: &str = "OK";
pub const SERVICE_NAME: &str = "world-forge";

#[derive(Debug, Clone, PartialEq)]
pub enum HealthStep {
    CheckHealth,
    ExpectHealthy,
}

impl HealthStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::CheckHealth => {
                let response = ctx.health().get_health().await?;
                world.record(response, None);
                Ok(())
            }
            Self::ExpectHealthy => {
                let response = world.response()?;
                ensure_status(response, 200)?;
                let health: HealthResponse = response.json()?;
                ensure_eq(
                    "Health body",
                    HealthResponse {
                        status: HEALTHY_STATUS.to_string(),
                        service: SERVICE_NAME.to_string(),
                    },
                    health,
                )
            }
        }
    }
}

impl fmt::Display for HealthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckHealth => write!(f, "I check the health endpoint"),
            Self::ExpectHealthy => write!(f, "the service should respond as healthy"),
        }
    }
}
