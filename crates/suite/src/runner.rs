//! Sequential scenario execution.
//!
//! Each scenario gets a fresh [`World`] and runs inside
//! `tokio::time::timeout`. A failing step stops its scenario; the run goes
//! on with the next one.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::attachment::Attachment;
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::scenario::Scenario;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Passed,
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one scenario, as written to the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub feature: &'static str,
    pub scenario: String,
    pub status: OutcomeStatus,
    /// Rendered step that failed, when one did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub attachments: Vec<Attachment>,
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.status == OutcomeStatus::Passed
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

struct StepFailure {
    step: Option<String>,
    error: StepError,
}

pub struct Runner<'a> {
    ctx: &'a SuiteContext,
    timeout: Duration,
}

impl<'a> Runner<'a> {
    pub fn new(ctx: &'a SuiteContext, timeout: Duration) -> Self {
        Self { ctx, timeout }
    }

    pub async fn run(&self, scenarios: &[Scenario]) -> RunReport {
        let mut report = RunReport::default();
        for scenario in scenarios {
            report.outcomes.push(self.run_scenario(scenario).await);
        }

        tracing::info!(
            total = report.outcomes.len(),
            passed = report.passed(),
            failed = report.failed(),
            "Run finished",
        );
        report
    }

    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioOutcome {
        let mut world = World::new();
        let started = Instant::now();

        let failure = match tokio::time::timeout(self.timeout, execute(self.ctx, scenario, &mut world)).await
        {
            Ok(Ok(())) => None,
            Ok(Err(failure)) => Some(failure),
            Err(_) => Some(StepFailure {
                step: None,
                error: StepError::Timeout(self.timeout),
            }),
        };
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let mut attachments = world.attachments;
        match failure {
            None => {
                tracing::info!(feature = scenario.feature, scenario = %scenario.name, duration_ms, "Scenario passed");
                ScenarioOutcome {
                    feature: scenario.feature,
                    scenario: scenario.name.clone(),
                    status: OutcomeStatus::Passed,
                    failed_step: None,
                    error: None,
                    attachments,
                    duration_ms,
                }
            }
            Some(StepFailure { step, error }) => {
                tracing::warn!(
                    feature = scenario.feature,
                    scenario = %scenario.name,
                    step = step.as_deref().unwrap_or("-"),
                    error = %error,
                    "Scenario failed",
                );
                if let Some(attachment) = error.attachment() {
                    tracing::debug!(label = %attachment.label, "{}", attachment.render());
                    attachments.push(attachment.clone());
                }
                ScenarioOutcome {
                    feature: scenario.feature,
                    scenario: scenario.name.clone(),
                    status: OutcomeStatus::Failed,
                    failed_step: step,
                    error: Some(error.to_string()),
                    attachments,
                    duration_ms,
                }
            }
        }
    }
}

async fn execute(ctx: &SuiteContext, scenario: &Scenario, world: &mut World) -> Result<(), StepFailure> {
    for step in &scenario.steps {
        tracing::debug!(scenario = %scenario.name, "{step}");
        step.step.run(ctx, world).await.map_err(|error| StepFailure {
            step: Some(step.to_string()),
            error,
        })?;
    }
    Ok(())
}
