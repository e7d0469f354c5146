use crate::scenario::Scenario;
use crate::steps::{CommonStep, HealthStep};

pub const FEATURE: &str = "health";

pub fn scenarios() -> Vec<Scenario> {
    vec![Scenario::new(FEATURE, "Service reports healthy")
        .given(CommonStep::ServiceAvailable)
        .when(HealthStep::CheckHealth)
        .then(HealthStep::ExpectHealthy)]
}
