use std::fmt;

use crate::steps::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Given,
    When,
    Then,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioStep {
    pub keyword: Keyword,
    pub step: Step,
}

impl fmt::Display for ScenarioStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.step)
    }
}

/// A named, ordered list of steps belonging to a feature.
///
/// ```ignore
/// Scenario::new("health", "Service is healthy")
///     .when(HealthStep::CheckHealth)
///     .then(HealthStep::ExpectHealthy);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub feature: &'static str,
    pub name: String,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn new(feature: &'static str, name: impl Into<String>) -> Self {
        Self {
            feature,
            name: name.into(),
            steps: Vec::new(),
        }
    }

    fn push(mut self, keyword: Keyword, step: impl Into<Step>) -> Self {
        self.steps.push(ScenarioStep {
            keyword,
            step: step.into(),
        });
        self
    }

    pub fn given(self, step: impl Into<Step>) -> Self {
        self.push(Keyword::Given, step)
    }

    pub fn when(self, step: impl Into<Step>) -> Self {
        self.push(Keyword::When, step)
    }

    pub fn then(self, step: impl Into<Step>) -> Self {
        self.push(Keyword::Then, step)
    }

    /// `feature/name`, the string `SUITE_FILTER` is matched against.
    pub fn id(&self) -> String {
        format!("{}/{}", self.feature, self.name)
    }

    pub fn matches(&self, filter: Option<&str>) -> bool {
        filter.is_none_or(|filter| self.id().contains(filter))
    }
}
