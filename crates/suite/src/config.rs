use std::path::PathBuf;
use std::time::Duration;

use forge_client::ClientConfig;
use forge_core::config::{optional_env, parse_env_or};
use forge_core::error::ConfigError;
use forge_db::MongoConfig;

/// Default per-scenario budget, in seconds.
pub const DEFAULT_SCENARIO_TIMEOUT_SECS: u64 = 30;

/// Suite configuration loaded from environment variables.
///
/// | Env var                 | Default | Meaning                                    |
/// |-------------------------|---------|--------------------------------------------|
/// | `BASE_URL`              | -       | Root URL of the Character service          |
/// | `MONGO_URI`             | -       | Connection string of the backing database  |
/// | `MONGO_DB_NAME`         | -       | Database holding the `characters` collection |
/// | `SCENARIO_TIMEOUT_SECS` | `30`    | Budget for one scenario                    |
/// | `SUITE_FILTER`          | unset   | Only run scenarios whose id contains this  |
/// | `SUITE_REPORT_PATH`     | unset   | Write a JSON run report to this path       |
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub client: ClientConfig,
    pub mongo: MongoConfig,
    pub scenario_timeout: Duration,
    pub filter: Option<String>,
    pub report_path: Option<PathBuf>,
}

impl SuiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let client = ClientConfig::from_env()?;
        let mongo = MongoConfig::from_env()?;
        let timeout_secs: u64 = parse_env_or(
            "SCENARIO_TIMEOUT_SECS",
            DEFAULT_SCENARIO_TIMEOUT_SECS,
            "a whole number of seconds",
        )?;

        Ok(Self {
            client,
            mongo,
            scenario_timeout: Duration::from_secs(timeout_secs),
            filter: optional_env("SUITE_FILTER"),
            report_path: optional_env("SUITE_REPORT_PATH").map(PathBuf::from),
        })
    }
}
