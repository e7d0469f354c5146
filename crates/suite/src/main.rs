//! `forge-suite` -- end-to-end checks for the Character service.
//!
//! Runs the whole scenario catalogue against a live service and its MongoDB
//! database, then exits with `0` when every scenario passed, `1` when any
//! failed and `2` when the run could not be set up.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default | Description                              |
//! |-------------------------|----------|---------|------------------------------------------|
//! | `BASE_URL`              | yes      | --      | Service root, e.g. `http://localhost:3001` |
//! | `MONGO_URI`             | yes      | --      | MongoDB connection string                |
//! | `MONGO_DB_NAME`         | yes      | --      | Database holding `characters`            |
//! | `SCENARIO_TIMEOUT_SECS` | no       | `30`    | Budget for a single scenario             |
//! | `SUITE_FILTER`          | no       | --      | Run only scenarios whose id contains it  |
//! | `SUITE_REPORT_PATH`     | no       | --      | Write a JSON report to this path         |

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use forge_client::ApiContext;
use forge_db::MongoCharacterStore;
use forge_suite::config::SuiteConfig;
use forge_suite::context::SuiteContext;
use forge_suite::features;
use forge_suite::report::finish_run;
use forge_suite::runner::Runner;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forge_suite=info,forge_client=info,forge_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SuiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    match run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Suite setup failed");
            ExitCode::from(2)
        }
    }
}

/// Set up the shared context, run the selected scenarios and tear down.
/// Returns whether every scenario passed.
async fn run(config: SuiteConfig) -> anyhow::Result<bool> {
    let api = ApiContext::from_config(&config.client).context("Failed to build the HTTP client")?;
    let store = MongoCharacterStore::connect(&config.mongo)
        .await
        .context("Failed to connect to MongoDB")?;
    let ctx = SuiteContext::new(api, Arc::new(store));

    let scenarios = features::select(config.filter.as_deref());
    tracing::info!(
        base_url = %config.client.base_url,
        scenarios = scenarios.len(),
        timeout_secs = config.scenario_timeout.as_secs(),
        "Starting suite",
    );

    let report = Runner::new(&ctx, config.scenario_timeout).run(&scenarios).await;
    finish_run(&report, config.report_path.as_deref(), ctx.close())
        .await
        .context("Failed to write the report")?;

    Ok(report.is_success())
}
