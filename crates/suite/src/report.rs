use std::fmt::Display;
use std::fs::File;
use std::future::Future;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::runner::RunReport;

/// Write `report` as pretty-printed JSON to `path`, replacing any existing
/// file.
pub fn write_json_report(report: &RunReport, path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// One line per failed scenario, for the end-of-run log.
pub fn failure_lines(report: &RunReport) -> Vec<String> {
    report
        .failures()
        .map(|outcome| {
            format!(
                "{}/{}: {}",
                outcome.feature,
                outcome.scenario,
                outcome.error.as_deref().unwrap_or("failed")
            )
        })
        .collect()
}

/// End of a run: log the failures, write the report when a path is set,
/// then await `close`. A failing `close` is logged and never drops the
/// report; the write result is returned after closing either way.
pub async fn finish_run<E: Display>(
    report: &RunReport,
    report_path: Option<&Path>,
    close: impl Future<Output = Result<(), E>>,
) -> std::io::Result<()> {
    for line in failure_lines(report) {
        tracing::warn!("{line}");
    }

    let written = match report_path {
        Some(path) => write_json_report(report, path).inspect(|()| {
            tracing::info!(path = %path.display(), "Report written");
        }),
        None => Ok(()),
    };

    if let Err(e) = close.await {
        tracing::error!(error = %e, "Failed to close the MongoDB connection");
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{OutcomeStatus, ScenarioOutcome};

    fn report() -> RunReport {
        RunReport {
            outcomes: vec![ScenarioOutcome {
                feature: "character-create",
                scenario: "Create with a valid payload".to_string(),
                status: OutcomeStatus::Failed,
                failed_step: Some("Then the response status should be 201".to_string()),
                error: Some("Expected status 201, got 400".to_string()),
                attachments: Vec::new(),
                duration_ms: 12,
            }],
        }
    }

    #[test]
    fn failure_lines_name_scenario_and_error() {
        assert_eq!(
            failure_lines(&report()),
            vec!["character-create/Create with a valid payload: Expected status 201, got 400"]
        );
    }

    #[test]
    fn writes_report_file() {
        let path = std::env::temp_dir().join(format!("forge-suite-report-{}.json", uuid::Uuid::new_v4()));
        write_json_report(&report(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["outcomes"][0]["status"], "failed");
        assert_eq!(written["outcomes"][0]["duration_ms"], 12);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn report_survives_failed_close() {
        let path = std::env::temp_dir().join(format!("forge-suite-report-{}.json", uuid::Uuid::new_v4()));

        finish_run(&report(), Some(&path), async { Err("connection reset") })
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Create with a valid payload"));
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn close_runs_even_when_the_report_cannot_be_written() {
        let closed = std::sync::atomic::AtomicBool::new(false);
        let path = std::env::temp_dir()
            .join(format!("forge-suite-missing-{}", uuid::Uuid::new_v4()))
            .join("report.json");

        let result = finish_run(&report(), Some(&path), async {
            closed.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok::<(), String>(())
        })
        .await;

        assert!(result.is_err());
        assert!(closed.load(std::sync::atomic::Ordering::SeqCst));
    }
}
