use crate::analytics::latency::LatencyStatistics;
use crate::config::{BenchmarkConfig, Scenario, Target};
use crate::error::BenchError;
use crate::test_runner::run_test;
use chrono::Utc;
use http_bench_report::hardware::BenchmarkHardware;
use http_bench_report::report::BenchmarkReport;
use http_bench_report::trial_params::TrialParams;
use http_bench_report::trial_summary::TrialSummary;
use std::path::PathBuf;
use tracing::{error, info};

/// Runs every scenario against every target, one trial at a time.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    output_dir: Option<PathBuf>,
    identifier: Option<String>,
}

impl BenchmarkRunner {
    pub fn new(
        config: BenchmarkConfig,
        output_dir: Option<PathBuf>,
        identifier: Option<String>,
    ) -> Self {
        Self {
            config,
            output_dir,
            identifier,
        }
    }

    pub async fn run(&self) -> Result<BenchmarkReport, BenchError> {
        let trials_count = self.config.scenarios.len() * self.config.targets.len();
        info!(
            "Starting {} trials, {} requests with {} workers each",
            trials_count, self.config.requests, self.config.workers
        );

        let mut trials = Vec::with_capacity(trials_count);
        for scenario in &self.config.scenarios {
            for target in &self.config.targets {
                let trial = self.run_trial(target, scenario).await.map_err(|e| {
                    error!("Trial {} - {} failed: {e}", target.name, scenario.name);
                    BenchError::TrialFailed {
                        target: target.name.clone(),
                        scenario: scenario.name.clone(),
                        source: Box::new(e),
                    }
                })?;
                println!("{}", trial.result_line());
                trials.push(trial);
            }
        }
        info!("All trials finished");

        let hardware =
            BenchmarkHardware::get_system_info_with_identifier(self.identifier.clone());
        let report = BenchmarkReport::new(
            Utc::now().to_rfc3339(),
            self.identifier.clone(),
            hardware,
            trials,
        );
        report.print_summary();

        if let Some(output_dir) = &self.output_dir {
            let path = report
                .dump_to_json(output_dir)
                .map_err(|e| BenchError::CannotWriteReport(e.to_string()))?;
            info!("Report saved to: {}", path.display());
        }

        Ok(report)
    }

    async fn run_trial(
        &self,
        target: &Target,
        scenario: &Scenario,
    ) -> Result<TrialSummary, BenchError> {
        let url = trial_url(target, scenario);
        info!("Running trial {} - {}: {}", target.name, scenario.name, url);

        let result = run_test(&url, self.config.requests, self.config.workers).await?;
        let latency = LatencyStatistics::from_durations(&result.durations);

        Ok(TrialSummary {
            params: TrialParams::new(
                target.name.clone(),
                scenario.name.clone(),
                url,
                self.config.requests,
                self.config.workers,
            ),
            elapsed_secs: result.elapsed.as_secs_f64(),
            throughput_requests_per_second: result.throughput,
            latency: latency.into(),
            durations_secs: result.durations_secs(),
        })
    }
}

pub fn trial_url(target: &Target, scenario: &Scenario) -> String {
    if target.url.ends_with('/') && scenario.suffix.starts_with('/') {
        return format!("{}{}", target.url.trim_end_matches('/'), scenario.suffix);
    }
    format!("{}{}", target.url, scenario.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(url: &str) -> Target {
        Target {
            name: "t".to_owned(),
            url: url.to_owned(),
        }
    }

    fn scenario(suffix: &str) -> Scenario {
        Scenario {
            name: "s".to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    #[test]
    fn trial_url_should_append_suffix() {
        assert_eq!(
            trial_url(&target("http://127.0.0.1:80"), &scenario("/do_io?time_s=1")),
            "http://127.0.0.1:80/do_io?time_s=1"
        );
    }

    #[test]
    fn trial_url_should_not_double_slash() {
        assert_eq!(
            trial_url(&target("http://127.0.0.1:80/"), &scenario("/do_cpu?time_s=5")),
            "http://127.0.0.1:80/do_cpu?time_s=5"
        );
    }

    #[tokio::test]
    async fn failing_trial_should_abort_with_context() {
        let config = BenchmarkConfig {
            requests: 1,
            workers: 1,
            targets: vec![Target {
                name: "down".to_owned(),
                url: "http://127.0.0.1:9".to_owned(),
            }],
            scenarios: vec![scenario("/do_io?time_s=0")],
        };

        let result = BenchmarkRunner::new(config, None, None).run().await;
        match result {
            Err(BenchError::TrialFailed { target, scenario, .. }) => {
                assert_eq!(target, "down");
                assert_eq!(scenario, "s");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
