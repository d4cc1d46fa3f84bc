use crate::{report::BenchmarkReport, trial_summary::TrialSummary};
use colored::{ColoredString, Colorize};
use tracing::info;

impl BenchmarkReport {
    pub fn print_summary(&self) {
        let hardware = &self.hardware;
        let header = format!(
            "Benchmark: {} trials, identifier: {}, cpu: {} ({} cores), memory: {} MB, os: {} {}",
            self.trials.len(),
            self.identifier.as_deref().unwrap_or("none"),
            hardware.cpu_name,
            hardware.cpu_cores,
            hardware.total_memory_mb,
            hardware.os_name,
            hardware.os_version,
        )
        .blue();

        info!("{}", header);

        self.trials
            .iter()
            .for_each(|trial| info!("{}", trial.formatted_string()));
    }
}

impl TrialSummary {
    /// One line result, e.g. `uvicorn - io: 120.31 req/s, 1.02±0.01 s/req`.
    pub fn result_line(&self) -> String {
        format!(
            "{} - {}: {:.2} req/s, {:.2}±{:.2} s/req",
            self.params.target,
            self.params.scenario,
            self.throughput_requests_per_second,
            self.latency.mean,
            self.latency.std_dev,
        )
    }

    /// Latency percentiles of the trial; the result line itself goes to stdout.
    pub fn formatted_string(&self) -> ColoredString {
        format!(
            "{} - {} latency: p50: {:.3} s, p90: {:.3} s, p99: {:.3} s, max: {:.3} s",
            self.params.target,
            self.params.scenario,
            self.latency.p50,
            self.latency.p90,
            self.latency.p99,
            self.latency.max,
        )
        .green()
    }
}
