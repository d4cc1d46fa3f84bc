use http_bench_report::latency_summary::LatencySummary;
use std::time::Duration;

/// Latency distribution of a run, in seconds.
///
/// `std_dev` is the population standard deviation; percentiles interpolate
/// linearly between the closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatencyStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl LatencyStatistics {
    pub fn from_durations(durations: &[Duration]) -> Self {
        if durations.is_empty() {
            return Self::default();
        }

        let mut latencies: Vec<f64> = durations.iter().map(Duration::as_secs_f64).collect();
        latencies.sort_by(f64::total_cmp);

        let count = latencies.len() as f64;
        let mean = latencies.iter().sum::<f64>() / count;
        let variance = latencies.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / count;

        let half = latencies.len() / 2;
        let median = if latencies.len() % 2 == 0 {
            (latencies[half - 1] + latencies[half]) / 2.0
        } else {
            latencies[half]
        };

        Self {
            mean,
            std_dev: variance.sqrt(),
            min: latencies[0],
            max: latencies[latencies.len() - 1],
            median,
            p50: calculate_percentile(&latencies, 50.0),
            p90: calculate_percentile(&latencies, 90.0),
            p95: calculate_percentile(&latencies, 95.0),
            p99: calculate_percentile(&latencies, 99.0),
        }
    }
}

impl From<LatencyStatistics> for LatencySummary {
    fn from(stats: LatencyStatistics) -> Self {
        LatencySummary {
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            median: stats.median,
            p50: stats.p50,
            p90: stats.p90,
            p95: stats.p95,
            p99: stats.p99,
        }
    }
}

fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let rank = percentile / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}
