use std::time::Duration;

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub elapsed: Duration,
    pub throughput: f64,
    pub durations: Vec<Duration>,
}

impl TestResult {
    pub fn new(elapsed: Duration, durations: Vec<Duration>) -> Self {
        let throughput = throughput(durations.len(), elapsed);
        Self {
            elapsed,
            throughput,
            durations,
        }
    }

    pub fn durations_secs(&self) -> Vec<f64> {
        self.durations.iter().map(Duration::as_secs_f64).collect()
    }
}

/// Requests per second, `0.0` when nothing completed or no time elapsed.
pub fn throughput(completed: usize, elapsed: Duration) -> f64 {
    let elapsed_secs = elapsed.as_secs_f64();
    if completed == 0 || elapsed_secs <= 0.0 {
        return 0.0;
    }
    completed as f64 / elapsed_secs
}
