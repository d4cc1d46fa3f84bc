use super::{latency_summary::LatencySummary, trial_params::TrialParams};
use crate::utils::{round_float, round_floats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrialSummary {
    pub params: TrialParams,

    /// Wall clock time of the whole trial
    #[serde(serialize_with = "round_float")]
    pub elapsed_secs: f64,

    /// Completed requests divided by `elapsed_secs`
    #[serde(serialize_with = "round_float")]
    pub throughput_requests_per_second: f64,

    pub latency: LatencySummary,

    /// Per-request durations in completion order
    #[serde(serialize_with = "round_floats")]
    pub durations_secs: Vec<f64>,
}
