use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Request latency distribution of one trial, all values in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct LatencySummary {
    #[serde(serialize_with = "round_float")]
    pub mean: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev: f64,
    #[serde(serialize_with = "round_float")]
    pub min: f64,
    #[serde(serialize_with = "round_float")]
    pub max: f64,
    #[serde(serialize_with = "round_float")]
    pub median: f64,
    #[serde(serialize_with = "round_float")]
    pub p50: f64,
    #[serde(serialize_with = "round_float")]
    pub p90: f64,
    #[serde(serialize_with = "round_float")]
    pub p95: f64,
    #[serde(serialize_with = "round_float")]
    pub p99: f64,
}
