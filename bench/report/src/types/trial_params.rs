use serde::{Deserialize, Serialize};

/// Inputs of a single trial: which target was hit with which scenario.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, derive_new::new)]
pub struct TrialParams {
    pub target: String,
    pub scenario: String,
    pub url: String,
    pub requests: u32,
    pub workers: u32,
}
