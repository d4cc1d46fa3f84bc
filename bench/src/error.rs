use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot read config file '{}': {source}", .path.display())]
    CannotReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse config file '{}': {source}", .path.display())]
    CannotParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Worker task failed: {0}")]
    WorkerPanicked(String),
    #[error("Incomplete run, expected {expected} durations, recorded {actual}")]
    IncompleteRun { expected: usize, actual: usize },
    #[error("Trial {target} - {scenario} failed: {source}")]
    TrialFailed {
        target: String,
        scenario: String,
        source: Box<BenchError>,
    },
    #[error("Cannot write report: {0}")]
    CannotWriteReport(String),
}
