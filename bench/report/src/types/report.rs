use crate::hardware::BenchmarkHardware;
use crate::trial_summary::TrialSummary;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkReport {
    /// Benchmark unique identifier
    pub uuid: Uuid,

    /// Timestamp when the benchmark was finished
    pub timestamp: String,

    /// Identifier for the benchmark run (e.g., machine name)
    pub identifier: Option<String>,

    /// Benchmark hardware
    pub hardware: BenchmarkHardware,

    /// Results of every (target, scenario) trial, in execution order
    pub trials: Vec<TrialSummary>,
}

impl BenchmarkReport {
    pub fn new(
        timestamp: String,
        identifier: Option<String>,
        hardware: BenchmarkHardware,
        trials: Vec<TrialSummary>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            timestamp,
            identifier,
            hardware,
            trials,
        }
    }

    /// Writes the report as `report.json` into `output_dir`, creating the directory if needed.
    pub fn dump_to_json(&self, output_dir: &Path) -> Result<PathBuf, io::Error> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }

    pub fn load_from_json(path: &Path) -> Result<Self, io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
