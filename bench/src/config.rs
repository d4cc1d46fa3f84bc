//! Benchmark matrix configuration.
//!
//! Values come from built-in defaults, an optional TOML file and the command
//! line, in increasing order of precedence.

use crate::args::common::HttpBenchArgs;
use crate::args::defaults::{DEFAULT_REQUESTS, DEFAULT_SCENARIOS, DEFAULT_TARGETS, DEFAULT_WORKERS};
use crate::error::BenchError;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A named server under test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub name: String,
    pub url: String,
}

/// A named URL suffix selecting a server behavior (CPU bound, IO bound, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub suffix: String,
}

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub requests: Option<u32>,
    pub workers: Option<u32>,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl TomlConfig {
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| BenchError::CannotReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| BenchError::CannotParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Final resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub requests: u32,
    pub workers: u32,
    pub targets: Vec<Target>,
    pub scenarios: Vec<Scenario>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            requests: DEFAULT_REQUESTS,
            workers: DEFAULT_WORKERS,
            targets: DEFAULT_TARGETS
                .iter()
                .map(|(name, url)| Target {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
            scenarios: DEFAULT_SCENARIOS
                .iter()
                .map(|(name, suffix)| Scenario {
                    name: name.to_string(),
                    suffix: suffix.to_string(),
                })
                .collect(),
        }
    }
}

impl BenchmarkConfig {
    pub fn from_args(args: &HttpBenchArgs) -> Result<Self, BenchError> {
        let file = match &args.config {
            Some(path) => TomlConfig::load(path)?,
            None => TomlConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Merges command line arguments over the file, and the file over the defaults.
    pub fn merge(args: &HttpBenchArgs, file: TomlConfig) -> Result<Self, BenchError> {
        let defaults = Self::default();

        let targets = if !args.targets.is_empty() {
            args.targets
                .iter()
                .map(|(name, url)| Target {
                    name: name.clone(),
                    url: url.clone(),
                })
                .collect()
        } else if !file.targets.is_empty() {
            file.targets
        } else {
            defaults.targets
        };

        let scenarios = if !args.scenarios.is_empty() {
            args.scenarios
                .iter()
                .map(|(name, suffix)| Scenario {
                    name: name.clone(),
                    suffix: suffix.clone(),
                })
                .collect()
        } else if !file.scenarios.is_empty() {
            file.scenarios
        } else {
            defaults.scenarios
        };

        let config = Self {
            requests: args.requests.or(file.requests).unwrap_or(defaults.requests),
            workers: args.workers.or(file.workers).unwrap_or(defaults.workers),
            targets,
            scenarios,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.workers == 0 {
            return Err(BenchError::InvalidConfiguration(
                "workers must be greater than 0".to_owned(),
            ));
        }
        if self.targets.is_empty() || self.scenarios.is_empty() {
            return Err(BenchError::InvalidConfiguration(
                "at least one target and one scenario are required".to_owned(),
            ));
        }

        ensure_unique("target", self.targets.iter().map(|t| t.name.as_str()))?;
        ensure_unique("scenario", self.scenarios.iter().map(|s| s.name.as_str()))?;

        for target in &self.targets {
            let url = Url::parse(&target.url).map_err(|e| {
                BenchError::InvalidConfiguration(format!(
                    "target '{}' has invalid URL '{}': {e}",
                    target.name, target.url
                ))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(BenchError::InvalidConfiguration(format!(
                    "target '{}' must use http or https, got '{}'",
                    target.name,
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<(), BenchError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(BenchError::InvalidConfiguration(format!(
                "duplicate {kind} name '{name}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> HttpBenchArgs {
        let mut all = vec!["http-bench"];
        all.extend_from_slice(extra);
        HttpBenchArgs::try_parse_from(all).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::merge(&args(&[]), TomlConfig::default()).unwrap();
        assert_eq!(config.requests, 128);
        assert_eq!(config.workers, 128);
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].name, "gunicorn");
        let scenarios: Vec<_> = config.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(scenarios, ["io", "cpu", "nothing"]);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
            requests = 64
            workers = 8

            [[targets]]
            name = "uvicorn"
            url = "http://10.0.0.2:80"

            [[scenarios]]
            name = "io"
            suffix = "/do_io?time_s=1"
        "#;

        let file: TomlConfig = toml::from_str(toml_str).unwrap();
        let config = BenchmarkConfig::merge(&args(&[]), file).unwrap();
        assert_eq!(config.requests, 64);
        assert_eq!(config.workers, 8);
        assert_eq!(
            config.targets,
            vec![Target {
                name: "uvicorn".to_owned(),
                url: "http://10.0.0.2:80".to_owned(),
            }]
        );
        assert_eq!(config.scenarios[0].suffix, "/do_io?time_s=1");
    }

    #[test]
    fn cli_should_take_precedence_over_file() {
        let file: TomlConfig = toml::from_str(
            r#"
            requests = 64
            workers = 8

            [[targets]]
            name = "uvicorn"
            url = "http://10.0.0.2:80"
            "#,
        )
        .unwrap();

        let config = BenchmarkConfig::merge(
            &args(&["-n", "4", "-t", "local=http://127.0.0.1:9000"]),
            file,
        )
        .unwrap();
        assert_eq!(config.requests, 4);
        assert_eq!(config.workers, 8);
        assert_eq!(config.targets[0].name, "local");
        assert_eq!(config.scenarios.len(), 3);
    }

    #[test]
    fn duplicate_names_should_be_rejected() {
        let result = BenchmarkConfig::merge(
            &args(&["-t", "a=http://127.0.0.1:1", "-t", "a=http://127.0.0.1:2"]),
            TomlConfig::default(),
        );
        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    fn invalid_target_url_should_be_rejected() {
        let result =
            BenchmarkConfig::merge(&args(&["-t", "a=127.0.0.1:8000"]), TomlConfig::default());
        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_workers_in_file_should_be_rejected() {
        let file: TomlConfig = toml::from_str("workers = 0").unwrap();
        let result = BenchmarkConfig::merge(&args(&[]), file);
        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    fn missing_file_should_be_reported() {
        let result = TomlConfig::load(Path::new("/nonexistent/http-bench.toml"));
        assert!(matches!(result, Err(BenchError::CannotReadConfig { .. })));
    }
}
