use super::defaults::DEFAULT_LOG_LEVEL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct HttpBenchArgs {
    /// Path to TOML configuration file with the benchmark matrix
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Target server as name=base_url, can be repeated (replaces configured targets)
    #[arg(long = "target", short = 't', value_parser = parse_named_value)]
    pub targets: Vec<(String, String)>,

    /// Scenario as name=url_suffix, can be repeated (replaces configured scenarios)
    #[arg(long = "scenario", short = 's', value_parser = parse_named_value)]
    pub scenarios: Vec<(String, String)>,

    /// Number of requests sent in every trial
    #[arg(long, short = 'n')]
    pub requests: Option<u32>,

    /// Number of concurrent workers in every trial
    #[arg(long, short = 'w', value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: Option<u32>,

    /// Output directory path for storing the JSON report
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Identifier for the benchmark run (defaults to hostname)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print usage examples and exit
    #[arg(long, default_value_t = false)]
    pub examples: bool,
}

impl HttpBenchArgs {
    pub fn identifier(&self) -> Option<String> {
        self.identifier.clone().or_else(|| {
            hostname::get()
                .ok()
                .map(|name| name.to_string_lossy().to_string())
        })
    }
}

fn parse_named_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, rest)) if !name.trim().is_empty() && !rest.is_empty() => {
            Ok((name.trim().to_owned(), rest.to_owned()))
        }
        _ => Err(format!("Expected name=value, got '{value}'")),
    }
}
