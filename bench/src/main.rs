use clap::Parser;
use http_bench::args::common::HttpBenchArgs;
use http_bench::args::examples::print_examples;
use http_bench::benchmark_runner::BenchmarkRunner;
use http_bench::config::BenchmarkConfig;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> ExitCode {
    let args = HttpBenchArgs::parse();
    if args.examples {
        print_examples();
        return ExitCode::SUCCESS;
    }

    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(&args.log_level)))
        .init();

    let config = match BenchmarkConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting the benchmarks...");
    let runner = BenchmarkRunner::new(config, args.output_dir.clone(), args.identifier());
    match runner.run().await {
        Ok(_) => {
            info!("Finished the benchmarks.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Benchmark failed: {e}");
            ExitCode::FAILURE
        }
    }
}
