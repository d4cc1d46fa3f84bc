use crate::actors::worker::Worker;
use crate::error::BenchError;
use crate::test_result::TestResult;
use crate::work_queue::{DurationLog, WorkQueue};
use human_repr::HumanDuration;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

/// Builds the client shared by all workers of a run.
///
/// No request or connect timeout is set: slow scenarios may legitimately take
/// many seconds per request. Retries are never performed, and proxy settings
/// from the environment are ignored so requests always go to the target URL.
pub fn create_client() -> Result<Client, BenchError> {
    let client = Client::builder().no_proxy().build()?;
    Ok(client)
}

/// Sends `n_requests` GET requests to `url` using `n_workers` concurrent workers.
pub async fn run_test(
    url: &str,
    n_requests: u32,
    n_workers: u32,
) -> Result<TestResult, BenchError> {
    let client = create_client()?;
    run_test_with_client(client, url, n_requests, n_workers).await
}

/// Same as [`run_test`], with a caller supplied client.
///
/// The workers' clones of the client are dropped once every worker has
/// finished, whether the run succeeded or not. Clones kept by the caller share
/// the same connection pool and keep it alive.
pub async fn run_test_with_client(
    client: Client,
    url: &str,
    n_requests: u32,
    n_workers: u32,
) -> Result<TestResult, BenchError> {
    if n_workers == 0 {
        return Err(BenchError::InvalidConfiguration(
            "at least one worker is required".to_owned(),
        ));
    }

    info!(
        "Sending {} requests to {} with {} workers...",
        n_requests, url, n_workers
    );
    let queue = Arc::new(WorkQueue::repeat(url, n_requests));
    let durations = Arc::new(DurationLog::with_capacity(n_requests as usize));

    let start = Instant::now();
    let mut workers = JoinSet::new();
    for worker_id in 1..=n_workers {
        let worker = Worker::new(worker_id, client.clone(), queue.clone(), durations.clone());
        workers.spawn(worker.run());
    }

    let mut issued = 0;
    while let Some(joined) = workers.join_next().await {
        let outcome = joined.map_err(|e| BenchError::WorkerPanicked(e.to_string()));
        match outcome.and_then(|result| result) {
            Ok(summary) => issued += summary.requests,
            Err(error) => {
                workers.shutdown().await;
                return Err(error);
            }
        }
    }
    let elapsed = start.elapsed();
    drop(client);

    let durations = Arc::into_inner(durations)
        .map(DurationLog::into_inner)
        .unwrap_or_default();
    if durations.len() != n_requests as usize {
        return Err(BenchError::IncompleteRun {
            expected: n_requests as usize,
            actual: durations.len(),
        });
    }

    debug!("Workers issued {} requests in total", issued);
    let result = TestResult::new(elapsed, durations);
    info!(
        "Finished {} requests to {} in {}, throughput: {:.2} req/s",
        n_requests,
        url,
        elapsed.human_duration(),
        result.throughput
    );
    Ok(result)
}
