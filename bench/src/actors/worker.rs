use crate::error::BenchError;
use crate::work_queue::{DurationLog, WorkQueue};
use reqwest::Client;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker_id: u32,
    pub requests: u64,
}

/// Drains the shared queue, one GET per popped URL.
pub struct Worker {
    worker_id: u32,
    client: Client,
    queue: Arc<WorkQueue>,
    durations: Arc<DurationLog>,
}

impl Worker {
    pub fn new(
        worker_id: u32,
        client: Client,
        queue: Arc<WorkQueue>,
        durations: Arc<DurationLog>,
    ) -> Self {
        Self {
            worker_id,
            client,
            queue,
            durations,
        }
    }

    pub async fn run(self) -> Result<WorkerSummary, BenchError> {
        let mut requests = 0;
        while let Some(url) = self.queue.pop() {
            requests += 1;
            let start = Instant::now();
            let result = self.get(&url).await;
            self.durations.record(start.elapsed());

            if let Err(error) = result {
                error!(
                    "Worker #{} → request {} to {} failed: {}",
                    self.worker_id, requests, url, error
                );
                return Err(error);
            }
        }

        debug!(
            "Worker #{} → queue drained after {} requests",
            self.worker_id, requests
        );
        Ok(WorkerSummary {
            worker_id: self.worker_id,
            requests,
        })
    }

    async fn get(&self, url: &str) -> Result<(), BenchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        // Read the whole body so the connection goes back to the pool.
        response.bytes().await?;
        if !status.is_success() {
            return Err(BenchError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }
        Ok(())
    }
}
