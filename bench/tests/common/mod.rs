#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// Target server stand-in with IO wait, CPU burn and failing endpoints.
#[derive(Debug, Default)]
pub struct MockState {
    requests: AtomicUsize,
}

impl MockState {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn next_request(&self) -> usize {
        self.requests.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct MockTarget {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockTarget {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    /// Starts the server on its own runtime thread, for tests that block on a child process.
    pub fn start_in_background() -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async move {
                let target = MockTarget::start().await;
                sender.send((target.addr, target.state.clone())).unwrap();
                std::future::pending::<()>().await;
            });
        });
        let (addr, state) = receiver.recv().unwrap();
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url(), suffix)
    }
}

#[derive(Deserialize)]
struct TimeParams {
    time_s: f64,
}

#[derive(Deserialize)]
struct FailParams {
    request: usize,
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/do_io", get(do_io))
        .route("/do_cpu", get(do_cpu))
        .route("/fail_on", get(fail_on))
        .with_state(state)
}

async fn do_io(
    State(state): State<Arc<MockState>>,
    Query(params): Query<TimeParams>,
) -> StatusCode {
    state.next_request();
    tokio::time::sleep(Duration::from_secs_f64(params.time_s)).await;
    StatusCode::OK
}

async fn do_cpu(
    State(state): State<Arc<MockState>>,
    Query(params): Query<TimeParams>,
) -> StatusCode {
    state.next_request();
    let busy_for = Duration::from_secs_f64(params.time_s);
    tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let mut counter: u64 = 0;
        while start.elapsed() < busy_for {
            counter = std::hint::black_box(counter.wrapping_add(1));
        }
    })
    .await
    .unwrap();
    StatusCode::OK
}

async fn fail_on(
    State(state): State<Arc<MockState>>,
    Query(params): Query<FailParams>,
) -> StatusCode {
    if state.next_request() == params.request {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::OK
}
