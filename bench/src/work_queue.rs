use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Pending request targets shared by the workers of one run.
///
/// Items are popped under a lock, so every queued URL is handed out to exactly
/// one worker. The queue is filled once at construction and never refilled.
#[derive(Debug, Default)]
pub struct WorkQueue {
    urls: Mutex<Vec<String>>,
}

impl WorkQueue {
    /// Creates a queue holding `count` copies of `url`.
    pub fn repeat(url: &str, count: u32) -> Self {
        Self {
            urls: Mutex::new(vec![url.to_owned(); count as usize]),
        }
    }

    pub fn pop(&self) -> Option<String> {
        lock(&self.urls).pop()
    }

}

/// Append-only collection of request durations, in completion order.
#[derive(Debug, Default)]
pub struct DurationLog {
    durations: Mutex<Vec<Duration>>,
}

impl DurationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            durations: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn record(&self, duration: Duration) {
        lock(&self.durations).push(duration);
    }

    pub fn into_inner(self) -> Vec<Duration> {
        self.durations
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// Neither collection can be left half-updated by a panicking holder, so poisoning is ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
