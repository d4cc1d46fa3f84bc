pub mod actors;
pub mod analytics;
pub mod args;
pub mod benchmark_runner;
pub mod config;
pub mod error;
pub mod test_result;
pub mod test_runner;
pub mod work_queue;
