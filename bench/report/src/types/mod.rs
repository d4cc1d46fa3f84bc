pub mod hardware;
pub mod latency_summary;
pub mod report;
pub mod trial_params;
pub mod trial_summary;
