//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigations by outcome
//! - `shell_remote_loads_total` (counter): load attempts by remote,
//!   module, and result
//! - `shell_remote_load_duration_seconds` (histogram): load latency
//!
//! # Design Decisions
//! - Facade only: the host installs whatever recorder it wants
//! - Low-cardinality labels (remote ids are a small static set)

use std::time::Instant;

/// Record the outcome of one navigation.
pub fn record_navigation(outcome: &'static str) {
    metrics::counter!("shell_navigations_total", "outcome" => outcome).increment(1);
}

/// Record one remote load attempt.
pub fn record_remote_load(remote: &str, module: &str, result: &'static str, start: Instant) {
    metrics::counter!(
        "shell_remote_loads_total",
        "remote" => remote.to_string(),
        "module" => module.to_string(),
        "result" => result
    )
    .increment(1);

    metrics::histogram!(
        "shell_remote_load_duration_seconds",
        "remote" => remote.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
