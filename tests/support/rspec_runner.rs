//! Helpers for running `rspec` suites with predictable threading.

use rspec::{block::Suite, report::Report, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs an rspec suite serially so the shared Bevy `App` is only touched
/// from one thread.
///
/// Every example runs and is logged before the suite's outcome is checked.
///
/// # Panics
/// Panics when any example in the suite failed.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(
        report.is_success(),
        "{} rspec example(s) failed",
        report.get_failed()
    );
}
