//! Caller-side Busy Retry
//!
//! The client runs every command once. Callers that want to ride out the
//! daemon's cluster-wide lock wrap an operation in [`retry_on_busy`].

use crate::error::Result;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::warn;

/// Exponential backoff bounds for busy retries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub initial_interval: Duration,
    pub max_interval: Duration,
    /// Give up and return the last `Busy` error after this long
    pub max_elapsed: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(10),
            max_elapsed: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Default intervals with a custom overall deadline
    pub fn with_max_elapsed(max_elapsed: Duration) -> Self {
        Self {
            max_elapsed,
            ..Default::default()
        }
    }
}

/// Re-run `op` while it fails with a transient error
///
/// Permanent errors are returned on first occurrence, unchanged.
pub fn retry_on_busy<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_interval(policy.initial_interval)
        .with_max_interval(policy.max_interval)
        .with_max_elapsed_time(Some(policy.max_elapsed))
        .build();

    backoff::retry(backoff, || {
        op().map_err(|err| {
            if err.is_transient() {
                warn!("Retrying after transient failure: {}", err.command().unwrap_or("-"));
                backoff::Error::transient(err)
            } else {
                backoff::Error::permanent(err)
            }
        })
    })
    .map_err(|err| match err {
        backoff::Error::Permanent(err) => err,
        backoff::Error::Transient { err, .. } => err,
    })
}
