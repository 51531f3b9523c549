//! Test verdict type
//!
//! A verdict bundles the outcome of a liveness check with its optional
//! root cause and, for active probes, the measured round-trip latency.
//! The root cause is an ordinary field of the return value; callers that
//! only care about the outcome simply ignore it.

use std::sync::Arc;
use std::time::Duration;

use vigil_core::VigilError;

use crate::outcome::TestOutcome;

/// Result of a single liveness check
#[derive(Debug, Clone)]
pub struct TestVerdict {
    /// The resulting outcome
    outcome: TestOutcome,
    /// Underlying failure, if the check failed and the tester kept it
    cause: Option<Arc<VigilError>>,
    /// Round-trip latency of the probe, for successful active checks
    latency: Option<Duration>,
}

impl TestVerdict {
    /// Create a healthy verdict with no latency measurement.
    ///
    /// Used by reactive checks, which classify an observed error without
    /// probing the connection.
    pub fn healthy() -> Self {
        Self {
            outcome: TestOutcome::Healthy,
            cause: None,
            latency: None,
        }
    }

    /// Create a healthy verdict carrying the probe's round-trip latency.
    pub fn healthy_with_latency(latency: Duration) -> Self {
        Self {
            outcome: TestOutcome::Healthy,
            cause: None,
            latency: Some(latency),
        }
    }

    /// Create a failed verdict with the causing error.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `outcome` is `Healthy`; a healthy verdict
    /// never carries a cause.
    pub fn failed(outcome: TestOutcome, cause: impl Into<Arc<VigilError>>) -> Self {
        debug_assert!(!outcome.is_healthy(), "a failed verdict cannot be Healthy");
        Self {
            outcome,
            cause: Some(cause.into()),
            latency: None,
        }
    }

    /// Create a verdict from a classification and an optional cause.
    ///
    /// Used by reactive checks, where the root-cause policy decides whether
    /// the observed error is carried.
    pub fn classified(outcome: TestOutcome, cause: Option<Arc<VigilError>>) -> Self {
        Self {
            outcome,
            cause,
            latency: None,
        }
    }

    /// The outcome of the check.
    pub fn outcome(&self) -> TestOutcome {
        self.outcome
    }

    /// The underlying failure, if any. Diagnostic only.
    pub fn cause(&self) -> Option<&VigilError> {
        self.cause.as_deref()
    }

    /// Take the cause out of the verdict, for callers that want to log it
    /// without borrowing.
    pub fn into_cause(self) -> Option<Arc<VigilError>> {
        self.cause
    }

    /// Round-trip latency of the probe, if this was a successful active check.
    pub fn latency(&self) -> Option<Duration> {
        self.latency
    }

    /// Check if the verdict is healthy.
    pub fn is_healthy(&self) -> bool {
        self.outcome.is_healthy()
    }
}
