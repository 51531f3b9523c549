//! Failure-streak monitoring for scheduled checks
//!
//! Wraps a shared tester and tracks consecutive active-check failures, so
//! a pool manager's health-check schedule can decide when a connection has
//! failed often enough to discard. Scheduling itself stays with the caller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use vigil_core::Connection;

use crate::outcome::TestOutcome;
use crate::standard::StandardConnectionTester;
use crate::tester::ConnectionTester;
use crate::verdict::TestVerdict;

/// Monitor that counts consecutive active-check failures.
///
/// One monitor per monitored connection; the wrapped tester itself is
/// shared freely.
pub struct TesterMonitor {
    tester: Arc<dyn ConnectionTester>,
    failure_threshold: u32,
    consecutive_failures: AtomicU64,
    last_outcome: parking_lot::Mutex<TestOutcome>,
}

impl TesterMonitor {
    /// Create a monitor around an existing tester.
    ///
    /// `failure_threshold` is the number of consecutive failures after
    /// which [`TesterMonitor::should_discard`] reports true.
    pub fn new(tester: Arc<dyn ConnectionTester>, failure_threshold: u32) -> Self {
        Self {
            tester,
            failure_threshold,
            consecutive_failures: AtomicU64::new(0),
            last_outcome: parking_lot::Mutex::new(TestOutcome::Healthy),
        }
    }

    /// Create a monitor around a default [`StandardConnectionTester`].
    pub fn with_standard_tester(failure_threshold: u32) -> Self {
        Self::new(
            Arc::new(StandardConnectionTester::with_defaults()),
            failure_threshold,
        )
    }

    /// Run one active check and update the failure streak.
    pub async fn check(&self, conn: &dyn Connection) -> TestVerdict {
        self.check_with_query(conn, None).await
    }

    /// Run one active check with a preferred query and update the streak.
    pub async fn check_with_query(
        &self,
        conn: &dyn Connection,
        preferred_query: Option<&str>,
    ) -> TestVerdict {
        let verdict = self.tester.active_check_with_query(conn, preferred_query).await;

        if verdict.is_healthy() {
            self.consecutive_failures.store(0, Ordering::SeqCst);
        } else {
            let failures = self.consecutive_failures.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(
                failures,
                threshold = self.failure_threshold,
                "active check failed"
            );
        }
        *self.last_outcome.lock() = verdict.outcome();

        verdict
    }

    /// Number of consecutive failed checks.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures.load(Ordering::SeqCst) as u32
    }

    /// Outcome of the most recent check.
    pub fn last_outcome(&self) -> TestOutcome {
        *self.last_outcome.lock()
    }

    /// Check if the failure streak has reached the threshold.
    pub fn should_discard(&self) -> bool {
        self.consecutive_failures() >= self.failure_threshold
    }

    /// Reset the streak, e.g. after the pool replaced the connection.
    pub fn reset(&self) {
        self.consecutive_failures.store(0, Ordering::SeqCst);
        *self.last_outcome.lock() = TestOutcome::Healthy;
    }

    /// The configured failure threshold.
    pub fn failure_threshold(&self) -> u32 {
        self.failure_threshold
    }
}

/// Create a monitor that can be shared across threads.
pub fn create_shared_monitor(
    tester: Arc<dyn ConnectionTester>,
    failure_threshold: u32,
) -> Arc<TesterMonitor> {
    Arc::new(TesterMonitor::new(tester, failure_threshold))
}
