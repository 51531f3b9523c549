//! The standard connection tester
//!
//! Probes actively with a timed validation statement and classifies
//! observed errors reactively with the message heuristics in
//! [`crate::classify`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vigil_core::{Connection, VigilError};

use crate::classify::classify_error;
use crate::outcome::TestOutcome;
use crate::policy::CausePolicy;
use crate::probe::{ProbeError, run_probe};
use crate::tester::ConnectionTester;
use crate::verdict::TestVerdict;

/// Configuration for the standard tester
#[derive(Debug, Clone)]
pub struct TesterConfig {
    /// Upper bound on a single probe's round trip
    probe_timeout: Duration,
    /// Latency above which a successful probe is logged as slow
    slow_probe_threshold: Duration,
    /// Whether reactive verdicts carry the observed error
    cause_policy: CausePolicy,
}

impl TesterConfig {
    /// Create a configuration with the given probe timeout.
    pub fn new(probe_timeout: Duration) -> Self {
        Self {
            probe_timeout,
            slow_probe_threshold: Duration::from_millis(500),
            cause_policy: CausePolicy::default(),
        }
    }

    /// Set the slow-probe logging threshold.
    pub fn with_slow_probe_threshold(mut self, threshold: Duration) -> Self {
        self.slow_probe_threshold = threshold;
        self
    }

    /// Set the root-cause policy for reactive checks.
    pub fn with_cause_policy(mut self, policy: CausePolicy) -> Self {
        self.cause_policy = policy;
        self
    }

    /// Get the probe timeout.
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    /// Get the slow-probe threshold.
    pub fn slow_probe_threshold(&self) -> Duration {
        self.slow_probe_threshold
    }

    /// Get the root-cause policy.
    pub fn cause_policy(&self) -> CausePolicy {
        self.cause_policy
    }
}

impl Default for TesterConfig {
    /// Default configuration: 5 second probe timeout, 500ms slow threshold,
    /// observed errors propagated.
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

/// The default [`ConnectionTester`] implementation.
///
/// Stateless apart from its configuration, so one instance can be shared
/// across every connection a pool owns.
#[derive(Debug, Clone, Default)]
pub struct StandardConnectionTester {
    config: TesterConfig,
}

impl StandardConnectionTester {
    /// Create a tester with the given configuration.
    pub fn new(config: TesterConfig) -> Self {
        Self { config }
    }

    /// Create a tester with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TesterConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &TesterConfig {
        &self.config
    }
}

#[async_trait]
impl ConnectionTester for StandardConnectionTester {
    async fn active_check_with_query(
        &self,
        conn: &dyn Connection,
        preferred_query: Option<&str>,
    ) -> TestVerdict {
        let timeout = self.config.probe_timeout;
        let result = match tokio::time::timeout(timeout, run_probe(conn, preferred_query)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(timeout)),
        };

        match result {
            Ok(latency) => {
                if latency > self.config.slow_probe_threshold {
                    tracing::warn!(
                        driver = conn.driver_name(),
                        ?latency,
                        "probe succeeded but was slow"
                    );
                } else {
                    tracing::debug!(driver = conn.driver_name(), ?latency, "probe succeeded");
                }
                TestVerdict::healthy_with_latency(latency)
            }
            Err(probe_err) => {
                let error = probe_err.into_error();
                // A failed probe always invalidates at least this connection,
                // even when the message alone would classify as Healthy.
                let outcome = match classify_error(&error) {
                    TestOutcome::Healthy => TestOutcome::ConnectionInvalid,
                    other => other,
                };
                tracing::warn!(
                    driver = conn.driver_name(),
                    %error,
                    ?outcome,
                    "probe failed"
                );
                TestVerdict::failed(outcome, error)
            }
        }
    }

    async fn status_on_error_with_query(
        &self,
        conn: &dyn Connection,
        error: Arc<VigilError>,
        _preferred_query: Option<&str>,
    ) -> TestVerdict {
        let outcome = classify_error(&error);

        if outcome.is_healthy() {
            tracing::debug!(
                driver = conn.driver_name(),
                %error,
                "observed error does not indicate connection failure"
            );
            return TestVerdict::healthy();
        }

        if outcome.pool_should_be_discarded() {
            tracing::warn!(
                driver = conn.driver_name(),
                %error,
                "observed error looks systemic"
            );
        }

        let cause = self.config.cause_policy.keeps_cause().then_some(error);
        TestVerdict::classified(outcome, cause)
    }
}
