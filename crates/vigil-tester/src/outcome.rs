//! Liveness test outcome classification
//!
//! The closed set of answers a tester can give about a connection.

use serde::{Deserialize, Serialize};

/// Outcome of a connection liveness test
///
/// The pool manager acts on this: keep the connection, discard and replace
/// just this connection, or flush and rebuild the whole pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
    /// The connection is usable
    Healthy,
    /// This connection is bad; discard and replace it
    ConnectionInvalid,
    /// The failure looks systemic; the whole pool should be discarded
    DatabaseInvalid,
}

impl TestOutcome {
    /// Check if the outcome indicates a usable connection.
    pub fn is_healthy(&self) -> bool {
        matches!(self, TestOutcome::Healthy)
    }

    /// Check if the outcome requires discarding this connection.
    ///
    /// True for both `ConnectionInvalid` and `DatabaseInvalid`: a systemic
    /// failure still invalidates the connection it was observed on.
    pub fn connection_should_be_discarded(&self) -> bool {
        matches!(
            self,
            TestOutcome::ConnectionInvalid | TestOutcome::DatabaseInvalid
        )
    }

    /// Check if the outcome requires flushing the whole pool.
    pub fn pool_should_be_discarded(&self) -> bool {
        matches!(self, TestOutcome::DatabaseInvalid)
    }
}

impl Default for TestOutcome {
    fn default() -> Self {
        TestOutcome::Healthy
    }
}
