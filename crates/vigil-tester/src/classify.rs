//! Reactive error classification
//!
//! Maps an error observed on a connection to a [`TestOutcome`]: is this
//! connection bad, is the whole pool suspect, or is the error not about
//! the connection at all.

use vigil_core::VigilError;

use crate::outcome::TestOutcome;

/// Message fragments that indicate the whole database endpoint is suspect.
///
/// When one of these appears, discarding a single connection will not help;
/// the pool should be flushed and rebuilt.
const SYSTEMIC_MARKERS: &[&str] = &[
    "too many connections",
    "server shutdown",
    "shutting down",
    "database system is starting up",
    "database system is in recovery",
    "access denied",
    "authentication failed",
    "password authentication",
    "unknown host",
    "name or service not known",
    "no route to host",
    "connection refused",
];

/// Message fragments that indicate this one connection has gone bad.
const TRANSIENT_MARKERS: &[&str] = &[
    "connection reset",
    "broken pipe",
    "connection closed",
    "connection aborted",
    "terminated",
    "unexpected eof",
    "timed out",
];

/// Classify an observed error into a test outcome.
///
/// Timeouts, cancellations, and IO failures invalidate the connection they
/// occurred on. String-carrying variants are classified by case-insensitive
/// message heuristics; systemic markers win over transient ones. Errors
/// that do not indicate connection failure (a bad statement, a
/// serialization problem) come back `Healthy` so the caller can keep the
/// connection or re-verify with an active check.
pub fn classify_error(error: &VigilError) -> TestOutcome {
    match error {
        VigilError::Timeout(_) | VigilError::Cancelled => TestOutcome::ConnectionInvalid,
        VigilError::Io(_) => TestOutcome::ConnectionInvalid,
        VigilError::Connection(msg) => classify_message(msg, TestOutcome::ConnectionInvalid),
        VigilError::Query(msg) | VigilError::Other(msg) => {
            classify_message(msg, TestOutcome::Healthy)
        }
        VigilError::Configuration(_) | VigilError::Serialization(_) => TestOutcome::Healthy,
    }
}

/// Scan a message for known markers, falling back to `default` when the
/// text matches neither list.
fn classify_message(msg: &str, default: TestOutcome) -> TestOutcome {
    let lowered = msg.to_lowercase();

    if SYSTEMIC_MARKERS.iter().any(|m| lowered.contains(m)) {
        TestOutcome::DatabaseInvalid
    } else if TRANSIENT_MARKERS.iter().any(|m| lowered.contains(m)) {
        TestOutcome::ConnectionInvalid
    } else {
        default
    }
}
