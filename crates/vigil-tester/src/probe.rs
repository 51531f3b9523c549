//! Probe execution
//!
//! Runs the lightweight validation statement an active check uses and
//! measures its round-trip time.

use std::time::{Duration, Instant};

use vigil_core::{Connection, VigilError};

/// Result of a probe
pub type ProbeResult = Result<Duration, ProbeError>;

/// Error that can occur while probing a connection
#[derive(Debug)]
pub enum ProbeError {
    /// The connection is closed
    ConnectionClosed,
    /// The probe statement failed
    QueryFailed(VigilError),
    /// The probe exceeded the configured timeout
    Timeout(Duration),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::ConnectionClosed => write!(f, "Connection is closed"),
            ProbeError::QueryFailed(err) => write!(f, "Probe query failed: {}", err),
            ProbeError::Timeout(limit) => write!(f, "Probe timed out after {:?}", limit),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::QueryFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl ProbeError {
    /// Convert into the error currency a verdict carries as its cause.
    pub fn into_error(self) -> VigilError {
        match self {
            ProbeError::ConnectionClosed => {
                VigilError::Connection("connection is closed".to_string())
            }
            ProbeError::QueryFailed(err) => err,
            ProbeError::Timeout(limit) => {
                VigilError::Timeout(format!("probe timed out after {:?}", limit))
            }
        }
    }
}

/// Probe a connection by executing a validation statement.
///
/// Uses `preferred_query` if supplied, otherwise the driver-appropriate
/// default from [`default_probe_query`]. Returns the round-trip time on
/// success. A closed connection short-circuits without touching the wire.
pub async fn run_probe(conn: &dyn Connection, preferred_query: Option<&str>) -> ProbeResult {
    if conn.is_closed() {
        return Err(ProbeError::ConnectionClosed);
    }

    let statement = preferred_query.unwrap_or_else(|| default_probe_query(conn.driver_name()));

    let start = Instant::now();
    match conn.query(statement, &[]).await {
        Ok(_) => Ok(start.elapsed()),
        Err(e) => Err(ProbeError::QueryFailed(e)),
    }
}

/// Get the default probe statement for a given driver.
///
/// Different databases have different optimal validation statements:
/// - PostgreSQL / SQLite / MS SQL: `SELECT 1`
/// - MySQL: `DO 1` (no result set to materialize)
pub fn default_probe_query(driver_name: &str) -> &'static str {
    match driver_name {
        "mysql" => "DO 1",
        "postgresql" | "postgres" => "SELECT 1",
        "sqlite" => "SELECT 1",
        "mssql" => "SELECT 1",
        _ => "SELECT 1", // Generic fallback
    }
}
