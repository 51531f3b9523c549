//! Vigil Tester - Connection liveness testing for pooled connections
//!
//! This crate decides whether a pooled database connection is still usable.
//! An external pool manager calls it proactively (scheduled probes) and
//! reactively (after an operation on a borrowed connection fails), then acts
//! on the returned [`TestOutcome`]: keep the connection, discard and replace
//! it, or flush the whole pool.
//!
//! # Example
//!
//! ```ignore
//! use vigil_tester::{ConnectionTester, StandardConnectionTester};
//!
//! let tester = StandardConnectionTester::with_defaults();
//!
//! // Proactive: probe an idle connection
//! let verdict = tester.active_check(&*connection).await;
//! if !verdict.is_healthy() {
//!     pool.discard(connection);
//! }
//!
//! // Reactive: classify an error caught on a borrowed connection
//! let verdict = tester.status_on_error(&*connection, error).await;
//! if verdict.outcome().pool_should_be_discarded() {
//!     pool.flush();
//! }
//! ```

mod classify;
mod monitor;
mod outcome;
mod policy;
mod probe;
mod standard;
mod tester;
mod verdict;


pub use classify::classify_error;
pub use monitor::{TesterMonitor, create_shared_monitor};
pub use outcome::TestOutcome;
pub use policy::CausePolicy;
pub use probe::{ProbeError, ProbeResult, default_probe_query, run_probe};
pub use standard::{StandardConnectionTester, TesterConfig};
pub use tester::ConnectionTester;
pub use verdict::TestVerdict;
