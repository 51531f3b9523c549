//! The connection tester trait

use std::sync::Arc;

use async_trait::async_trait;
use vigil_core::{Connection, VigilError};

use crate::verdict::TestVerdict;

/// Capability that decides whether a pooled connection is still usable.
///
/// A pool manager calls this proactively (`active_check*`) on its own
/// health-check schedule, and reactively (`status_on_error*`) immediately
/// after an operation on a borrowed connection fails.
///
/// Implementors provide the two `*_with_query` primitives; the reduced-arity
/// conveniences are default methods defined as exactly the primitive with
/// `None` for the missing argument. Ordinary liveness failure is never an
/// error return: both operations communicate it through the [`TestVerdict`].
///
/// A single tester instance is shared across many pooled connections checked
/// concurrently, so implementations must not keep mutable state across calls.
#[async_trait]
pub trait ConnectionTester: Send + Sync {
    /// Actively probe a connection, independent of any prior error.
    ///
    /// `preferred_query` is the caller's validation statement; `None` means
    /// the tester's own default probe. On probe failure the verdict is
    /// non-healthy and carries the causing error.
    async fn active_check_with_query(
        &self,
        conn: &dyn Connection,
        preferred_query: Option<&str>,
    ) -> TestVerdict;

    /// Classify an error just observed on a connection.
    ///
    /// Decides whether the error means this connection is bad, the whole
    /// pool is suspect, or the error does not indicate connection failure
    /// at all (a healthy verdict; the caller may re-verify with an active
    /// check). `preferred_query` is carried for testers that re-verify
    /// reactively.
    async fn status_on_error_with_query(
        &self,
        conn: &dyn Connection,
        error: Arc<VigilError>,
        preferred_query: Option<&str>,
    ) -> TestVerdict;

    /// Actively probe a connection using the tester's default probe.
    ///
    /// Equivalent to `active_check_with_query(conn, None)`.
    async fn active_check(&self, conn: &dyn Connection) -> TestVerdict {
        self.active_check_with_query(conn, None).await
    }

    /// Classify an observed error using the tester's default probe.
    ///
    /// Equivalent to `status_on_error_with_query(conn, error, None)`.
    async fn status_on_error(&self, conn: &dyn Connection, error: Arc<VigilError>) -> TestVerdict {
        self.status_on_error_with_query(conn, error, None).await
    }
}

#[async_trait]
impl<T: ConnectionTester + ?Sized> ConnectionTester for Arc<T> {
    async fn active_check_with_query(
        &self,
        conn: &dyn Connection,
        preferred_query: Option<&str>,
    ) -> TestVerdict {
        (**self).active_check_with_query(conn, preferred_query).await
    }

    async fn status_on_error_with_query(
        &self,
        conn: &dyn Connection,
        error: Arc<VigilError>,
        preferred_query: Option<&str>,
    ) -> TestVerdict {
        (**self)
            .status_on_error_with_query(conn, error, preferred_query)
            .await
    }
}
