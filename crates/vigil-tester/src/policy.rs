//! Root-cause policy for reactive checks

use serde::{Deserialize, Serialize};

/// Whether a reactive check carries the observed error as the verdict's cause.
///
/// The caller of `status_on_error*` already holds the error it is asking
/// about, so propagating it back is redundant for some pools and convenient
/// for others (one place to log from). This is a documented policy choice,
/// not a guess: the default propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausePolicy {
    /// Copy the observed error into the verdict's cause (default)
    #[default]
    PropagateObserved,
    /// Leave the verdict's cause empty; the caller already has the error
    Omit,
}

impl CausePolicy {
    /// Check if the policy keeps the observed error on the verdict.
    pub fn keeps_cause(&self) -> bool {
        matches!(self, CausePolicy::PropagateObserved)
    }
}
