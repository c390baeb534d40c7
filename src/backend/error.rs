//! Errors surfaced by backend resolution.

use std::fmt;

use thiserror::Error;

use crate::backend::Backend;

/// Why a single candidate binding could not be bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ProbeError {
    reason: String,
}

impl ProbeError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One failed attempt to bind a candidate backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeAttempt {
    /// The candidate that was tried.
    pub backend: Backend,
    /// Why it could not be bound.
    pub error: ProbeError,
}

impl fmt::Display for ProbeAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.backend, self.error)
    }
}

/// Errors from backend resolution and application bootstrap.
///
/// Resolution failure is fatal for any caller that needs GUI
/// functionality: the candidate set is fixed when the library is built,
/// so the same process cannot retry its way to a different outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// None of the supported display backends could be bound.
    #[error("no display backend available; tried: {}", list_attempts(.attempts))]
    NoBackendAvailable {
        /// Every candidate that was probed, in priority order.
        attempts: Vec<ProbeAttempt>,
    },
}

fn list_attempts(attempts: &[ProbeAttempt]) -> String {
    if attempts.is_empty() {
        return "no candidates for this platform".to_owned();
    }
    let names: Vec<String> = attempts.iter().map(ToString::to_string).collect();
    names.join(", ")
}
