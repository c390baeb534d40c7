//! One-shot backend resolution.

use std::sync::OnceLock;

use crate::backend::probe::{Candidate, SUPPORTED};
use crate::backend::{Backend, BackendError, ProbeAttempt};

/// Process-wide backend resolution state.
///
/// A resolver starts unresolved and transitions to resolved exactly once,
/// on first access. The transition is guarded so that concurrent first
/// calls run the probe sequence at most once, and the outcome is cached
/// for the lifetime of the process. Failure is cached too: the candidate
/// set is fixed when the library is built, so a failed resolution cannot
/// be retried into success.
pub(crate) struct Resolver {
    candidates: &'static [Candidate],
    state: OnceLock<Result<Backend, BackendError>>,
}

impl Resolver {
    pub(crate) const fn new(candidates: &'static [Candidate]) -> Self {
        Self {
            candidates,
            state: OnceLock::new(),
        }
    }

    /// Resolve the backend, probing candidates on first call.
    ///
    /// Candidates are tried in priority order and the first that probes
    /// successfully is bound. Repeated calls return the cached outcome
    /// without probing again.
    pub(crate) fn resolve(&self) -> Result<Backend, BackendError> {
        self.state.get_or_init(|| select(self.candidates)).clone()
    }

    /// The active backend, if resolution has run and succeeded.
    pub(crate) fn resolved(&self) -> Option<Backend> {
        self.state
            .get()
            .and_then(|outcome| outcome.as_ref().ok().copied())
    }
}

fn select(candidates: &[Candidate]) -> Result<Backend, BackendError> {
    let mut attempts = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        tracing::debug!(backend = %candidate.backend, "probing display backend");
        match (candidate.probe)() {
            Ok(()) => {
                tracing::info!(backend = %candidate.backend, "display backend resolved");
                return Ok(candidate.backend);
            }
            Err(error) => {
                tracing::debug!(backend = %candidate.backend, %error, "display backend unavailable");
                attempts.push(ProbeAttempt {
                    backend: candidate.backend,
                    error,
                });
            }
        }
    }
    let error = BackendError::NoBackendAvailable { attempts };
    tracing::error!(%error, "backend resolution failed");
    Err(error)
}

static RESOLVER: Resolver = Resolver::new(SUPPORTED);

/// Resolve the process-wide backend, probing candidates on first call.
///
/// The first call walks the supported candidates in priority order and
/// binds the first one whose probe succeeds. Every later call returns the
/// same outcome without probing again, including a cached
/// [`BackendError::NoBackendAvailable`] when nothing was bindable.
pub fn resolve_backend() -> Result<Backend, BackendError> {
    RESOLVER.resolve()
}

/// The process-wide active backend.
///
/// `None` until [`resolve_backend`] has run, and forever if it failed.
pub fn active_backend() -> Option<Backend> {
    RESOLVER.resolved()
}
