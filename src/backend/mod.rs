//! Display backend selection.
//!
//! Exactly one platform display binding is bound per process. The binding
//! is chosen on first access by probing a fixed, ordered candidate list;
//! the outcome is recorded process-wide and never changes for the lifetime
//! of the process. Widget code reads the decision through
//! [`active_backend`] and reaches the toolkit through the alias modules
//! ([`event_loop`], [`widgets`], `test_support`) rather than naming it
//! directly.

mod error;
mod probe;
mod resolver;

pub mod event_loop;
#[cfg(feature = "test-support")]
pub mod test_support;
pub mod widgets;

pub use error::{BackendError, ProbeAttempt, ProbeError};
pub use resolver::{active_backend, resolve_backend};

use std::fmt;

/// Identifier for one supported display binding.
///
/// The set is closed and fixed at build time. The type itself is
/// platform-neutral so that code conditioned on a backend compiles on
/// every target; only the candidate list probed at resolution time is
/// target-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// A Wayland compositor session.
    Wayland,
    /// An X11 display server session.
    X11,
    /// macOS AppKit.
    AppKit,
    /// Windows Win32.
    Win32,
}

impl Backend {
    /// Stable lowercase name used in logs and error reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wayland => "wayland",
            Self::X11 => "x11",
            Self::AppKit => "appkit",
            Self::Win32 => "win32",
        }
    }

    /// Whether widgets should draw their own window decorations.
    ///
    /// Wayland compositors expect client-side decorations; the other
    /// bindings decorate windows themselves.
    pub fn prefers_client_side_decorations(&self) -> bool {
        matches!(self, Self::Wayland)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(Backend::Wayland.to_string(), "wayland");
        assert_eq!(Backend::X11.as_str(), "x11");
        assert_eq!(Backend::AppKit.as_str(), "appkit");
        assert_eq!(Backend::Win32.as_str(), "win32");
    }

    #[test]
    fn only_wayland_wants_client_side_decorations() {
        assert!(Backend::Wayland.prefers_client_side_decorations());
        assert!(!Backend::X11.prefers_client_side_decorations());
        assert!(!Backend::AppKit.prefers_client_side_decorations());
        assert!(!Backend::Win32.prefers_client_side_decorations());
    }
}
