//! liveplot_backend is the display-backend resolution and application
//! bootstrap layer for GPUI live-plotting widgets.
//!
//! Exactly one display backend is bound per process, chosen on first use
//! from a fixed priority list. The crate exposes which backend is active,
//! stable aliases over the toolkit's event-loop, widget, and
//! test-automation surfaces, and the process-wide application singleton
//! that plot and image views bootstrap through.

#![forbid(unsafe_code)]

pub mod app;
pub mod backend;
pub mod config;

pub use app::{Application, get_application};
pub use backend::{
    Backend, BackendError, ProbeAttempt, ProbeError, active_backend, resolve_backend,
};
#[cfg(feature = "test-support")]
pub use backend::test_support;
pub use backend::{event_loop, widgets};
pub use config::{Config, config};
