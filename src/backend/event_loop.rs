//! Event loop and application context types from the bound toolkit.
//!
//! Widget code imports these through the alias rather than naming the
//! toolkit, so the binding behind them can change without touching call
//! sites.

pub use gpui::{App, AppContext, Application, Context};
