//! Input simulation and headless test contexts from the bound toolkit.
//!
//! Only available with the `test-support` cargo feature.

pub use gpui::{TestAppContext, VisualTestContext};
