//! Widget base types and element constructors from the bound toolkit.

pub use gpui::prelude;
pub use gpui::{
    Bounds, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point,
    ScrollWheelEvent, Window, WindowBounds, WindowOptions, canvas, div, point, px, size,
};
