//! UI module for egui integration.

pub mod widgets;

pub use widgets::{SwipeArea, SwipeAreaResponse};
