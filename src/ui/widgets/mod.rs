//! UI widgets for reusable components.

pub mod swipe_area;

pub use swipe_area::{touch_event_from_egui, SwipeArea, SwipeAreaResponse, MOUSE_TOUCH_ID};
