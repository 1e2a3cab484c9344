//! Swipe input handling.
//!
//! Provides the swipe classifier, its configuration, touch tracking and the
//! responder that ties them to callbacks.

pub mod config;
pub mod gestures;
pub mod responder;
pub mod touch;

// Re-export types
pub use config::{SwipeConfig, SwipeConfigError, SwipeConfigOverrides};
pub use gestures::{
    classify, is_click, is_valid_axis_swipe, GestureState, ParseDirectionError, SwipeDirection,
};
pub use responder::{SwipeCallbacks, SwipeResponder};
pub use touch::{TouchEvent, TouchState, TouchTracker};
