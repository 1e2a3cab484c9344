//! SwipeKit - Swipe Gesture Classification
//!
//! Classifies a finished single-touch drag into up/down/left/right or no
//! swipe, and dispatches the matching callbacks. Includes touch tracking,
//! an egui container widget and TOML-backed configuration.

pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use input::{
    classify, GestureState, SwipeCallbacks, SwipeConfig, SwipeConfigOverrides, SwipeDirection,
    SwipeResponder,
};
pub use storage::config::AppConfig;
pub use ui::widgets::SwipeArea;
