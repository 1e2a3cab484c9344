//! Swipe classification.
//!
//! Maps a finished gesture (net displacement and velocity) to one of four
//! swipe directions, or to no swipe at all.

use super::config::SwipeConfig;
use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    #[serde(rename = "SWIPE_UP")]
    Up,
    #[serde(rename = "SWIPE_DOWN")]
    Down,
    #[serde(rename = "SWIPE_LEFT")]
    Left,
    #[serde(rename = "SWIPE_RIGHT")]
    Right,
}

impl SwipeDirection {
    /// Every direction, in declaration order.
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ];

    /// Stable name used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Up => "SWIPE_UP",
            SwipeDirection::Down => "SWIPE_DOWN",
            SwipeDirection::Left => "SWIPE_LEFT",
            SwipeDirection::Right => "SWIPE_RIGHT",
        }
    }

    /// True for left and right.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    /// True for up and down.
    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }

    fn horizontal(dx: f32) -> Self {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    }

    fn vertical(dy: f32) -> Self {
        if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SwipeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("swipe_").unwrap_or(&name);
        match name {
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Returned when a string does not name a swipe direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown swipe direction: {0}")]
pub struct ParseDirectionError(pub String);

/// Summary of a gesture: net displacement in points, velocity in points
/// per millisecond. Both are signed; +y points down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Horizontal displacement
    pub dx: f32,
    /// Vertical displacement
    pub dy: f32,
    /// Horizontal velocity
    pub vx: f32,
    /// Vertical velocity
    pub vy: f32,
}

impl GestureState {
    /// Create a gesture state from its four components.
    pub fn new(dx: f32, dy: f32, vx: f32, vy: f32) -> Self {
        Self { dx, dy, vx, vy }
    }

    /// Build from a displacement and a velocity vector.
    pub fn from_vectors(delta: Vec2, velocity: Vec2) -> Self {
        Self::new(delta.x, delta.y, velocity.x, velocity.y)
    }

    /// Net displacement as a vector.
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Velocity as a vector.
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite() && self.vx.is_finite() && self.vy.is_finite()
    }

    /// See [`is_click`].
    pub fn is_click(&self, config: &SwipeConfig) -> bool {
        is_click(self, config)
    }

    /// See [`classify`].
    pub fn classify(&self, config: &SwipeConfig) -> Option<SwipeDirection> {
        classify(self, config)
    }
}

/// A gesture that barely moved on both axes is a click, not a drag.
pub fn is_click(state: &GestureState, config: &SwipeConfig) -> bool {
    let threshold = config.gesture_is_click_threshold();
    state.dx.abs() < threshold && state.dy.abs() < threshold
}

/// Fast enough along the axis, straight enough across it.
///
/// Both bounds are exclusive: a value exactly at a threshold fails.
pub fn is_valid_axis_swipe(
    velocity_on_axis: f32,
    cross_axis_displacement: f32,
    config: &SwipeConfig,
) -> bool {
    velocity_on_axis.abs() > config.velocity_threshold()
        && cross_axis_displacement.abs() < config.directional_offset_threshold()
}

/// Classify a finished gesture.
///
/// The axis with the larger displacement is tried first; if it does not
/// qualify, the other axis is tried. Ties go to the vertical axis.
pub fn classify(state: &GestureState, config: &SwipeConfig) -> Option<SwipeDirection> {
    if !state.is_finite() {
        tracing::trace!(?state, "Ignoring non-finite gesture");
        return None;
    }

    let valid_horizontal = is_valid_axis_swipe(state.vx, state.dy, config);
    let valid_vertical = is_valid_axis_swipe(state.vy, state.dx, config);

    let horizontal = valid_horizontal.then(|| SwipeDirection::horizontal(state.dx));
    let vertical = valid_vertical.then(|| SwipeDirection::vertical(state.dy));

    if state.dx.abs() > state.dy.abs() {
        horizontal.or(vertical)
    } else {
        vertical.or(horizontal)
    }
}
