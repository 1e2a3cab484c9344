//! Swipe thresholds and behavior switches.
//!
//! A [`SwipeConfig`] is built once per gesture surface by merging a partial
//! [`SwipeConfigOverrides`] onto the defaults, then read-only for the lifetime
//! of that surface.

use serde::{Deserialize, Serialize};

/// Default minimum velocity (points per millisecond) along the swipe axis.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.3;
/// Default maximum drift (points) on the axis perpendicular to the swipe.
pub const DEFAULT_DIRECTIONAL_OFFSET_THRESHOLD: f32 = 80.0;
/// Default displacement (points) below which a gesture counts as a click.
pub const DEFAULT_GESTURE_IS_CLICK_THRESHOLD: f32 = 5.0;
/// Default vertical displacement (points) beyond which nested scrolling wins.
pub const DEFAULT_SCROLL_VERTICAL_THRESHOLD: f32 = 5.0;

/// Merged, validated swipe configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    velocity_threshold: f32,
    directional_offset_threshold: f32,
    gesture_is_click_threshold: f32,
    need_vertical_scroll: bool,
    scroll_vertical_threshold: f32,
    swipe_enabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            directional_offset_threshold: DEFAULT_DIRECTIONAL_OFFSET_THRESHOLD,
            gesture_is_click_threshold: DEFAULT_GESTURE_IS_CLICK_THRESHOLD,
            need_vertical_scroll: false,
            scroll_vertical_threshold: DEFAULT_SCROLL_VERTICAL_THRESHOLD,
            swipe_enabled: true,
        }
    }
}

impl SwipeConfig {
    /// Merge overrides onto the defaults and validate the result.
    pub fn merged(overrides: &SwipeConfigOverrides) -> Result<Self, SwipeConfigError> {
        let defaults = Self::default();
        let config = Self {
            velocity_threshold: overrides
                .velocity_threshold
                .unwrap_or(defaults.velocity_threshold),
            directional_offset_threshold: overrides
                .directional_offset_threshold
                .unwrap_or(defaults.directional_offset_threshold),
            gesture_is_click_threshold: overrides
                .gesture_is_click_threshold
                .unwrap_or(defaults.gesture_is_click_threshold),
            need_vertical_scroll: overrides
                .need_vertical_scroll
                .unwrap_or(defaults.need_vertical_scroll),
            scroll_vertical_threshold: overrides
                .scroll_vertical_threshold
                .unwrap_or(defaults.scroll_vertical_threshold),
            swipe_enabled: overrides.swipe_enabled.unwrap_or(defaults.swipe_enabled),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SwipeConfigError> {
        let thresholds = [
            ("velocity_threshold", self.velocity_threshold),
            (
                "directional_offset_threshold",
                self.directional_offset_threshold,
            ),
            ("gesture_is_click_threshold", self.gesture_is_click_threshold),
            ("scroll_vertical_threshold", self.scroll_vertical_threshold),
        ];

        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(SwipeConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Minimum |velocity| along an axis for a swipe on that axis.
    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    /// Maximum |displacement| on the cross axis for a swipe.
    pub fn directional_offset_threshold(&self) -> f32 {
        self.directional_offset_threshold
    }

    /// Displacement below which, on both axes, a gesture is a click.
    pub fn gesture_is_click_threshold(&self) -> f32 {
        self.gesture_is_click_threshold
    }

    /// Whether vertical drags should be left to a nested scrollable.
    pub fn need_vertical_scroll(&self) -> bool {
        self.need_vertical_scroll
    }

    /// Vertical displacement beyond which claiming is declined
    /// when [`need_vertical_scroll`](Self::need_vertical_scroll) is set.
    pub fn scroll_vertical_threshold(&self) -> f32 {
        self.scroll_vertical_threshold
    }

    /// Whether the surface reacts to swipes at all.
    pub fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }
}

/// Caller-supplied partial configuration.
///
/// Every field is optional; missing fields fall back to the defaults when
/// merged with [`SwipeConfig::merged`]. In TOML both snake_case and the
/// camelCase spellings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfigOverrides {
    /// Minimum axis velocity
    #[serde(alias = "velocityThreshold", skip_serializing_if = "Option::is_none")]
    pub velocity_threshold: Option<f32>,
    /// Maximum cross-axis drift
    #[serde(
        alias = "directionalOffsetThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub directional_offset_threshold: Option<f32>,
    /// Click displacement bound
    #[serde(
        alias = "gestureIsClickThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub gesture_is_click_threshold: Option<f32>,
    /// Yield vertical drags to a nested scrollable
    #[serde(alias = "needVerticalScroll", skip_serializing_if = "Option::is_none")]
    pub need_vertical_scroll: Option<bool>,
    /// Vertical scroll hand-off bound
    #[serde(
        alias = "scrollVerticalThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_vertical_threshold: Option<f32>,
    /// Swipe detection on/off
    #[serde(alias = "swipeEnabled", skip_serializing_if = "Option::is_none")]
    pub swipe_enabled: Option<bool>,
}

impl SwipeConfigOverrides {
    /// Override the minimum axis velocity.
    pub fn with_velocity_threshold(mut self, value: f32) -> Self {
        self.velocity_threshold = Some(value);
        self
    }

    /// Override the maximum cross-axis drift.
    pub fn with_directional_offset_threshold(mut self, value: f32) -> Self {
        self.directional_offset_threshold = Some(value);
        self
    }

    /// Override the click displacement bound.
    pub fn with_gesture_is_click_threshold(mut self, value: f32) -> Self {
        self.gesture_is_click_threshold = Some(value);
        self
    }

    /// Let nested vertical scrolling win over swipes.
    pub fn with_need_vertical_scroll(mut self, value: bool) -> Self {
        self.need_vertical_scroll = Some(value);
        self
    }

    /// Override the vertical scroll hand-off bound.
    pub fn with_scroll_vertical_threshold(mut self, value: f32) -> Self {
        self.scroll_vertical_threshold = Some(value);
        self
    }

    /// Enable or disable swipe detection.
    pub fn with_swipe_enabled(mut self, value: bool) -> Self {
        self.swipe_enabled = Some(value);
        self
    }

    /// Shorthand for [`SwipeConfig::merged`].
    pub fn merge(&self) -> Result<SwipeConfig, SwipeConfigError> {
        SwipeConfig::merged(self)
    }
}

/// Errors produced while merging a swipe configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwipeConfigError {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidThreshold { name: &'static str, value: f32 },
}
