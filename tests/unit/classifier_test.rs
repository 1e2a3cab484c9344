//! Unit tests for swipe classification.
//!
//! Covers click detection, axis validity, dominant-axis tie-breaking and the
//! exclusive threshold bounds.

use swipekit::input::{
    classify, is_click, is_valid_axis_swipe, GestureState, SwipeConfig, SwipeConfigOverrides,
    SwipeDirection,
};

fn defaults() -> SwipeConfig {
    SwipeConfig::default()
}

#[test]
fn test_small_gestures_are_clicks() {
    let config = defaults();
    for (dx, dy) in [(0.0, 0.0), (4.0, 4.0), (-4.9, 3.0), (0.0, -4.99)] {
        assert!(
            is_click(&GestureState::new(dx, dy, 0.0, 0.0), &config),
            "({dx}, {dy}) should be a click"
        );
    }
}

#[test]
fn test_dominant_horizontal() {
    let state = GestureState::new(100.0, 10.0, 0.5, 0.5);
    assert_eq!(classify(&state, &defaults()), Some(SwipeDirection::Right));
}

#[test]
fn test_cross_axis_rejection() {
    // dy = 90 is past the 80 point drift limit, and vy = 0 fails vertically.
    let state = GestureState::new(100.0, 90.0, 0.5, 0.0);
    assert_eq!(classify(&state, &defaults()), None);
}

#[test]
fn test_velocity_gate() {
    let state = GestureState::new(100.0, 0.0, 0.1, 0.0);
    assert_eq!(classify(&state, &defaults()), None);

    let far = GestureState::new(10_000.0, 0.0, 0.1, 0.0);
    assert_eq!(classify(&far, &defaults()), None);
}

#[test]
fn test_fallback_to_other_axis() {
    // Vertical dominates but is too slow; horizontal is valid.
    let state = GestureState::new(10.0, 100.0, 0.5, 0.1);
    assert_eq!(classify(&state, &defaults()), Some(SwipeDirection::Right));
}

#[test]
fn test_fallback_from_horizontal_to_vertical() {
    let state = GestureState::new(-60.0, -40.0, 0.1, -0.9);
    assert_eq!(classify(&state, &defaults()), Some(SwipeDirection::Up));
}

#[test]
fn test_velocity_exactly_at_threshold_is_invalid() {
    let config = defaults();
    assert!(!is_valid_axis_swipe(0.3, 0.0, &config));
    assert_eq!(
        classify(&GestureState::new(100.0, 0.0, 0.3, 0.0), &config),
        None
    );
}

#[test]
fn test_offset_exactly_at_threshold_is_invalid() {
    let config = defaults();
    assert!(!is_valid_axis_swipe(1.0, 80.0, &config));
    assert!(!is_valid_axis_swipe(1.0, -80.0, &config));
    assert!(is_valid_axis_swipe(1.0, 79.0, &config));
}

#[test]
fn test_at_most_one_direction() {
    let config = defaults();
    let values = [-120.0, -50.0, -1.0, 0.0, 1.0, 50.0, 120.0];
    let velocities = [-1.0, -0.31, 0.0, 0.31, 1.0];

    for &dx in &values {
        for &dy in &values {
            for &vx in &velocities {
                for &vy in &velocities {
                    let state = GestureState::new(dx, dy, vx, vy);
                    let Some(direction) = classify(&state, &config) else {
                        continue;
                    };
                    let axis_ok = if direction.is_horizontal() {
                        is_valid_axis_swipe(vx, dy, &config)
                    } else {
                        is_valid_axis_swipe(vy, dx, &config)
                    };
                    assert!(axis_ok, "{direction} reported for invalid axis: {state:?}");
                }
            }
        }
    }
}

#[test]
fn test_merged_overrides_drive_validity() {
    // User thresholds apply to the validity checks, not just the defaults.
    let strict = SwipeConfigOverrides::default()
        .with_velocity_threshold(0.8)
        .merge()
        .unwrap();
    let state = GestureState::new(100.0, 0.0, 0.5, 0.0);
    assert_eq!(classify(&state, &defaults()), Some(SwipeDirection::Right));
    assert_eq!(classify(&state, &strict), None);

    let loose = SwipeConfigOverrides::default()
        .with_directional_offset_threshold(120.0)
        .merge()
        .unwrap();
    let drifting = GestureState::new(100.0, 90.0, 0.5, 0.0);
    assert_eq!(classify(&drifting, &defaults()), None);
    assert_eq!(classify(&drifting, &loose), Some(SwipeDirection::Right));
}

#[test]
fn test_nan_is_not_a_swipe() {
    let state = GestureState::new(100.0, 0.0, f32::NAN, 0.5);
    assert_eq!(classify(&state, &defaults()), None);
}

#[test]
fn test_direction_serde_names() {
    let json = serde_json::to_string(&SwipeDirection::Left).unwrap();
    assert_eq!(json, "\"SWIPE_LEFT\"");
    let parsed: SwipeDirection = serde_json::from_str("\"SWIPE_DOWN\"").unwrap();
    assert_eq!(parsed, SwipeDirection::Down);
    assert_eq!(SwipeDirection::ALL.len(), 4);
}

#[test]
fn test_gesture_state_json() {
    let state: GestureState =
        serde_json::from_str(r#"{"dx": 100, "dy": 10, "vx": 0.5, "vy": 0.5}"#).unwrap();
    assert_eq!(state, GestureState::new(100.0, 10.0, 0.5, 0.5));
}
