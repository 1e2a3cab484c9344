//! Touch input handling.
//!
//! Tracks raw touch events and summarizes the primary touch as a
//! [`GestureState`] (net displacement and velocity).

use super::gestures::GestureState;
use egui::{Pos2, Vec2};
use std::collections::VecDeque;

/// Only samples this recent contribute to the velocity estimate. Older
/// samples are dropped, so the history covers this window at any input rate.
const VELOCITY_HORIZON_MS: f64 = 100.0;

/// Touch event types. `time` is in seconds on the host's input clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Touch started
    Start { id: u64, pos: Pos2, time: f64 },
    /// Touch moved
    Move { id: u64, pos: Pos2, time: f64 },
    /// Touch ended
    End { id: u64, pos: Pos2, time: f64 },
    /// Touch cancelled by the host
    Cancel { id: u64, time: f64 },
}

impl TouchEvent {
    /// Get the touch ID.
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Start { id, .. }
            | TouchEvent::Move { id, .. }
            | TouchEvent::End { id, .. }
            | TouchEvent::Cancel { id, .. } => *id,
        }
    }

    /// Get the position, if available.
    pub fn pos(&self) -> Option<Pos2> {
        match self {
            TouchEvent::Start { pos, .. }
            | TouchEvent::Move { pos, .. }
            | TouchEvent::End { pos, .. } => Some(*pos),
            TouchEvent::Cancel { .. } => None,
        }
    }

    /// Get the timestamp in seconds.
    pub fn time(&self) -> f64 {
        match self {
            TouchEvent::Start { time, .. }
            | TouchEvent::Move { time, .. }
            | TouchEvent::End { time, .. }
            | TouchEvent::Cancel { time, .. } => *time,
        }
    }

    /// True for End and Cancel.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TouchEvent::End { .. } | TouchEvent::Cancel { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: f64,
    pos: Pos2,
}

/// State of an active touch.
#[derive(Debug, Clone)]
pub struct TouchState {
    /// Touch ID
    pub id: u64,
    /// Starting position
    pub start_pos: Pos2,
    /// Current position
    pub current_pos: Pos2,
    /// Whether this touch may become a claimed gesture. Touches that
    /// started outside the surface only count towards the touch total.
    pub claimable: bool,
    samples: VecDeque<Sample>,
}

impl TouchState {
    /// Create a new touch state.
    pub fn new(id: u64, pos: Pos2, time: f64) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back(Sample { time, pos });
        Self {
            id,
            start_pos: pos,
            current_pos: pos,
            claimable: true,
            samples,
        }
    }

    /// Update position.
    pub fn update_pos(&mut self, pos: Pos2, time: f64) {
        self.current_pos = pos;
        self.samples.push_back(Sample { time, pos });

        while let Some(oldest) = self.samples.front() {
            if (time - oldest.time) * 1000.0 <= VELOCITY_HORIZON_MS {
                break;
            }
            self.samples.pop_front();
        }
    }

    /// Get the delta from start to current position.
    pub fn delta(&self) -> Vec2 {
        self.current_pos - self.start_pos
    }

    /// Velocity in points per millisecond over the trailing window.
    pub fn velocity(&self) -> Vec2 {
        let Some(newest) = self.samples.back() else {
            return Vec2::ZERO;
        };

        let oldest = self
            .samples
            .iter()
            .find(|s| (newest.time - s.time) * 1000.0 <= VELOCITY_HORIZON_MS)
            .unwrap_or(newest);

        let elapsed_ms = ((newest.time - oldest.time) * 1000.0) as f32;
        if elapsed_ms <= 0.0 {
            return Vec2::ZERO;
        }

        (newest.pos - oldest.pos) / elapsed_ms
    }

    /// Summarize this touch for classification.
    pub fn gesture_state(&self) -> GestureState {
        GestureState::from_vectors(self.delta(), self.velocity())
    }
}

/// Tracks active touches and reports finished ones.
#[derive(Debug, Default)]
pub struct TouchTracker {
    touches: Vec<TouchState>,
}

impl TouchTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a touch event.
    ///
    /// Returns the final gesture state when a tracked touch ends or is
    /// cancelled.
    pub fn handle_event(&mut self, event: TouchEvent) -> Option<GestureState> {
        match event {
            TouchEvent::Start { id, pos, time } => {
                self.touches.retain(|t| t.id != id);
                self.touches.push(TouchState::new(id, pos, time));
                None
            }
            TouchEvent::Move { id, pos, time } => {
                if let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) {
                    touch.update_pos(pos, time);
                }
                None
            }
            TouchEvent::End { id, pos, time } => {
                let idx = self.touches.iter().position(|t| t.id == id)?;
                let mut touch = self.touches.remove(idx);
                touch.update_pos(pos, time);
                Some(touch.gesture_state())
            }
            TouchEvent::Cancel { id, .. } => self.release(id),
        }
    }

    /// Handle an event for a touch that must never be claimed.
    ///
    /// A Start registers the touch as non-claimable; other events behave
    /// as in [`handle_event`](Self::handle_event).
    pub fn handle_foreign_event(&mut self, event: TouchEvent) -> Option<GestureState> {
        let id = event.id();
        let result = self.handle_event(event);
        if let TouchEvent::Start { .. } = event {
            if let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) {
                touch.claimable = false;
            }
        }
        result
    }

    /// Stop tracking a touch, returning its gesture state as of now.
    pub fn release(&mut self, id: u64) -> Option<GestureState> {
        let idx = self.touches.iter().position(|t| t.id == id)?;
        Some(self.touches.remove(idx).gesture_state())
    }

    /// Get the number of active touches.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Whether a touch with this ID is active.
    pub fn is_tracking(&self, id: u64) -> bool {
        self.touches.iter().any(|t| t.id == id)
    }

    /// Get the primary (first) touch.
    pub fn primary_touch(&self) -> Option<&TouchState> {
        self.touches.first()
    }

    /// Gesture state of the primary touch, if any.
    pub fn gesture_state(&self) -> Option<GestureState> {
        self.primary_touch().map(TouchState::gesture_state)
    }

    /// Forget all touches.
    pub fn reset(&mut self) {
        self.touches.clear();
    }
}
