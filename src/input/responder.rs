//! Gesture responder: decides whether to claim a touch, whether to give it
//! up when asked, and which callbacks to fire when it ends.

use super::config::SwipeConfig;
use super::gestures::{classify, is_click, GestureState, SwipeDirection};
use super::touch::{TouchEvent, TouchTracker};

type SwipeCallback = Box<dyn FnMut(SwipeDirection, &GestureState)>;
type DirectionCallback = Box<dyn FnMut(&GestureState)>;

/// Optional swipe callbacks.
///
/// On a swipe, `on_swipe` runs first, then the callback for that direction.
#[derive(Default)]
pub struct SwipeCallbacks {
    on_swipe: Option<SwipeCallback>,
    on_swipe_up: Option<DirectionCallback>,
    on_swipe_down: Option<DirectionCallback>,
    on_swipe_left: Option<DirectionCallback>,
    on_swipe_right: Option<DirectionCallback>,
}

impl SwipeCallbacks {
    /// Create an empty set of callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the direction for every swipe.
    pub fn on_swipe(mut self, f: impl FnMut(SwipeDirection, &GestureState) + 'static) -> Self {
        self.on_swipe = Some(Box::new(f));
        self
    }

    /// Called for swipes up.
    pub fn on_swipe_up(mut self, f: impl FnMut(&GestureState) + 'static) -> Self {
        self.on_swipe_up = Some(Box::new(f));
        self
    }

    /// Called for swipes down.
    pub fn on_swipe_down(mut self, f: impl FnMut(&GestureState) + 'static) -> Self {
        self.on_swipe_down = Some(Box::new(f));
        self
    }

    /// Called for swipes to the left.
    pub fn on_swipe_left(mut self, f: impl FnMut(&GestureState) + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(f));
        self
    }

    /// Called for swipes to the right.
    pub fn on_swipe_right(mut self, f: impl FnMut(&GestureState) + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(f));
        self
    }

    fn directional(&mut self, direction: SwipeDirection) -> Option<&mut DirectionCallback> {
        match direction {
            SwipeDirection::Up => self.on_swipe_up.as_mut(),
            SwipeDirection::Down => self.on_swipe_down.as_mut(),
            SwipeDirection::Left => self.on_swipe_left.as_mut(),
            SwipeDirection::Right => self.on_swipe_right.as_mut(),
        }
    }

    fn dispatch(&mut self, direction: SwipeDirection, state: &GestureState) {
        if let Some(on_swipe) = self.on_swipe.as_mut() {
            on_swipe(direction, state);
        }
        if let Some(callback) = self.directional(direction) {
            callback(state);
        }
    }
}

impl std::fmt::Debug for SwipeCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("on_swipe", &self.on_swipe.is_some())
            .field("on_swipe_up", &self.on_swipe_up.is_some())
            .field("on_swipe_down", &self.on_swipe_down.is_some())
            .field("on_swipe_left", &self.on_swipe_left.is_some())
            .field("on_swipe_right", &self.on_swipe_right.is_some())
            .finish()
    }
}

/// Owns one gesture surface's swipe handling.
#[derive(Debug)]
pub struct SwipeResponder {
    config: SwipeConfig,
    callbacks: SwipeCallbacks,
    /// Only `Some(false)` refuses a takeover request.
    responder_termination_request: Option<bool>,
    tracker: TouchTracker,
    /// Touch ID of the gesture this responder currently owns.
    claimed: Option<u64>,
}

impl SwipeResponder {
    /// Create a responder from a merged config and its callbacks.
    pub fn new(config: SwipeConfig, callbacks: SwipeCallbacks) -> Self {
        Self {
            config,
            callbacks,
            responder_termination_request: None,
            tracker: TouchTracker::new(),
            claimed: None,
        }
    }

    /// Set the takeover policy; only `Some(false)` refuses to yield.
    pub fn with_termination_request(mut self, allow: Option<bool>) -> Self {
        self.responder_termination_request = allow;
        self
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Get the touch tracker.
    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    /// Whether a gesture is currently owned by this responder.
    pub fn is_claimed(&self) -> bool {
        self.claimed.is_some()
    }

    /// Should this responder take the gesture described by `state`?
    pub fn should_claim(&self, state: &GestureState, active_touches: usize) -> bool {
        if !self.config.swipe_enabled() || active_touches != 1 || is_click(state, &self.config) {
            return false;
        }
        if self.config.need_vertical_scroll()
            && state.dy.abs() > self.config.scroll_vertical_threshold()
        {
            return false;
        }
        true
    }

    /// Should this responder give up its gesture when another asks?
    pub fn should_yield(&self) -> bool {
        self.responder_termination_request != Some(false)
    }

    /// Classify a finished gesture and fire callbacks for it.
    pub fn end_gesture(&mut self, state: &GestureState) -> Option<SwipeDirection> {
        let direction = classify(state, &self.config)?;
        tracing::debug!(%direction, ?state, "Swipe detected");
        self.callbacks.dispatch(direction, state);
        Some(direction)
    }

    /// Feed a raw touch event. Returns the swipe direction if this event
    /// finished a claimed gesture that classified as a swipe.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<SwipeDirection> {
        let id = event.id();
        let finished = self.tracker.handle_event(event);

        if event.is_terminal() {
            let state = finished?;
            if self.claimed != Some(id) {
                return None;
            }
            self.claimed = None;
            return self.end_gesture(&state);
        }

        if self.claimed.is_none() {
            let primary = self.tracker.primary_touch()?;
            if primary.id == id && primary.claimable {
                let state = primary.gesture_state();
                if self.should_claim(&state, self.tracker.touch_count()) {
                    tracing::debug!(id, ?state, "Claiming gesture");
                    self.claimed = Some(id);
                }
            }
        }
        None
    }

    /// Feed an event for a touch that started outside this surface.
    ///
    /// The touch counts towards the single-touch rule but is never claimed
    /// and never dispatches.
    pub fn observe_outside_touch(&mut self, event: TouchEvent) {
        self.tracker.handle_foreign_event(event);
    }

    /// Another responder wants the current gesture.
    ///
    /// Returns `true` if the gesture was handed over; in that case it is
    /// ended here (classified and dispatched) and the touch is dropped.
    pub fn request_termination(&mut self) -> bool {
        let Some(id) = self.claimed else {
            return true;
        };

        if !self.should_yield() {
            tracing::debug!(id, "Refusing termination request");
            return false;
        }

        tracing::debug!(id, "Yielding gesture");
        self.claimed = None;
        if let Some(state) = self.tracker.release(id) {
            self.end_gesture(&state);
        }
        true
    }
}
