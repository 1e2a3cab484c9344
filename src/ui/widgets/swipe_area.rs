//! Swipe area container.
//!
//! Wraps arbitrary child UI and turns touches that start on it into swipe
//! callbacks through a [`SwipeResponder`]. The child is laid out exactly as it
//! would be without the wrapper.

use crate::input::{SwipeDirection, SwipeResponder, TouchEvent};
use egui::{Event, InnerResponse, PointerButton, Rect, Response, TouchPhase, Ui};

/// Touch ID used for the synthetic touch driven by the mouse.
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

/// Result of showing a [`SwipeArea`].
pub struct SwipeAreaResponse<R> {
    /// What the child content returned
    pub inner: R,
    /// Response covering the child content
    pub response: Response,
    /// Swipe finished during this frame, if any
    pub swipe: Option<SwipeDirection>,
}

/// Container that detects swipes over its content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeArea {
    emulate_touch_with_mouse: bool,
}

impl SwipeArea {
    /// Create a swipe area that reacts to touch events only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat primary-button mouse drags as a single touch.
    pub fn emulate_touch_with_mouse(mut self, enabled: bool) -> Self {
        self.emulate_touch_with_mouse = enabled;
        self
    }

    /// Show `add_contents` and feed this frame's touches to `responder`.
    ///
    /// Touches starting outside the content are tracked only so that they
    /// count as extra fingers. All events of one frame share the frame's
    /// input time, so a gesture that starts and ends within a single frame
    /// has zero velocity and is never a swipe.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        responder: &mut SwipeResponder,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> SwipeAreaResponse<R> {
        let InnerResponse { inner, response } = ui.scope(add_contents);
        let swipe = self.process_events(ui, response.rect, responder);

        SwipeAreaResponse {
            inner,
            response,
            swipe,
        }
    }

    fn process_events(
        &self,
        ui: &Ui,
        rect: Rect,
        responder: &mut SwipeResponder,
    ) -> Option<SwipeDirection> {
        let (events, time) = ui.input(|i| (i.events.clone(), i.time));

        let mut swipe = None;
        for event in &events {
            let Some(touch) = touch_event_from_egui(event, time, self.emulate_touch_with_mouse)
            else {
                continue;
            };

            match touch {
                TouchEvent::Start { pos, .. } if !rect.contains(pos) => {
                    responder.observe_outside_touch(touch);
                    continue;
                }
                TouchEvent::Start { .. } => {}
                other if !responder.tracker().is_tracking(other.id()) => continue,
                _ => {}
            }

            if let Some(direction) = responder.handle_touch(touch) {
                swipe = Some(direction);
            }
        }
        swipe
    }
}

/// Convert an egui input event to a [`TouchEvent`].
///
/// Returns `None` for events that are not touches (or mouse events, unless
/// `emulate_mouse` is set).
pub fn touch_event_from_egui(event: &Event, time: f64, emulate_mouse: bool) -> Option<TouchEvent> {
    match event {
        Event::Touch { id, phase, pos, .. } => {
            let id = id.0;
            let pos = *pos;
            Some(match phase {
                TouchPhase::Start => TouchEvent::Start { id, pos, time },
                TouchPhase::Move => TouchEvent::Move { id, pos, time },
                TouchPhase::End => TouchEvent::End { id, pos, time },
                TouchPhase::Cancel => TouchEvent::Cancel { id, time },
            })
        }
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } if emulate_mouse => {
            let (id, pos) = (MOUSE_TOUCH_ID, *pos);
            Some(if *pressed {
                TouchEvent::Start { id, pos, time }
            } else {
                TouchEvent::End { id, pos, time }
            })
        }
        Event::PointerMoved(pos) if emulate_mouse => Some(TouchEvent::Move {
            id: MOUSE_TOUCH_ID,
            pos: *pos,
            time,
        }),
        Event::PointerGone if emulate_mouse => Some(TouchEvent::Cancel {
            id: MOUSE_TOUCH_ID,
            time,
        }),
        _ => None,
    }
}
