//! Track layout and hit-testing.

use std::time::Instant;

use crate::event::{EventResult, PointerButton, PointerEvent};

use super::button::{ScrollButton, StepDirection};
use super::slider::ScrollSlider;
use super::state::ScrollState;

/// Lays out decrement button, slider and increment button along the active
/// orientation and routes pointer input to them.
///
/// A press landing on the track outside the slider pages the content toward
/// the click by one frame length, as a single discrete step.
#[derive(Debug)]
pub struct ScrollTrack {
    state: ScrollState,
    slider: ScrollSlider,
    decrement: ScrollButton,
    increment: ScrollButton,
}

impl ScrollTrack {
    pub fn new(state: ScrollState) -> Self {
        Self {
            slider: ScrollSlider::new(state.clone()),
            decrement: ScrollButton::new(state.clone(), StepDirection::Decrement),
            increment: ScrollButton::new(state.clone(), StepDirection::Increment),
            state,
        }
    }

    /// True while the slider holds a drag grab or a button press is active;
    /// the host must keep routing pointer input here until release.
    pub fn has_pointer_grab(&self) -> bool {
        self.slider.is_dragging() || self.decrement.is_pressed() || self.increment.is_pressed()
    }

    /// Route a widget-relative pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EventResult {
        // A release ends drag and press sessions unconditionally, even when
        // the bar auto-hid mid-session; the grab would otherwise stay
        // latched and keep intercepting pointer input.
        if let PointerEvent::Release {
            button: PointerButton::Left,
            ..
        } = event
        {
            let mut handled = self.slider.end_drag();
            handled |= self.decrement.release();
            handled |= self.increment.release();
            return if handled {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }
        if !self.state.is_visible() {
            // Motion inside a still-open session is swallowed, not acted on.
            return if self.has_pointer_grab() {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }
        match *event {
            PointerEvent::Press {
                x,
                y,
                button: PointerButton::Left,
            } => {
                let metrics = self.state.metrics();
                let axis = metrics.orientation.axis(x, y);
                if metrics.decrement_cell() == Some(axis) {
                    self.decrement.press();
                    EventResult::Consumed
                } else if metrics.increment_cell() == Some(axis) {
                    self.increment.press();
                    EventResult::Consumed
                } else if metrics.slider_cells().contains(&axis) {
                    self.slider.begin_drag(axis, &metrics);
                    EventResult::StartDrag
                } else if metrics.track_cells().contains(&axis) {
                    // Page toward the click.
                    let direction = if axis < metrics.slider_cells().start {
                        StepDirection::Decrement
                    } else {
                        StepDirection::Increment
                    };
                    self.state.page(direction);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            PointerEvent::Drag {
                x,
                y,
                button: PointerButton::Left,
            } => {
                let metrics = self.state.metrics();
                let axis = metrics.orientation.axis(x, y);
                if self.slider.is_dragging() {
                    self.slider.drag_to(axis, &metrics);
                    EventResult::Consumed
                } else {
                    let mut handled = self
                        .decrement
                        .pointer_moved(metrics.decrement_cell() == Some(axis));
                    handled |= self
                        .increment
                        .pointer_moved(metrics.increment_cell() == Some(axis));
                    if handled {
                        EventResult::Consumed
                    } else {
                        EventResult::Ignored
                    }
                }
            }
            PointerEvent::Wheel { delta, .. } => {
                self.state.scroll_by(i32::from(delta));
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Drive the press-repeat of both buttons. Returns true if any button
    /// re-activated on this tick.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut stepped = self.decrement.on_tick(now);
        stepped |= self.increment.on_tick(now);
        stepped
    }
}
