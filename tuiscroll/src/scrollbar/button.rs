//! End buttons stepping the content position.

use std::time::{Duration, Instant};

use super::state::{PositionUpdate, ScrollState};

/// Interval between repeat activations while a button stays pressed.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

/// Which way a button nudges the content position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrement,
    Increment,
}

/// A fixed one-cell button at either end of the track.
///
/// Owns no scrolling state; every activation goes through the controller.
/// While held it re-fires the same activation on a fixed interval, driven by
/// the host's tick calls, and stops when released or when the pointer leaves
/// its cell.
#[derive(Debug)]
pub struct ScrollButton {
    state: ScrollState,
    direction: StepDirection,
    pressed: bool,
    next_repeat: Option<Instant>,
}

impl ScrollButton {
    pub fn new(state: ScrollState, direction: StepDirection) -> Self {
        Self {
            state,
            direction,
            pressed: false,
            next_repeat: None,
        }
    }

    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Press: activate once and arm the repeat.
    pub fn press(&mut self) -> PositionUpdate {
        self.pressed = true;
        self.next_repeat = None;
        self.state.step(self.direction)
    }

    /// Release anywhere ends the press. Returns true if a press was active.
    pub fn release(&mut self) -> bool {
        self.next_repeat = None;
        std::mem::take(&mut self.pressed)
    }

    /// Track the pointer while a button is held somewhere on the widget.
    /// Leaving the button's cell cancels the press and its repeat.
    /// Returns true if this button was holding the press.
    pub fn pointer_moved(&mut self, inside: bool) -> bool {
        if !self.pressed {
            return false;
        }
        if !inside {
            log::debug!("[scrollbar] pointer left {:?} button, repeat cancelled", self.direction);
            self.release();
        }
        true
    }

    /// Host-scheduled timer callback. Each firing behaves exactly like a
    /// fresh activation. Returns true if an activation happened.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.pressed {
            return false;
        }
        match self.next_repeat {
            None => {
                self.next_repeat = Some(now + REPEAT_INTERVAL);
                false
            }
            Some(due) if now >= due => {
                self.state.step(self.direction);
                self.next_repeat = Some(now + REPEAT_INTERVAL);
                true
            }
            Some(_) => false,
        }
    }
}
