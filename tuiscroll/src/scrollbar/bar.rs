//! The public scrollbar widget.

use std::time::Instant;

use crate::event::{EventResult, PointerEvent};
use crate::geometry::{Orientation, TrackMetrics};
use crate::render::{self, Segment};

use super::state::{ChangeDecision, PositionUpdate, ScrollState};
use super::track::ScrollTrack;
use super::StepDirection;

/// Proportional scrollbar: controller state plus the interactive track.
///
/// Construct one, feed it `recompute` on layout changes and `handle_pointer`
/// on input, and bind `on_content_position_changed` to scroll a paired
/// content view.
#[derive(Debug)]
pub struct ScrollBar {
    state: ScrollState,
    track: ScrollTrack,
}

impl ScrollBar {
    pub fn new() -> Self {
        let state = ScrollState::new();
        Self {
            track: ScrollTrack::new(state.clone()),
            state,
        }
    }

    /// Clone of the controller handle, for wiring bound consumers.
    pub fn state(&self) -> ScrollState {
        self.state.clone()
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    pub fn content_size(&self) -> i32 {
        self.state.content_size()
    }

    pub fn set_content_size(&self, size: i32) {
        self.state.set_content_size(size);
    }

    pub fn content_position(&self) -> i32 {
        self.state.content_position()
    }

    pub fn set_content_position(&self, position: i32) -> PositionUpdate {
        self.state.set_content_position(position)
    }

    pub fn slider_position(&self) -> u16 {
        self.state.slider_position()
    }

    pub fn slider_length(&self) -> u16 {
        self.state.slider_length()
    }

    pub fn set_slider_position(&self, position: u16) -> PositionUpdate {
        self.state.set_slider_position(position)
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.state.set_orientation(orientation);
    }

    pub fn increment(&self) -> i32 {
        self.state.increment()
    }

    pub fn set_increment(&self, increment: i32) {
        self.state.set_increment(increment);
    }

    pub fn auto_hide(&self) -> bool {
        self.state.auto_hide()
    }

    pub fn set_auto_hide(&self, auto_hide: bool) {
        self.state.set_auto_hide(auto_hide);
    }

    pub fn keep_content_in_all_viewport(&self) -> bool {
        self.state.keep_content_in_all_viewport()
    }

    pub fn set_keep_content_in_all_viewport(&self, keep: bool) {
        self.state.set_keep_content_in_all_viewport(keep);
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    pub fn on_content_position_changing(
        &self,
        observer: impl FnMut(i32, i32) -> ChangeDecision + Send + Sync + 'static,
    ) {
        self.state.on_content_position_changing(observer);
    }

    pub fn on_content_position_changed(
        &self,
        observer: impl FnMut(i32, i32) + Send + Sync + 'static,
    ) {
        self.state.on_content_position_changed(observer);
    }

    pub fn on_size_changed(&self, observer: impl FnMut(i32) + Send + Sync + 'static) {
        self.state.on_size_changed(observer);
    }

    // -------------------------------------------------------------------------
    // Geometry + input
    // -------------------------------------------------------------------------

    /// Called by the host layout whenever the frame is resized.
    pub fn recompute(&self, frame_length: u16) {
        self.state.recompute(frame_length);
    }

    pub fn metrics(&self) -> TrackMetrics {
        self.state.metrics()
    }

    /// Step the content position as a button activation would.
    pub fn activate_button(&self, direction: StepDirection) -> PositionUpdate {
        self.state.step(direction)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EventResult {
        self.track.handle_pointer(event)
    }

    /// Drive press repeat; call from the host's timer.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.track.on_tick(now)
    }

    pub fn has_pointer_grab(&self) -> bool {
        self.track.has_pointer_grab()
    }

    /// Renderable cell extents for the painter; empty when hidden.
    pub fn segments(&self) -> Vec<Segment> {
        if !self.state.is_visible() {
            return Vec::new();
        }
        render::segments(&self.state.metrics())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.state.clear_dirty()
    }
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new()
    }
}
