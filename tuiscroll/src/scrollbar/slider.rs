//! The draggable indicator.

use crate::geometry::TrackMetrics;

use super::state::{PositionUpdate, ScrollState};

/// Active drag session: where within the slider the user grabbed it.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    grab_offset: u16,
}

/// The slider converts pointer motion into controller position calls.
///
/// It owns only the drag session; the content position itself stays with the
/// controller. A release anywhere ends the session, otherwise the slider
/// would stay latched and keep intercepting pointer input.
#[derive(Debug)]
pub struct ScrollSlider {
    state: ScrollState,
    drag: Option<DragSession>,
}

impl ScrollSlider {
    pub fn new(state: ScrollState) -> Self {
        Self { state, drag: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Press inside the slider: capture the offset between the press point
    /// and the slider start.
    pub fn begin_drag(&mut self, axis: u16, metrics: &TrackMetrics) {
        let slider_start = metrics.track_start() + metrics.slider_position;
        let grab_offset = axis.saturating_sub(slider_start);
        log::debug!("[scrollbar] drag start at cell {axis}, grab offset {grab_offset}");
        self.drag = Some(DragSession { grab_offset });
    }

    /// Pointer moved with the button held: recompute the slider target from
    /// the captured offset, clamp it into the track and push the mapped
    /// content position through the controller.
    pub fn drag_to(&mut self, axis: u16, metrics: &TrackMetrics) -> PositionUpdate {
        let Some(drag) = self.drag else {
            return PositionUpdate::Unchanged;
        };
        let target = axis
            .saturating_sub(metrics.track_start())
            .saturating_sub(drag.grab_offset)
            .min(metrics.max_slider_position());
        self.state.set_slider_position(target)
    }

    /// End the session. Returns true if a drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
