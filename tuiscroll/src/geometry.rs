use std::ops::Range;

use crate::mapper;

/// Scroll axis of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Extract the along-axis coordinate from a widget-relative point.
    pub const fn axis(&self, x: u16, y: u16) -> u16 {
        match self {
            Orientation::Vertical => y,
            Orientation::Horizontal => x,
        }
    }
}

/// Per-layout geometry snapshot of the scrollbar.
///
/// Recomputed from controller state whenever it is needed, never persisted.
/// All cell values are along the active orientation, relative to the widget's
/// first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackMetrics {
    pub orientation: Orientation,
    /// Visible extent of the widget along the active orientation.
    pub frame_length: u16,
    /// Frame minus one cell per end button; equals the frame when the frame
    /// is too short to fit buttons.
    pub track_length: u16,
    /// False when `frame_length < 2` and the end buttons are omitted.
    pub has_buttons: bool,
    pub slider_length: u16,
    /// Slider offset from the track start, in track cells.
    pub slider_position: u16,
}

impl TrackMetrics {
    /// First track cell in widget coordinates.
    pub const fn track_start(&self) -> u16 {
        if self.has_buttons {
            1
        } else {
            0
        }
    }

    /// Cell of the decrement button, if buttons fit.
    pub fn decrement_cell(&self) -> Option<u16> {
        self.has_buttons.then_some(0)
    }

    /// Cell of the increment button, if buttons fit.
    pub fn increment_cell(&self) -> Option<u16> {
        self.has_buttons.then(|| self.frame_length - 1)
    }

    /// Track cells in widget coordinates.
    pub fn track_cells(&self) -> Range<u16> {
        let start = self.track_start();
        start..start + self.track_length
    }

    /// Slider cells in widget coordinates.
    pub fn slider_cells(&self) -> Range<u16> {
        let start = self.track_start() + self.slider_position;
        start..start + self.slider_length
    }

    /// Largest legal slider offset within the track.
    pub fn max_slider_position(&self) -> u16 {
        mapper::scrollable_track(self.track_length, self.slider_length)
    }
}
