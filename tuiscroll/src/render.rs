//! Renderable description of the scrollbar.
//!
//! The engine does not paint; it hands the painter an ordered list of cell
//! ranges with a role each. Glyph selection (arrows, block characters) is the
//! painter's concern.

use std::ops::Range;

use crate::geometry::TrackMetrics;

/// What a run of cells represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    DecrementButton,
    /// Track cells before the slider.
    TrackFilled,
    Slider,
    /// Track cells after the slider.
    TrackEmpty,
    IncrementButton,
}

/// A run of cells along the active orientation, relative to the widget's
/// first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub cells: Range<u16>,
    pub role: SegmentRole,
}

/// Build the ordered segment list for a geometry snapshot.
///
/// Non-empty segments tile the frame exactly: buttons at both ends when they
/// fit, the track split around the slider.
pub fn segments(metrics: &TrackMetrics) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(5);
    if metrics.frame_length == 0 {
        return segments;
    }

    if let Some(cell) = metrics.decrement_cell() {
        segments.push(Segment {
            cells: cell..cell + 1,
            role: SegmentRole::DecrementButton,
        });
    }

    let track = metrics.track_cells();
    let slider = metrics.slider_cells();
    if track.start < slider.start {
        segments.push(Segment {
            cells: track.start..slider.start,
            role: SegmentRole::TrackFilled,
        });
    }
    if !slider.is_empty() {
        segments.push(Segment {
            cells: slider.clone(),
            role: SegmentRole::Slider,
        });
    }
    if slider.end < track.end {
        segments.push(Segment {
            cells: slider.end..track.end,
            role: SegmentRole::TrackEmpty,
        });
    }

    if let Some(cell) = metrics.increment_cell() {
        segments.push(Segment {
            cells: cell..cell + 1,
            role: SegmentRole::IncrementButton,
        });
    }

    segments
}
