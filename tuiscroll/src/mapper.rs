//! Pure conversions between content space and track space.
//!
//! No state, no side effects; callable from anywhere as long as the inputs
//! are a consistent snapshot. All divisions are guarded and both mapping
//! directions independently clamp their result, so degenerate geometry
//! (`frame_length <= 1`, `content_size == 0`) yields position 0 or a
//! full-length slider instead of dividing by zero.

/// Track extent for a frame: one cell is reserved for each end button,
/// unless the frame is too short to fit them.
pub const fn track_length(frame_length: u16) -> u16 {
    if frame_length < 2 {
        frame_length
    } else {
        frame_length - 2
    }
}

/// Content extent not covered by the frame.
pub fn scrollable_content(content_size: i32, frame_length: u16) -> i32 {
    (content_size - i32::from(frame_length)).max(0)
}

/// Track extent not covered by the slider.
pub fn scrollable_track(track_length: u16, slider_length: u16) -> u16 {
    track_length.saturating_sub(slider_length)
}

/// Slider extent proportional to the visible fraction of the content.
///
/// Never collapses to zero cells while a track exists, and never exceeds
/// the track.
pub fn slider_length(content_size: i32, frame_length: u16, track_length: u16) -> u16 {
    if track_length == 0 {
        return 0;
    }
    // Content that fits entirely gets a full-length slider.
    if content_size <= 0 || content_size <= i32::from(frame_length) {
        return track_length;
    }
    let scaled = div_round(
        i64::from(track_length) * i64::from(frame_length),
        i64::from(content_size),
    );
    scaled.clamp(1, i64::from(track_length)) as u16
}

/// Content position -> slider offset, proportional mode.
pub fn slider_position(
    content_position: i32,
    content_size: i32,
    frame_length: u16,
    track_length: u16,
    slider_length: u16,
) -> u16 {
    let scrollable = scrollable_content(content_size, frame_length);
    let track = scrollable_track(track_length, slider_length);
    if scrollable == 0 || track == 0 {
        return 0;
    }
    let scaled = div_round(
        i64::from(content_position.max(0)) * i64::from(track),
        i64::from(scrollable),
    );
    scaled.clamp(0, i64::from(track)) as u16
}

/// Slider offset -> content position, proportional mode (used when dragging).
pub fn content_position(
    slider_position: u16,
    content_size: i32,
    frame_length: u16,
    track_length: u16,
    slider_length: u16,
) -> i32 {
    let scrollable = scrollable_content(content_size, frame_length);
    let track = scrollable_track(track_length, slider_length);
    if track == 0 {
        return 0;
    }
    let scaled = div_round(
        i64::from(slider_position) * i64::from(scrollable),
        i64::from(track),
    );
    scaled.clamp(0, i64::from(scrollable)) as i32
}

/// Content position -> slider offset, keep-content-in-all-viewport mode.
///
/// The slider tracks the content position one to one, clamped into the track.
pub fn direct_slider_position(
    content_position: i32,
    track_length: u16,
    slider_length: u16,
) -> u16 {
    let track = scrollable_track(track_length, slider_length);
    content_position.clamp(0, i32::from(track)) as u16
}

/// Round-half-up division for non-negative numerators.
fn div_round(numerator: i64, divisor: i64) -> i64 {
    debug_assert!(divisor > 0);
    (numerator + divisor / 2) / divisor
}
