use std::time::{Duration, Instant};

use tuiscroll::{
    EventResult, Orientation, PointerButton, PointerEvent, ScrollBar, SegmentRole,
};

fn init_logs() {
    let _ = simplelog::SimpleLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());
}

/// Vertical bar over 20 content units in a 10-cell frame:
/// track cells 1..9, slider 4 cells long.
fn vertical_bar() -> ScrollBar {
    let bar = ScrollBar::new();
    bar.recompute(10);
    bar.set_content_size(20);
    bar
}

fn press(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Press {
        x,
        y,
        button: PointerButton::Left,
    }
}

fn drag(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Drag {
        x,
        y,
        button: PointerButton::Left,
    }
}

fn release(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Release {
        x,
        y,
        button: PointerButton::Left,
    }
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn test_press_on_end_buttons_steps() {
    init_logs();
    let mut bar = vertical_bar();

    assert_eq!(bar.handle_pointer(&press(0, 9)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 1, "increment button at the frame end");
    bar.handle_pointer(&release(0, 9));

    assert_eq!(bar.handle_pointer(&press(0, 0)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 0, "decrement button at the frame start");
    bar.handle_pointer(&release(0, 0));
    assert!(!bar.has_pointer_grab());
}

#[test]
fn test_held_button_repeats_until_release() {
    let mut bar = vertical_bar();
    let start = Instant::now();

    bar.handle_pointer(&press(0, 9));
    assert_eq!(bar.content_position(), 1);

    // First tick arms the repeat, the next elapsed-interval tick fires it
    assert!(!bar.on_tick(start));
    assert!(bar.on_tick(start + Duration::from_millis(150)));
    assert_eq!(bar.content_position(), 2);

    // Not yet due again
    assert!(!bar.on_tick(start + Duration::from_millis(200)));

    bar.handle_pointer(&release(5, 20));
    assert!(!bar.on_tick(start + Duration::from_secs(5)), "released ends repeat");
    assert_eq!(bar.content_position(), 2);
}

#[test]
fn test_pointer_leaving_button_cancels_repeat() {
    let mut bar = vertical_bar();
    let start = Instant::now();

    bar.handle_pointer(&press(0, 9));
    assert!(bar.has_pointer_grab());

    // Slide off the button while still holding it
    assert_eq!(bar.handle_pointer(&drag(0, 5)), EventResult::Consumed);
    assert!(!bar.has_pointer_grab());
    assert!(!bar.on_tick(start + Duration::from_secs(1)));
    assert_eq!(bar.content_position(), 1);
}

// ============================================================================
// Track paging
// ============================================================================

#[test]
fn test_track_press_pages_toward_click() {
    let mut bar = vertical_bar();

    // Slider occupies cells 1..5; a press below it pages forward one frame
    assert_eq!(bar.handle_pointer(&press(0, 7)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 10);

    // Slider is now at cells 5..9; a press above it pages back
    assert_eq!(bar.handle_pointer(&press(0, 2)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 0);
}

// ============================================================================
// Slider drag
// ============================================================================

#[test]
fn test_drag_slider_to_track_start() {
    init_logs();
    let mut bar = vertical_bar();
    bar.set_content_position(10);
    // Slider cells 5..9; grab its second cell
    assert_eq!(bar.handle_pointer(&press(0, 6)), EventResult::StartDrag);
    assert!(bar.has_pointer_grab());

    // Drag so the slider start lands on the track start
    assert_eq!(bar.handle_pointer(&drag(0, 2)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 0);
    assert_eq!(bar.slider_position(), 0);

    assert_eq!(bar.handle_pointer(&release(0, 2)), EventResult::Consumed);
    assert!(!bar.has_pointer_grab());
}

#[test]
fn test_drag_clamps_past_track_end() {
    let mut bar = vertical_bar();
    bar.handle_pointer(&press(0, 2)); // slider cells 1..5
    bar.handle_pointer(&drag(0, 60));
    assert_eq!(bar.content_position(), 10, "overshoot clamps to the bound");
    assert_eq!(bar.slider_position(), 4);
}

#[test]
fn test_release_while_auto_hidden_ends_drag() {
    let mut bar = vertical_bar();
    assert_eq!(bar.handle_pointer(&press(0, 2)), EventResult::StartDrag);

    // A bound consumer shrinks the content mid-drag; the bar auto-hides
    bar.set_content_size(5);
    assert!(!bar.is_visible());
    assert!(bar.has_pointer_grab());

    assert_eq!(bar.handle_pointer(&release(0, 2)), EventResult::Consumed);
    assert!(!bar.has_pointer_grab(), "release while hidden must end the drag");
}

#[test]
fn test_release_while_auto_hidden_ends_button_press() {
    let mut bar = vertical_bar();
    let start = Instant::now();
    bar.handle_pointer(&press(0, 9));

    bar.set_content_size(5);
    assert!(!bar.is_visible());

    assert_eq!(bar.handle_pointer(&release(0, 9)), EventResult::Consumed);
    assert!(!bar.has_pointer_grab(), "release while hidden must end the press");
    assert!(!bar.on_tick(start + Duration::from_secs(1)), "repeat is dead too");
}

#[test]
fn test_release_outside_widget_ends_drag() {
    let mut bar = vertical_bar();
    assert_eq!(bar.handle_pointer(&press(0, 2)), EventResult::StartDrag);
    assert_eq!(bar.handle_pointer(&release(40, 40)), EventResult::Consumed);
    assert!(!bar.has_pointer_grab(), "release anywhere must end the session");
    assert_eq!(bar.handle_pointer(&drag(0, 8)), EventResult::Ignored);
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_steps_by_increment() {
    let mut bar = vertical_bar();
    bar.set_increment(2);

    assert_eq!(
        bar.handle_pointer(&PointerEvent::Wheel { x: 0, y: 4, delta: 1 }),
        EventResult::Consumed
    );
    assert_eq!(bar.content_position(), 2);

    bar.handle_pointer(&PointerEvent::Wheel { x: 0, y: 4, delta: -1 });
    bar.handle_pointer(&PointerEvent::Wheel { x: 0, y: 4, delta: -1 });
    assert_eq!(bar.content_position(), 0, "wheel clamps at the start");
}

// ============================================================================
// Orientation and visibility routing
// ============================================================================

#[test]
fn test_horizontal_bar_uses_x_axis() {
    let mut bar = vertical_bar();
    bar.set_orientation(Orientation::Horizontal);

    assert_eq!(bar.handle_pointer(&press(9, 0)), EventResult::Consumed);
    assert_eq!(bar.content_position(), 1, "increment button at the right edge");
}

#[test]
fn test_hidden_bar_ignores_input() {
    let mut bar = ScrollBar::new();
    bar.recompute(10);
    bar.set_content_size(5); // fits, auto-hidden

    assert!(!bar.is_visible());
    assert_eq!(bar.handle_pointer(&press(0, 0)), EventResult::Ignored);
    assert!(bar.segments().is_empty());
}

#[test]
fn test_right_button_is_ignored() {
    let mut bar = vertical_bar();
    let event = PointerEvent::Press {
        x: 0,
        y: 0,
        button: PointerButton::Right,
    };
    assert_eq!(bar.handle_pointer(&event), EventResult::Ignored);
    assert_eq!(bar.content_position(), 0);
}

// ============================================================================
// Render description
// ============================================================================

#[test]
fn test_segments_tile_the_frame() {
    let bar = vertical_bar();
    let segments = bar.segments();

    let roles: Vec<SegmentRole> = segments.iter().map(|s| s.role).collect();
    assert_eq!(
        roles,
        vec![
            SegmentRole::DecrementButton,
            SegmentRole::Slider,
            SegmentRole::TrackEmpty,
            SegmentRole::IncrementButton,
        ]
    );

    // Contiguous cover of 0..frame
    let mut next = 0;
    for segment in &segments {
        assert_eq!(segment.cells.start, next, "gap before {:?}", segment.role);
        next = segment.cells.end;
    }
    assert_eq!(next, 10);
}

#[test]
fn test_segments_split_track_around_slider() {
    let bar = vertical_bar();
    bar.set_content_position(5);
    // slider 4 cells at offset 2: filled track before, empty after
    let roles: Vec<SegmentRole> = bar.segments().iter().map(|s| s.role).collect();
    assert_eq!(
        roles,
        vec![
            SegmentRole::DecrementButton,
            SegmentRole::TrackFilled,
            SegmentRole::Slider,
            SegmentRole::TrackEmpty,
            SegmentRole::IncrementButton,
        ]
    );
}

#[test]
fn test_segments_without_buttons_on_short_frames() {
    let bar = ScrollBar::new();
    bar.recompute(1);
    bar.set_content_size(20);

    let segments = bar.segments();
    assert_eq!(segments.len(), 1, "one-cell frame is all slider");
    assert_eq!(segments[0].role, SegmentRole::Slider);
    assert_eq!(segments[0].cells, 0..1);
}
