pub mod event;
pub mod geometry;
pub mod mapper;
pub mod render;
pub mod scrollbar;

pub use event::{EventResult, PointerButton, PointerEvent};
pub use geometry::{Orientation, TrackMetrics};
pub use render::{segments, Segment, SegmentRole};
pub use scrollbar::{
    ChangeDecision, PositionUpdate, ScrollBar, ScrollButton, ScrollSlider, ScrollState,
    ScrollTrack, StepDirection,
};
