//! The proportional scrollbar widget.
//!
//! This module provides:
//! - `ScrollState`: the controller core owning content size/position and the
//!   cancelable change protocol; subviews receive a clone of it at
//!   construction and mutate state only through its setters
//! - `ScrollTrack`: button/slider layout on the active axis and hit-testing
//! - `ScrollSlider`: the drag session for the indicator
//! - `ScrollButton`: decrement/increment stepping with press repeat
//! - `ScrollBar`: the public widget composing all of the above

mod bar;
mod button;
mod slider;
mod state;
mod track;

pub use bar::ScrollBar;
pub use button::{ScrollButton, StepDirection};
pub use slider::ScrollSlider;
pub use state::{ChangeDecision, PositionUpdate, ScrollState};
pub use track::ScrollTrack;
