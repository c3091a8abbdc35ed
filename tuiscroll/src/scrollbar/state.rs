//! Scrollbar controller state.

use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::geometry::{Orientation, TrackMetrics};
use crate::mapper;

use super::button::StepDirection;

/// Verdict returned by a position-changing observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeDecision {
    /// Let the change proceed.
    #[default]
    Allow,
    /// Reject the change; the position stays exactly as it was.
    Veto,
}

/// Outcome of a position change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionUpdate {
    /// The position moved and the changed notification fired.
    Applied { from: i32, to: i32 },
    /// An observer vetoed the change; nothing moved, nothing else fired.
    Vetoed,
    /// The clamped target equals the current position; no notification fired.
    Unchanged,
}

type ChangingFn = Box<dyn FnMut(i32, i32) -> ChangeDecision + Send + Sync>;
type ChangedFn = Box<dyn FnMut(i32, i32) + Send + Sync>;
type SizeChangedFn = Box<dyn FnMut(i32) + Send + Sync>;

struct ScrollInner {
    content_size: i32,
    content_position: i32,
    orientation: Orientation,
    increment: i32,
    auto_hide: bool,
    keep_content_in_all_viewport: bool,
    frame_length: u16,
    visible: bool,
    changing: Vec<ChangingFn>,
    changed: Vec<ChangedFn>,
    size_changed: Vec<SizeChangedFn>,
}

impl Default for ScrollInner {
    fn default() -> Self {
        Self {
            content_size: 0,
            content_position: 0,
            orientation: Orientation::Vertical,
            increment: 1,
            auto_hide: true,
            keep_content_in_all_viewport: false,
            frame_length: 0,
            visible: false,
            changing: Vec::new(),
            changed: Vec::new(),
            size_changed: Vec::new(),
        }
    }
}

impl ScrollInner {
    /// Largest legal content position under the current mapping mode.
    fn position_bound(&self) -> i32 {
        if self.keep_content_in_all_viewport {
            (self.content_size - 1).max(0)
        } else {
            (self.content_size - i32::from(self.frame_length)).max(0)
        }
    }

    fn clamp_position(&self, position: i32) -> i32 {
        position.clamp(0, self.position_bound())
    }

    fn refresh_visibility(&mut self) {
        let visible = !self.auto_hide || self.content_size > i32::from(self.frame_length);
        if visible != self.visible {
            log::debug!("[scrollbar] visibility -> {visible}");
            self.visible = visible;
        }
    }

    fn metrics(&self) -> TrackMetrics {
        let track_length = mapper::track_length(self.frame_length);
        let slider_length = mapper::slider_length(self.content_size, self.frame_length, track_length);
        let slider_position = if self.keep_content_in_all_viewport {
            mapper::direct_slider_position(self.content_position, track_length, slider_length)
        } else {
            mapper::slider_position(
                self.content_position,
                self.content_size,
                self.frame_length,
                track_length,
                slider_length,
            )
        };
        TrackMetrics {
            orientation: self.orientation,
            frame_length: self.frame_length,
            track_length,
            has_buttons: self.frame_length >= 2,
            slider_length,
            slider_position,
        }
    }
}

/// Controller core of the scrollbar.
///
/// Owns the canonical content size and position; every other part of the
/// widget only reads geometry or goes through these setters, which keeps the
/// range invariants checked in one place. Cheap to clone: clones share state,
/// and subviews are wired with a clone at construction.
#[derive(Clone, Default)]
pub struct ScrollState {
    inner: Arc<RwLock<ScrollInner>>,
    dirty: Arc<AtomicBool>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn content_size(&self) -> i32 {
        self.inner.read().map(|g| g.content_size).unwrap_or_default()
    }

    pub fn content_position(&self) -> i32 {
        self.inner
            .read()
            .map(|g| g.content_position)
            .unwrap_or_default()
    }

    pub fn orientation(&self) -> Orientation {
        self.inner.read().map(|g| g.orientation).unwrap_or_default()
    }

    pub fn increment(&self) -> i32 {
        self.inner.read().map(|g| g.increment).unwrap_or(1)
    }

    pub fn auto_hide(&self) -> bool {
        self.inner.read().map(|g| g.auto_hide).unwrap_or(true)
    }

    pub fn keep_content_in_all_viewport(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.keep_content_in_all_viewport)
            .unwrap_or_default()
    }

    pub fn frame_length(&self) -> u16 {
        self.inner.read().map(|g| g.frame_length).unwrap_or_default()
    }

    /// Widget visibility under the auto-hide policy.
    pub fn is_visible(&self) -> bool {
        self.inner.read().map(|g| g.visible).unwrap_or_default()
    }

    /// Current geometry snapshot derived from state.
    pub fn metrics(&self) -> TrackMetrics {
        self.inner
            .read()
            .map(|g| g.metrics())
            .unwrap_or_default()
    }

    pub fn slider_position(&self) -> u16 {
        self.metrics().slider_position
    }

    pub fn slider_length(&self) -> u16 {
        self.metrics().slider_length
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the total logical extent of the content. Negative sizes clamp
    /// to zero. The content position is silently re-clamped into the new
    /// valid range; only the size-changed notification fires. Setting the
    /// stored size again is a no-op and fires nothing.
    pub fn set_content_size(&self, size: i32) {
        let size = size.max(0);
        if let Ok(guard) = self.inner.read() {
            if guard.content_size == size {
                return;
            }
        }
        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            inner.content_size = size;
            inner.content_position = inner.clamp_position(inner.content_position);
            inner.refresh_visibility();
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.notify_size_changed(size);
    }

    /// Request a content position change.
    ///
    /// The target is clamped into the legal range for the current mapping
    /// mode. A clamped target equal to the current position is a no-op and
    /// fires nothing. Otherwise the changing observers get to veto the move;
    /// on a veto the state is left untouched and the changed notification is
    /// suppressed.
    pub fn set_content_position(&self, position: i32) -> PositionUpdate {
        let (from, to) = {
            let Ok(guard) = self.inner.read() else {
                return PositionUpdate::Unchanged;
            };
            (guard.content_position, guard.clamp_position(position))
        };
        if to == from {
            return PositionUpdate::Unchanged;
        }

        if self.propose_change(from, to) == ChangeDecision::Veto {
            log::debug!("[scrollbar] position {from} -> {to} vetoed");
            return PositionUpdate::Vetoed;
        }

        if let Ok(mut guard) = self.inner.write() {
            guard.content_position = to;
        }
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[scrollbar] position {from} -> {to}");
        self.notify_changed(from, to);
        PositionUpdate::Applied { from, to }
    }

    /// Position the slider directly in track cells; the offset is converted
    /// back to a content position and goes through the same cancelable path.
    pub fn set_slider_position(&self, position: u16) -> PositionUpdate {
        let content = {
            let Ok(guard) = self.inner.read() else {
                return PositionUpdate::Unchanged;
            };
            let metrics = guard.metrics();
            let target = position.min(metrics.max_slider_position());
            if guard.keep_content_in_all_viewport {
                i32::from(target)
            } else {
                mapper::content_position(
                    target,
                    guard.content_size,
                    guard.frame_length,
                    metrics.track_length,
                    metrics.slider_length,
                )
            }
        };
        self.set_content_position(content)
    }

    /// Switch the scroll axis. A nop when unchanged; otherwise the content
    /// position resets to zero without changing/changed events.
    pub fn set_orientation(&self, orientation: Orientation) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.orientation == orientation {
                return;
            }
            log::debug!("[scrollbar] orientation -> {orientation:?}");
            guard.orientation = orientation;
            guard.content_position = 0;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Step applied per button activation, at least 1.
    pub fn set_increment(&self, increment: i32) {
        if let Ok(mut guard) = self.inner.write() {
            guard.increment = increment.max(1);
        }
    }

    pub fn set_auto_hide(&self, auto_hide: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.auto_hide = auto_hide;
            guard.refresh_visibility();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Switch between proportional mapping and the 1:1 mapping where the
    /// slider offset equals the content position. The position is silently
    /// re-clamped into the bound of the new mode.
    pub fn set_keep_content_in_all_viewport(&self, keep: bool) {
        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            inner.keep_content_in_all_viewport = keep;
            inner.content_position = inner.clamp_position(inner.content_position);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Nudge the content position by one increment, clamped. Called by the
    /// scroll buttons on press and on each repeat firing.
    pub fn step(&self, direction: StepDirection) -> PositionUpdate {
        let (position, increment) = {
            let Ok(guard) = self.inner.read() else {
                return PositionUpdate::Unchanged;
            };
            (guard.content_position, guard.increment)
        };
        match direction {
            StepDirection::Decrement => self.set_content_position(position - increment),
            StepDirection::Increment => self.set_content_position(position + increment),
        }
    }

    /// Move one frame-length toward the given direction, clamped. Used for
    /// presses landing on the track outside the slider.
    pub fn page(&self, direction: StepDirection) -> PositionUpdate {
        let (position, frame) = {
            let Ok(guard) = self.inner.read() else {
                return PositionUpdate::Unchanged;
            };
            (guard.content_position, i32::from(guard.frame_length))
        };
        match direction {
            StepDirection::Decrement => self.set_content_position(position - frame),
            StepDirection::Increment => self.set_content_position(position + frame),
        }
    }

    /// Move by a multiple of the increment (mouse wheel).
    pub fn scroll_by(&self, delta: i32) -> PositionUpdate {
        let (position, increment) = {
            let Ok(guard) = self.inner.read() else {
                return PositionUpdate::Unchanged;
            };
            (guard.content_position, guard.increment)
        };
        self.set_content_position(position + delta * increment)
    }

    /// Geometry recompute entry point, called by the host layout whenever
    /// the frame is resized. Recomputes visibility and the derived slider
    /// extents; never moves the content position.
    pub fn recompute(&self, frame_length: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.frame_length = frame_length;
            guard.refresh_visibility();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Subscribe to the cancelable changing phase. The observer receives the
    /// current and the proposed position and may veto the move.
    pub fn on_content_position_changing(
        &self,
        observer: impl FnMut(i32, i32) -> ChangeDecision + Send + Sync + 'static,
    ) {
        if let Ok(mut guard) = self.inner.write() {
            guard.changing.push(Box::new(observer));
        }
    }

    /// Subscribe to committed position changes (old value, new value).
    pub fn on_content_position_changed(
        &self,
        observer: impl FnMut(i32, i32) + Send + Sync + 'static,
    ) {
        if let Ok(mut guard) = self.inner.write() {
            guard.changed.push(Box::new(observer));
        }
    }

    /// Subscribe to content size changes.
    pub fn on_size_changed(&self, observer: impl FnMut(i32) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.size_changed.push(Box::new(observer));
        }
    }

    // Observers are invoked with the lock released so they may re-enter the
    // API; the list is taken out for the duration of the call and merged
    // back afterwards.

    fn propose_change(&self, from: i32, to: i32) -> ChangeDecision {
        let Ok(mut taken) = self.inner.write().map(|mut g| mem::take(&mut g.changing)) else {
            return ChangeDecision::Allow;
        };
        let mut decision = ChangeDecision::Allow;
        for observer in taken.iter_mut() {
            if observer(from, to) == ChangeDecision::Veto {
                decision = ChangeDecision::Veto;
                break;
            }
        }
        if let Ok(mut guard) = self.inner.write() {
            let added = mem::take(&mut guard.changing);
            taken.extend(added);
            guard.changing = taken;
        }
        decision
    }

    fn notify_changed(&self, from: i32, to: i32) {
        let Ok(mut taken) = self.inner.write().map(|mut g| mem::take(&mut g.changed)) else {
            return;
        };
        for observer in taken.iter_mut() {
            observer(from, to);
        }
        if let Ok(mut guard) = self.inner.write() {
            let added = mem::take(&mut guard.changed);
            taken.extend(added);
            guard.changed = taken;
        }
    }

    fn notify_size_changed(&self, size: i32) {
        let Ok(mut taken) = self
            .inner
            .write()
            .map(|mut g| mem::take(&mut g.size_changed))
        else {
            return;
        };
        for observer in taken.iter_mut() {
            observer(size);
        }
        if let Ok(mut guard) = self.inner.write() {
            let added = mem::take(&mut guard.size_changed);
            taken.extend(added);
            guard.size_changed = taken;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if state changed since the last repaint.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag (after repainting).
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("ScrollState");
        if let Ok(guard) = self.inner.read() {
            dbg.field("content_size", &guard.content_size)
                .field("content_position", &guard.content_position)
                .field("orientation", &guard.orientation)
                .field("frame_length", &guard.frame_length)
                .field("visible", &guard.visible);
        }
        dbg.finish()
    }
}
