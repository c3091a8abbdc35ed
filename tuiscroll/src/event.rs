/// Pointer events with widget-relative coordinates.
///
/// The host delivers these in temporal order, already translated so that
/// (0, 0) is the widget's own top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed at a position
    Press { x: u16, y: u16, button: PointerButton },
    /// Pointer moved with a button held
    Drag { x: u16, y: u16, button: PointerButton },
    /// Button released at a position
    Release { x: u16, y: u16, button: PointerButton },
    /// Scroll wheel; positive delta scrolls toward larger positions
    Wheel { x: u16, y: u16, delta: i16 },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl PointerEvent {
    /// Convert a crossterm mouse event into a widget-relative pointer event.
    ///
    /// `origin` is the widget's top-left in screen cells. Events left or above
    /// the origin and plain moves (no button held) are dropped.
    pub fn from_crossterm(
        event: &crossterm::event::MouseEvent,
        origin: (u16, u16),
    ) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let x = event.column.checked_sub(origin.0)?;
        let y = event.row.checked_sub(origin.1)?;

        match event.kind {
            MouseEventKind::Down(button) => Some(PointerEvent::Press {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(button) => Some(PointerEvent::Drag {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Up(button) => Some(PointerEvent::Release {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                Some(PointerEvent::Wheel { x, y, delta: -1 })
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                Some(PointerEvent::Wheel { x, y, delta: 1 })
            }
            _ => None,
        }
    }
}

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => PointerButton::Left,
            CtBtn::Right => PointerButton::Right,
            CtBtn::Middle => PointerButton::Middle,
        }
    }
}

/// Result of handling a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag session; route all pointer input here until release.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
