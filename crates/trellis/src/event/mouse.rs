//! Logical mouse events.

use geom::Point;

use crate::event::Mods;

/// Mouse button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// No button (for move/scroll).
    None,
}

/// Mouse action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Mouse drag with button held.
    Drag,
    /// Mouse moved without button.
    Moved,
    /// Scroll wheel down.
    ScrollDown,
    /// Scroll wheel up.
    ScrollUp,
    /// Horizontal scroll left.
    ScrollLeft,
    /// Horizontal scroll right.
    ScrollRight,
}

/// A mouse input event, carrying a location. As an event descends the
/// control tree its location is rebased into each control's local
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Mouse action type.
    pub action: Action,
    /// Mouse button.
    pub button: Button,
    /// Keyboard modifiers.
    pub modifiers: Mods,
    /// Cursor location.
    pub location: Point,
}

impl MouseEvent {
    /// A left-button press at a location, with no modifiers.
    pub fn left_down(location: impl Into<Point>) -> Self {
        Self {
            action: Action::Down,
            button: Button::Left,
            modifiers: Mods::default(),
            location: location.into(),
        }
    }

    /// A copy of this event with the location replaced.
    pub fn at(&self, location: Point) -> Self {
        Self { location, ..*self }
    }
}
