//! Logical input events, and translation from raw platform records.
//!
//! The raw record type is `crossterm::event::Event`; the kernel consumes it
//! directly on the low-level input path and translates it into the logical
//! [`Event`] for routed dispatch.

/// Logical mouse events.
pub mod mouse;

use crossterm::event as cevent;
use geom::{Point, Size};

/// Keyboard modifiers held during an input event.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub ctrl: bool,
    /// Alt held.
    pub alt: bool,
}

/// The logical event kinds the kernel routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A mouse action.
    Mouse(mouse::MouseEvent),
    /// The root surface was resized.
    Resize(Size),
}

/// Translate raw key modifiers.
fn translate_mods(mods: cevent::KeyModifiers) -> Mods {
    Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a raw mouse button.
fn translate_button(b: cevent::MouseButton) -> mouse::Button {
    match b {
        cevent::MouseButton::Left => mouse::Button::Left,
        cevent::MouseButton::Right => mouse::Button::Right,
        cevent::MouseButton::Middle => mouse::Button::Middle,
    }
}

/// Translate a raw platform record into a logical event. Records the kernel
/// does not route — key input, focus changes, paste — yield None and are
/// left to an outer dispatcher.
pub fn translate_event(e: &cevent::Event) -> Option<Event> {
    match e {
        cevent::Event::Mouse(m) => {
            let mut button = mouse::Button::None;
            let action = match m.kind {
                cevent::MouseEventKind::Down(b) => {
                    button = translate_button(b);
                    mouse::Action::Down
                }
                cevent::MouseEventKind::Up(b) => {
                    button = translate_button(b);
                    mouse::Action::Up
                }
                cevent::MouseEventKind::Drag(b) => {
                    button = translate_button(b);
                    mouse::Action::Drag
                }
                cevent::MouseEventKind::Moved => mouse::Action::Moved,
                cevent::MouseEventKind::ScrollDown => mouse::Action::ScrollDown,
                cevent::MouseEventKind::ScrollUp => mouse::Action::ScrollUp,
                cevent::MouseEventKind::ScrollLeft => mouse::Action::ScrollLeft,
                cevent::MouseEventKind::ScrollRight => mouse::Action::ScrollRight,
            };
            Some(Event::Mouse(mouse::MouseEvent {
                button,
                action,
                modifiers: translate_mods(m.modifiers),
                location: Point {
                    x: m.column.into(),
                    y: m.row.into(),
                },
            }))
        }
        cevent::Event::Resize(w, h) => Some(Event::Resize(Size::new((*w).into(), (*h).into()))),
        _ => None,
    }
}
