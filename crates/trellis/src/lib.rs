//! Trellis is a windowing layout and compositing kernel for terminal UIs: a
//! tree of rectangular controls sized and placed by a two-pass
//! measure/arrange protocol, with overlapping top-level windows composited by
//! z-order and pointer input routed to the topmost hit control.

/// Cell buffer the tree renders into.
mod buffer;
/// The control contract: measure, arrange, draw, input hooks.
mod control;
/// Pointer-event routing through the control tree.
mod dispatch;
/// Crate error types.
pub mod error;
/// Logical input events and raw-record translation.
pub mod event;
/// Overlapping window management.
mod host;
/// Vertical stacking composite.
mod panel;
/// Per-control layout state.
mod state;
/// Cell styling.
pub mod style;
/// Clipped, translated drawing views.
mod surface;
/// Test utilities.
pub mod tutils;
/// Top-level window surfaces.
mod window;

pub use buffer::{Cell, RenderBackend, ScreenBuf};
pub use control::{Control, EventOutcome};
pub use dispatch::dispatch_mouse;
pub use error::{Error, Result};
pub use host::WindowsHost;
pub use panel::Panel;
pub use state::{ControlId, ControlState, StatefulControl};
pub use style::{Attr, AttrSet, Color, Style};
pub use surface::Surface;
pub use window::Window;

pub use geom;
// Export commonly used geometry types at the root.
pub use geom::{Frame, Point, Rect, Size};
