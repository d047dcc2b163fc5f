//! Per-control layout state and the trait that exposes it.

use std::sync::atomic::{AtomicU64, Ordering};

use geom::{Rect, Size};

/// Source of process-unique control ids.
static CURRENT_ID: AtomicU64 = AtomicU64::new(0);

/// A process-unique identity for a control. Composites track children and
/// offsets by id; identity comparison never relies on pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The state object every control keeps and offers up through
/// [`StatefulControl::state`]. It records what the two layout passes
/// produced: `desired` is written only by the control's own measure, and
/// `slot` only by its own arrange.
#[derive(Debug, PartialEq, Eq)]
pub struct ControlState {
    /// Unique control id.
    pub id: ControlId,

    /// The composite that currently owns this control. A control has at most
    /// one parent; the link is set when it is added to a composite and
    /// cleared on removal. This is a lookup relation only, never ownership.
    pub parent: Option<ControlId>,

    /// The extent reported by the last measure pass.
    pub desired: Size,

    /// Whether measure has run. Arrange requires a populated desired size.
    pub measured: bool,

    /// The render-slot rectangle assigned by the last arrange pass, in the
    /// parent's content coordinates. Used for drawing and hit-testing.
    pub slot: Rect,
}

impl Default for ControlState {
    fn default() -> Self {
        let id = CURRENT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: ControlId(id),
            parent: None,
            desired: Size::default(),
            measured: false,
            slot: Rect::zero(),
        }
    }
}

/// The interface implemented by all controls that track layout state.
pub trait StatefulControl {
    /// Get a reference to the control's state object.
    fn state(&self) -> &ControlState;

    /// Get a mutable reference to the control's state object.
    fn state_mut(&mut self) -> &mut ControlState;

    /// A unique id for this control.
    fn id(&self) -> ControlId {
        self.state().id
    }

    /// The composite that owns this control, if any.
    fn parent(&self) -> Option<ControlId> {
        self.state().parent
    }

    /// The extent this control asked for in the last measure pass.
    fn desired_size(&self) -> Size {
        self.state().desired
    }

    /// The render-slot rectangle assigned by the last arrange pass.
    fn slot(&self) -> Rect {
        self.state().slot
    }

    /// Width granted by the last arrange pass.
    fn actual_width(&self) -> u32 {
        self.state().slot.w
    }

    /// Height granted by the last arrange pass.
    fn actual_height(&self) -> u32 {
        self.state().slot.h
    }
}
