//! The control contract: the measure/arrange protocol, drawing, and input
//! hooks.

use geom::{Point, Rect, Size};

use crate::{
    Error, Result,
    event::mouse::MouseEvent,
    state::{ControlId, StatefulControl},
    surface::Surface,
};

/// The result of offering an input event to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was handled; routing stops at controls that do not accept
    /// already-handled events.
    Handle,
    /// The event was ignored and continues to the next control on the path.
    Ignore,
}

/// Controls are the building blocks of a trellis tree. Each composite
/// exclusively owns its children; a child's back-link to its parent is an id
/// used for lookups only.
///
/// Layout is a two-pass protocol driven top-down from the root: `measure`
/// asks a control how much space it would like given an upper bound, and
/// `arrange` assigns its final rectangle. Both record their results in the
/// control's state; the overridable hooks supply the per-control policy.
#[allow(unused_variables)]
pub trait Control: StatefulControl {
    /// Compute the extent this control wants, given the available extent.
    /// Composites measure their children here. The default claims the
    /// available extent unchanged.
    fn measure_override(&mut self, available: Size) -> Result<Size> {
        Ok(available)
    }

    /// React to the final extent granted by arrange. Composites place their
    /// children here. The default does nothing.
    fn arrange_override(&mut self, final_size: Size) -> Result<()> {
        Ok(())
    }

    /// Ask the control to report its desired size given an upper bound.
    /// Populates the desired size; must run before `arrange`.
    fn measure(&mut self, available: Size) -> Result<()> {
        let desired = self.measure_override(available)?;
        let st = self.state_mut();
        st.desired = desired;
        st.measured = true;
        Ok(())
    }

    /// Assign the control's final rectangle, in parent content coordinates.
    /// The desired size must have been populated by a prior `measure`.
    fn arrange(&mut self, slot: Rect) -> Result<()> {
        if !self.state().measured {
            return Err(Error::Layout(format!(
                "arrange of unmeasured control {}",
                self.id()
            )));
        }
        self.state_mut().slot = slot;
        self.arrange_override(slot.size())
    }

    /// Paint this control into a surface spanning its drawing rect.
    /// Composites recurse into children through sub-surfaces. The default
    /// paints nothing.
    fn draw(&mut self, surface: &mut Surface) -> Result<()> {
        Ok(())
    }

    /// Call a closure on this control's children, in z-order where that is
    /// meaningful (first child bottommost). The order must match
    /// `children_mut`. The default assumes a leaf.
    fn children(&self, f: &mut dyn FnMut(&dyn Control) -> Result<()>) -> Result<()> {
        Ok(())
    }

    /// Call a closure mutably on this control's children. The order must
    /// match `children`. The default assumes a leaf.
    fn children_mut(&mut self, f: &mut dyn FnMut(&mut dyn Control) -> Result<()>) -> Result<()> {
        Ok(())
    }

    /// The offset of a direct child within this control's content area, as
    /// recorded by the last layout pass. Fails for controls that are not
    /// children of this composite.
    fn get_child_point(&self, id: ControlId) -> Result<Point> {
        Err(Error::Layout(format!("no such child: {id}")))
    }

    /// Offer a logical mouse event to this control. The location is in this
    /// control's local coordinates. The default ignores input.
    fn handle_mouse(&mut self, ev: MouseEvent) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Offer a raw platform input record to this control, before logical
    /// translation. Returns true if the record was consumed. The default
    /// leaves all records unhandled.
    fn handle_raw(&mut self, record: &crossterm::event::Event) -> Result<bool> {
        Ok(false)
    }

    /// Controls returning true here are offered events that a descendant
    /// already handled, giving them a look at pointer activity regardless of
    /// normal bubbling suppression.
    fn accept_handled_events(&self) -> bool {
        false
    }
}
