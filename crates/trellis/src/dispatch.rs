//! Pointer-event routing through the control tree.

use crate::{
    Result,
    control::{Control, EventOutcome},
    event::mouse::MouseEvent,
};

/// Route a mouse event through the control under the event location.
///
/// The event descends from `root` to the innermost control containing the
/// location, picking the topmost hit among siblings at each level and
/// rebasing the location into each child's coordinates. It is then offered
/// to each control from the innermost outward. The first control to return
/// [`EventOutcome::Handle`] stops normal bubbling; ancestors that accept
/// already-handled events are still offered the event so they get a look at
/// pointer activity regardless of suppression.
///
/// Returns true if any control handled the event. A location over no
/// control at all is a normal unhandled outcome, not an error.
pub fn dispatch_mouse(root: &mut dyn Control, ev: MouseEvent) -> Result<bool> {
    route(root, ev)
}

/// Recursive worker for [`dispatch_mouse`]: descend into the topmost hit
/// child, then offer the event to this control on the way back out.
fn route(control: &mut dyn Control, ev: MouseEvent) -> Result<bool> {
    // Later siblings draw above earlier ones, so the last hit wins.
    let mut hit = None;
    let mut i = 0usize;
    control.children(&mut |c| {
        if c.slot().contains_point(ev.location) {
            hit = Some(i);
        }
        i += 1;
        Ok(())
    })?;

    let mut handled = false;
    if let Some(hit) = hit {
        let mut i = 0usize;
        control.children_mut(&mut |c| {
            if i == hit {
                let rebased = c.slot().rebase(ev.location)?;
                handled = route(c, ev.at(rebased))?;
            }
            i += 1;
            Ok(())
        })?;
    }

    if (!handled || control.accept_handled_events())
        && control.handle_mouse(ev)? == EventOutcome::Handle
    {
        handled = true;
    }
    Ok(handled)
}
