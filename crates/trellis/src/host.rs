//! The overlapping window manager.

use geom::{Point, Rect, Size};

use crate::{
    Error, Result,
    control::{Control, EventOutcome},
    event::mouse::{Action, MouseEvent},
    state::{ControlId, ControlState, StatefulControl},
    style::{Color, Style},
    surface::Surface,
    window::Window,
};

/// A composite that hosts a set of overlapping top-level [`Window`]s.
///
/// The child vector order IS the z-order: index 0 is bottommost and the last
/// index topmost. Windows size themselves freely and are arranged at their
/// own requested positions; the host composites them back-to-front and
/// routes pointer activity to the topmost window under the cursor, raising
/// it on activation.
pub struct WindowsHost {
    /// Layout state.
    state: ControlState,
    /// Hosted windows, bottommost first.
    windows: Vec<Window>,
    /// Pending redraw request raised by activation.
    invalidated: bool,
}

impl WindowsHost {
    /// Construct an empty host.
    pub fn new() -> Self {
        Self {
            state: ControlState::default(),
            windows: Vec::new(),
            invalidated: false,
        }
    }

    /// Add a window at the top of the z-order, recording the parent link.
    /// Returns the window's id, the handle used for activation and removal.
    pub fn add_window(&mut self, mut window: Window) -> ControlId {
        window.state_mut().parent = Some(self.id());
        let id = window.id();
        self.windows.push(window);
        id
    }

    /// Detach and return a window, dropping it from the z-order.
    pub fn remove_window(&mut self, id: ControlId) -> Result<Window> {
        let Some(i) = self.windows.iter().position(|w| w.id() == id) else {
            return Err(Error::ZOrder(format!("remove of unknown window {id}")));
        };
        let mut window = self.windows.remove(i);
        window.state_mut().parent = None;
        self.invalidated = true;
        Ok(window)
    }

    /// Bring a window to the top of the z-order by swapping it with the
    /// current topmost window. Activating the topmost window is a no-op and
    /// requests no redraw; otherwise an invalidation is raised. Activation
    /// of a window the host does not own is a fatal consistency error.
    pub fn activate_window(&mut self, id: ControlId) -> Result<()> {
        let Some(index) = self.windows.iter().position(|w| w.id() == id) else {
            return Err(Error::ZOrder(format!("activate of unknown window {id}")));
        };
        let top = self.windows.len() - 1;
        if index != top {
            tracing::debug!("raising window {} to front", id);
            self.windows.swap(index, top);
            self.invalidated = true;
        }
        Ok(())
    }

    /// Read and clear the pending redraw request.
    pub fn take_invalidation(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    /// Current z-order as ids, bottommost first.
    pub fn z_order(&self) -> Vec<ControlId> {
        self.windows.iter().map(Window::id).collect()
    }

    /// Shared access to a hosted window.
    pub fn window(&self, id: ControlId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    /// Mutable access to a hosted window.
    pub fn window_mut(&mut self, id: ControlId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// The single ordered hit-test primitive: scan the z-order from topmost
    /// to bottommost and return the first window whose render-slot rect
    /// contains the point. Both pointer entry points route through this.
    pub fn window_at(&self, p: Point) -> Option<ControlId> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.slot().contains_point(p))
            .map(Window::id)
    }

    /// Is this window currently topmost?
    fn is_topmost(&self, id: ControlId) -> bool {
        self.windows.last().map(Window::id) == Some(id)
    }
}

impl Default for WindowsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulControl for WindowsHost {
    fn state(&self) -> &ControlState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }
}

impl Control for WindowsHost {
    /// Windows are not space-divided: every window is measured against the
    /// full available size and may claim as much as it wants. A host
    /// measured without constraint reports one cell less than the sentinel
    /// in each dimension, so it still has a concrete renderable boundary.
    fn measure_override(&mut self, available: Size) -> Result<Size> {
        for window in &mut self.windows {
            window.measure(available)?;
        }
        if available.is_unbounded() {
            Ok(Size::new(
                available.w.saturating_sub(1),
                available.h.saturating_sub(1),
            ))
        } else {
            Ok(available)
        }
    }

    /// Every window gets exactly what it asked for, where it asked for it.
    fn arrange_override(&mut self, _final_size: Size) -> Result<()> {
        for window in &mut self.windows {
            let desired = window.desired_size();
            let slot = Rect::new(window.x(), window.y(), desired.w, desired.h);
            window.arrange(slot)?;
        }
        Ok(())
    }

    /// Blank the full rect, then let windows paint themselves in z-order so
    /// topmost windows overwrite those beneath.
    fn draw(&mut self, surface: &mut Surface) -> Result<()> {
        let own = Rect::new(0, 0, self.actual_width(), self.actual_height());
        surface.fill(Style::new(Color::White, Color::Blue), own, ' ');
        for window in &mut self.windows {
            let mut sub = surface.child(window.slot());
            window.draw(&mut sub)?;
        }
        Ok(())
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Control) -> Result<()>) -> Result<()> {
        for w in &self.windows {
            f(w)?;
        }
        Ok(())
    }

    fn children_mut(&mut self, f: &mut dyn FnMut(&mut dyn Control) -> Result<()>) -> Result<()> {
        for w in &mut self.windows {
            f(w)?;
        }
        Ok(())
    }

    fn get_child_point(&self, id: ControlId) -> Result<Point> {
        self.windows
            .iter()
            .find(|w| w.id() == id)
            .map(|w| w.slot().tl)
            .ok_or_else(|| Error::Layout(format!("no such child: {id}")))
    }

    /// On any mouse-down, activate the window under the cursor. Activating
    /// an already-topmost window is a harmless no-op.
    fn handle_mouse(&mut self, ev: MouseEvent) -> Result<EventOutcome> {
        if ev.action == Action::Down {
            if let Some(id) = self.window_at(ev.location) {
                self.activate_window(id)?;
                return Ok(EventOutcome::Handle);
            }
        }
        Ok(EventOutcome::Ignore)
    }

    /// The raw input path reacts only to a left-button press. The press is
    /// hit-tested against the untranslated screen coordinate: the host is
    /// assumed to sit at the screen origin. Left presses are always consumed
    /// here, even over empty space; every other record is left for an outer
    /// dispatcher.
    fn handle_raw(&mut self, record: &crossterm::event::Event) -> Result<bool> {
        use crossterm::event::{Event as RawEvent, MouseButton, MouseEventKind};

        if let RawEvent::Mouse(m) = record {
            if m.kind == MouseEventKind::Down(MouseButton::Left) {
                let position = Point {
                    x: m.column.into(),
                    y: m.row.into(),
                };
                if let Some(id) = self.window_at(position) {
                    if !self.is_topmost(id) {
                        self.activate_window(id)?;
                    }
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The host gets a look at pointer events even after a descendant has
    /// handled them.
    fn accept_handled_events(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        Event as RawEvent, KeyModifiers, MouseButton, MouseEvent as RawMouse, MouseEventKind,
    };

    /// A host with windows of the given (x, y, w, h) rects, laid out at
    /// 80x24.
    fn host_with(rects: &[(u32, u32, u32, u32)]) -> Result<(WindowsHost, Vec<ControlId>)> {
        let mut host = WindowsHost::new();
        let mut ids = vec![];
        for (i, (x, y, w, h)) in rects.iter().enumerate() {
            ids.push(host.add_window(Window::new(format!("w{i}"), *x, *y, *w, *h)));
        }
        host.measure(Size::new(80, 24))?;
        host.arrange(Rect::new(0, 0, 80, 24))?;
        host.take_invalidation();
        Ok((host, ids))
    }

    /// A raw left-press record at a screen position.
    fn left_press(column: u16, row: u16) -> RawEvent {
        RawEvent::Mouse(RawMouse {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn windows_get_what_they_ask_for() -> Result<()> {
        let (host, ids) = host_with(&[(5, 3, 10, 6), (40, 0, 100, 50)])?;
        assert_eq!(host.window(ids[0]).unwrap().slot(), Rect::new(5, 3, 10, 6));
        // Not clipped to the host.
        assert_eq!(
            host.window(ids[1]).unwrap().slot(),
            Rect::new(40, 0, 100, 50)
        );
        Ok(())
    }

    #[test]
    fn unbounded_measure_shrinks_by_one() -> Result<()> {
        let mut host = WindowsHost::new();
        host.measure(Size::UNBOUNDED)?;
        assert_eq!(
            host.desired_size(),
            Size::new(u32::MAX - 1, u32::MAX - 1)
        );
        host.measure(Size::new(80, 24))?;
        assert_eq!(host.desired_size(), Size::new(80, 24));
        // Unbounded in one dimension only is reported unchanged.
        host.measure(Size::new(u32::MAX, 24))?;
        assert_eq!(host.desired_size(), Size::new(u32::MAX, 24));
        Ok(())
    }

    #[test]
    fn hit_topmost_wins() -> Result<()> {
        // A added first, B second: B is topmost and overlaps A.
        let (host, ids) = host_with(&[(0, 0, 10, 10), (5, 5, 10, 10)])?;
        assert_eq!(host.window_at(Point { x: 6, y: 6 }), Some(ids[1]));
        // Outside B, inside A.
        assert_eq!(host.window_at(Point { x: 1, y: 1 }), Some(ids[0]));
        assert_eq!(host.window_at(Point { x: 70, y: 20 }), None);
        Ok(())
    }

    #[test]
    fn activation_swaps_with_topmost() -> Result<()> {
        let (mut host, ids) = host_with(&[
            (0, 0, 5, 5),
            (10, 0, 5, 5),
            (20, 0, 5, 5),
            (30, 0, 5, 5),
        ])?;
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        host.activate_window(b)?;
        // B and the prior topmost D swap slots; everything else stays put.
        assert_eq!(host.z_order(), vec![a, d, c, b]);
        assert!(host.take_invalidation());

        // Repeated activations keep swapping with whatever is on top, so the
        // relative order of untouched windows drifts; this is the swap law,
        // not a stable move-to-front.
        host.activate_window(c)?;
        assert_eq!(host.z_order(), vec![a, d, b, c]);
        Ok(())
    }

    #[test]
    fn activating_topmost_is_a_noop() -> Result<()> {
        let (mut host, ids) = host_with(&[(0, 0, 5, 5), (10, 0, 5, 5)])?;
        host.activate_window(ids[1])?;
        assert_eq!(host.z_order(), ids);
        assert!(!host.take_invalidation());
        Ok(())
    }

    #[test]
    fn activating_unknown_window_fails() -> Result<()> {
        let (mut host, _) = host_with(&[(0, 0, 5, 5)])?;
        let stranger = Window::new("s", 0, 0, 1, 1);
        assert!(matches!(
            host.activate_window(stranger.id()),
            Err(Error::ZOrder(_))
        ));
        Ok(())
    }

    #[test]
    fn mouse_down_activates_hit_window() -> Result<()> {
        let (mut host, ids) = host_with(&[(0, 0, 10, 10), (5, 5, 10, 10)])?;
        // Click on the overlap cell activates the topmost window, which is
        // already topmost: handled, no reorder, no redraw request.
        let out = host.handle_mouse(MouseEvent::left_down((6u32, 6u32)))?;
        assert_eq!(out, EventOutcome::Handle);
        assert_eq!(host.z_order(), ids);
        assert!(!host.take_invalidation());

        // Click on A's exposed corner raises it.
        let out = host.handle_mouse(MouseEvent::left_down((1u32, 1u32)))?;
        assert_eq!(out, EventOutcome::Handle);
        assert_eq!(host.z_order(), vec![ids[1], ids[0]]);
        assert!(host.take_invalidation());
        Ok(())
    }

    #[test]
    fn raw_left_press_activates_and_consumes() -> Result<()> {
        let (mut host, ids) = host_with(&[(0, 0, 10, 10), (5, 5, 10, 10)])?;
        assert!(host.handle_raw(&left_press(1, 1))?);
        assert_eq!(host.z_order(), vec![ids[1], ids[0]]);
        Ok(())
    }

    #[test]
    fn raw_left_press_over_empty_space_is_consumed() -> Result<()> {
        let (mut host, ids) = host_with(&[(0, 0, 10, 10)])?;
        assert!(host.handle_raw(&left_press(70, 20))?);
        assert_eq!(host.z_order(), ids);
        assert!(!host.take_invalidation());
        Ok(())
    }

    #[test]
    fn raw_gating() -> Result<()> {
        let (mut host, _) = host_with(&[(0, 0, 10, 10)])?;
        // Non-mouse record.
        assert!(!host.handle_raw(&RawEvent::Resize(80, 24))?);
        // Mouse record that is not a left press.
        assert!(!host.handle_raw(&RawEvent::Mouse(RawMouse {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }))?);
        assert!(!host.handle_raw(&RawEvent::Mouse(RawMouse {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }))?);
        Ok(())
    }

    #[test]
    fn removal_detaches() -> Result<()> {
        let (mut host, ids) = host_with(&[(0, 0, 5, 5), (10, 0, 5, 5)])?;
        let w = host.remove_window(ids[0])?;
        assert_eq!(w.parent(), None);
        assert_eq!(host.z_order(), vec![ids[1]]);
        assert!(matches!(
            host.remove_window(ids[0]),
            Err(Error::ZOrder(_))
        ));
        // Activation after removal fails too.
        assert!(matches!(
            host.activate_window(ids[0]),
            Err(Error::ZOrder(_))
        ));
        Ok(())
    }
}
