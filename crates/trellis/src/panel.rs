//! A composite that stacks its children vertically.

use geom::{Point, Rect, Size};

use crate::{
    Error, Result,
    control::Control,
    state::{ControlId, ControlState, StatefulControl},
    style::{Color, Style},
    surface::Surface,
};

/// A composite control that stacks its children vertically, dividing its
/// height among them in insertion order and accounting for rounding
/// remainders exactly: after a layout pass the children's allotted heights
/// sum to the panel's height, with no gap and no overlap.
pub struct Panel {
    /// Layout state.
    state: ControlState,
    /// Children, in insertion order (also draw order, top to bottom).
    children: Vec<Box<dyn Control>>,
    /// Offset of each child within the panel, parallel to `children`.
    offsets: Vec<Point>,
    /// Background fill for the panel's own area.
    background: Style,
}

impl Panel {
    /// Construct an empty panel with the default background fill.
    pub fn new() -> Self {
        Self {
            state: ControlState::default(),
            children: Vec::new(),
            offsets: Vec::new(),
            background: Style::new(Color::White, Color::White),
        }
    }

    /// Set the background fill.
    pub fn set_background(&mut self, style: Style) {
        self.background = style;
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the panel has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child, taking ownership and recording the parent link, then
    /// immediately re-lay-out all children. Layout here is eager: the child
    /// is measured and placed before this call returns.
    pub fn add_child(&mut self, mut child: Box<dyn Control>) -> Result<()> {
        child.state_mut().parent = Some(self.id());
        self.children.push(child);
        self.offsets.push(Point::zero());
        self.recalculate_children_positions()
    }

    /// Detach and return a child, then re-lay-out the remainder.
    pub fn remove_child(&mut self, id: ControlId) -> Result<Box<dyn Control>> {
        let Some(i) = self.children.iter().position(|c| c.id() == id) else {
            return Err(Error::Layout(format!("remove of unknown child {id}")));
        };
        let mut child = self.children.remove(i);
        self.offsets.remove(i);
        child.state_mut().parent = None;
        self.recalculate_children_positions()?;
        Ok(child)
    }

    /// Measure and place every child against the panel's current actual
    /// size.
    ///
    /// Each child is measured with an equal share of the panel as a hint;
    /// the hint is deliberately not reconciled against what children report
    /// back. Heights are then dealt in insertion order: every child gets the
    /// truncated equal share except where that would overflow the remaining
    /// budget, and the last child absorbs the rounding remainder. The
    /// accumulator must land exactly on the panel height.
    fn recalculate_children_positions(&mut self) -> Result<()> {
        if self.children.is_empty() {
            return Ok(());
        }
        let n = self.children.len() as u32;
        let w = self.actual_width();
        let h = self.actual_height();

        for child in &mut self.children {
            child.measure(Size::new(w / n, h / n))?;
        }

        let count = self.children.len();
        let mut height_used = 0;
        for (i, child) in self.children.iter_mut().enumerate() {
            let mut height = h / n;
            if height_used + height > h || i + 1 == count {
                height = h - height_used;
            }
            child.arrange(Rect::new(0, height_used, w, height))?;
            self.offsets[i] = Point {
                x: 0,
                y: height_used,
            };
            height_used += height;
        }

        if height_used != h {
            return Err(Error::Layout(format!(
                "panel {} left {} of {} rows unaccounted",
                self.id(),
                h - height_used,
                h
            )));
        }
        Ok(())
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulControl for Panel {
    fn state(&self) -> &ControlState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }
}

impl Control for Panel {
    /// Children track the panel's latest size: placement re-runs whenever
    /// the panel itself is placed.
    fn arrange_override(&mut self, _final_size: Size) -> Result<()> {
        self.recalculate_children_positions()
    }

    fn draw(&mut self, surface: &mut Surface) -> Result<()> {
        let own = Rect::new(0, 0, self.actual_width(), self.actual_height());
        surface.fill(self.background.clone(), own, ' ');
        for (i, child) in self.children.iter_mut().enumerate() {
            let off = self.offsets[i];
            let mut sub = surface.child(Rect::new(
                off.x,
                off.y,
                child.actual_width(),
                child.actual_height(),
            ));
            child.draw(&mut sub)?;
        }
        Ok(())
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Control) -> Result<()>) -> Result<()> {
        for c in &self.children {
            f(c.as_ref())?;
        }
        Ok(())
    }

    fn children_mut(&mut self, f: &mut dyn FnMut(&mut dyn Control) -> Result<()>) -> Result<()> {
        for c in &mut self.children {
            f(c.as_mut())?;
        }
        Ok(())
    }

    fn get_child_point(&self, id: ControlId) -> Result<Point> {
        self.children
            .iter()
            .position(|c| c.id() == id)
            .map(|i| self.offsets[i])
            .ok_or_else(|| Error::Layout(format!("no such child: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutils::TFixed;

    /// Measure and arrange a panel at the given extent.
    fn layout(panel: &mut Panel, w: u32, h: u32) -> Result<()> {
        panel.measure(Size::new(w, h))?;
        panel.arrange(Rect::new(0, 0, w, h))
    }

    /// Child ids in insertion order.
    fn ids(panel: &Panel) -> Vec<ControlId> {
        let mut v = vec![];
        panel
            .children(&mut |c| {
                v.push(c.id());
                Ok(())
            })
            .unwrap();
        v
    }

    #[test]
    fn space_accounting() -> Result<()> {
        for h in [0u32, 1, 2, 3, 7, 10, 11, 23, 100] {
            for n in 1usize..=7 {
                let mut p = Panel::new();
                for _ in 0..n {
                    p.add_child(Box::new(TFixed::new(1, 1)))?;
                }
                layout(&mut p, 20, h)?;
                let mut total = 0;
                p.children(&mut |c| {
                    total += c.actual_height();
                    Ok(())
                })?;
                assert_eq!(total, h, "height {h} split over {n} children");
            }
        }
        Ok(())
    }

    #[test]
    fn offsets_stack_in_order() -> Result<()> {
        let mut p = Panel::new();
        for _ in 0..3 {
            p.add_child(Box::new(TFixed::new(1, 1)))?;
        }
        layout(&mut p, 8, 11)?;
        let ids = ids(&p);
        let mut y = 0;
        let mut heights = vec![];
        p.children(&mut |c| {
            heights.push(c.actual_height());
            Ok(())
        })?;
        for (i, id) in ids.iter().enumerate() {
            let off = p.get_child_point(*id)?;
            assert_eq!(off.x, 0);
            assert_eq!(off.y, y);
            y += heights[i];
        }
        Ok(())
    }

    #[test]
    fn last_child_absorbs_remainder() -> Result<()> {
        let mut p = Panel::new();
        for _ in 0..3 {
            p.add_child(Box::new(TFixed::new(1, 1)))?;
        }
        layout(&mut p, 10, 10)?;
        let ids = ids(&p);
        let mut slots = vec![];
        p.children(&mut |c| {
            slots.push(c.slot());
            Ok(())
        })?;
        assert_eq!(slots[0], Rect::new(0, 0, 10, 3));
        assert_eq!(slots[1], Rect::new(0, 3, 10, 3));
        assert_eq!(slots[2], Rect::new(0, 6, 10, 4));
        assert_eq!(p.get_child_point(ids[2])?, Point { x: 0, y: 6 });
        Ok(())
    }

    #[test]
    fn equal_division_hint() -> Result<()> {
        use std::{cell::RefCell, rc::Rc};

        let log = Rc::new(RefCell::new(vec![]));
        let mut p = Panel::new();
        p.add_child(Box::new(TFixed::new(1, 1)))?;
        p.add_child(Box::new(TFixed::new(1, 1).log_measures(&log)))?;
        layout(&mut p, 9, 7)?;
        // Every child sees the truncated equal share as its measure hint,
        // regardless of what any child reports back.
        assert_eq!(log.borrow().last(), Some(&Size::new(4, 3)));
        // The panel keeps the child's report as its desired size but does
        // not read it back into the division.
        let mut hints = vec![];
        p.children(&mut |c| {
            hints.push(c.desired_size());
            Ok(())
        })?;
        assert_eq!(hints, vec![Size::new(1, 1), Size::new(1, 1)]);
        Ok(())
    }

    #[test]
    fn add_child_is_eager() -> Result<()> {
        let mut p = Panel::new();
        layout(&mut p, 10, 9)?;
        p.add_child(Box::new(TFixed::new(1, 1)))?;
        p.add_child(Box::new(TFixed::new(1, 1)))?;
        // Children were placed by add_child, without another arrange.
        let mut slots = vec![];
        p.children(&mut |c| {
            slots.push(c.slot());
            Ok(())
        })?;
        assert_eq!(slots, vec![Rect::new(0, 0, 10, 4), Rect::new(0, 4, 10, 5)]);
        Ok(())
    }

    #[test]
    fn parent_linkage() -> Result<()> {
        let mut p = Panel::new();
        p.add_child(Box::new(TFixed::new(1, 1)))?;
        let id = ids(&p)[0];
        let mut parent = None;
        p.children(&mut |c| {
            parent = c.parent();
            Ok(())
        })?;
        assert_eq!(parent, Some(p.id()));

        let removed = p.remove_child(id)?;
        assert_eq!(removed.parent(), None);
        assert!(p.is_empty());
        assert!(matches!(p.remove_child(id), Err(Error::Layout(_))));
        Ok(())
    }

    #[test]
    fn unknown_child_point_fails() -> Result<()> {
        let mut p = Panel::new();
        p.add_child(Box::new(TFixed::new(1, 1)))?;
        let stranger = TFixed::new(1, 1);
        assert!(matches!(
            p.get_child_point(stranger.id()),
            Err(Error::Layout(_))
        ));
        Ok(())
    }

    #[test]
    fn draw_fills_and_recurses() -> Result<()> {
        use crate::{ScreenBuf, Style};

        let mut p = Panel::new();
        p.add_child(Box::new(TFixed::new(1, 1).fill('a')))?;
        p.add_child(Box::new(TFixed::new(1, 1).fill('b')))?;
        layout(&mut p, 4, 4)?;

        let mut buf = ScreenBuf::new((4, 4), '.', Style::default());
        let r = buf.rect();
        let mut surf = Surface::new(&mut buf, r);
        p.draw(&mut surf)?;
        assert_eq!(buf.lines(), vec!["aaaa", "aaaa", "bbbb", "bbbb"]);
        Ok(())
    }
}
