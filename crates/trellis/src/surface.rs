//! Clipped, translated drawing views over a [`ScreenBuf`].

use geom::{Frame, Point, Rect, Size};

use crate::{buffer::ScreenBuf, style::Style};

/// A surface is the drawing context handed to a control's draw hook. It is
/// bound to one control's drawing rect: coordinates are control-local, and
/// writes are translated to screen space and clipped to the rect. Composites
/// hand each child a sub-surface covering the child's slot, so a control can
/// never paint outside the region its parent granted it.
pub struct Surface<'a> {
    /// The buffer writes land in.
    buf: &'a mut ScreenBuf,
    /// Screen position of this surface's (0, 0).
    origin: Point,
    /// Clip region in screen coordinates.
    clip: Rect,
}

impl<'a> Surface<'a> {
    /// Construct a surface over a region of a buffer, in buffer coordinates.
    pub fn new(buf: &'a mut ScreenBuf, rect: Rect) -> Self {
        let clip = buf.rect().intersect(&rect).unwrap_or_default();
        Self {
            buf,
            origin: rect.tl,
            clip,
        }
    }

    /// The extent of this surface.
    pub fn size(&self) -> Size {
        self.clip.size()
    }

    /// Translate a local point to screen space.
    fn screen(&self, p: Point) -> Point {
        Point {
            x: self.origin.x + p.x,
            y: self.origin.y + p.y,
        }
    }

    /// Write a single cell at a local point. Writes outside the clip region
    /// are dropped.
    pub fn put(&mut self, p: Point, ch: char, style: Style) {
        let sp = self.screen(p);
        if self.clip.contains_rect(&Rect::new(sp.x, sp.y, 1, 1)) {
            self.buf.put(sp, ch, style);
        }
    }

    /// Fill a local rectangle with a character, clipped.
    pub fn fill(&mut self, style: Style, r: Rect, ch: char) {
        let translated = r.at(self.screen(r.tl));
        if let Some(isec) = translated.intersect(&self.clip) {
            self.buf.fill(style, isec, ch);
        }
    }

    /// Print text starting at a local point, truncated at the clip edge.
    pub fn text(&mut self, style: Style, p: Point, txt: &str) {
        for (i, ch) in txt.chars().enumerate() {
            self.put(
                Point {
                    x: p.x + i as u32,
                    y: p.y,
                },
                ch,
                style.clone(),
            );
        }
    }

    /// Draw a solid frame given in local coordinates.
    pub fn solid_frame(&mut self, style: Style, f: Frame, ch: char) {
        self.fill(style.clone(), f.top, ch);
        self.fill(style.clone(), f.left, ch);
        self.fill(style.clone(), f.right, ch);
        self.fill(style.clone(), f.bottom, ch);
        self.fill(style.clone(), f.topleft, ch);
        self.fill(style.clone(), f.topright, ch);
        self.fill(style.clone(), f.bottomleft, ch);
        self.fill(style, f.bottomright, ch);
    }

    /// A sub-surface covering a local rectangle, for handing to a child
    /// control. The child's writes are clipped to both the rectangle and
    /// this surface's own clip region.
    pub fn child(&mut self, r: Rect) -> Surface<'_> {
        let origin = self.screen(r.tl);
        let translated = r.at(origin);
        let clip = translated.intersect(&self.clip).unwrap_or_default();
        Surface {
            buf: &mut *self.buf,
            origin,
            clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_and_clip() {
        let mut buf = ScreenBuf::new((6, 4), '.', Style::default());
        let mut surf = Surface::new(&mut buf, Rect::new(1, 1, 4, 2));
        surf.put(Point { x: 0, y: 0 }, 'a', Style::default());
        surf.fill(Style::default(), Rect::new(2, 1, 10, 10), 'b');
        // Outside the clip region.
        surf.put(Point { x: 4, y: 0 }, 'z', Style::default());
        assert_eq!(buf.lines(), vec!["......", ".a....", "...bb.", "......"]);
    }

    #[test]
    fn nested_children() {
        let mut buf = ScreenBuf::new((6, 4), '.', Style::default());
        let mut surf = Surface::new(&mut buf, Rect::new(1, 0, 5, 4));
        let mut sub = surf.child(Rect::new(1, 1, 2, 2));
        sub.fill(Style::default(), Rect::new(0, 0, 10, 10), 'x');
        assert_eq!(buf.lines(), vec!["......", "..xx..", "..xx..", "......"]);
    }

    #[test]
    fn text_truncates() {
        let mut buf = ScreenBuf::new((4, 1), '.', Style::default());
        let mut surf = Surface::new(&mut buf, Rect::new(0, 0, 4, 1));
        surf.text(Style::default(), Point { x: 1, y: 0 }, "hello");
        assert_eq!(buf.lines(), vec![".hel"]);
    }
}
