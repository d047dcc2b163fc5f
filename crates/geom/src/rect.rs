use super::{Error, Point, Result, Size};

/// A rectangle, used for final placement and hit-testing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from a location and extent.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The zero rectangle at the origin.
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// The extent of this rectangle.
    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// Does this rectangle contain the point? Containment is
    /// inclusive-bounds: a point lying on the right or bottom edge is
    /// inside. This is the hit-testing law and must stay aligned with the
    /// window activation path.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x
            && p.x <= self.tl.x + self.w
            && p.y >= self.tl.y
            && p.y <= self.tl.y + self.h
    }

    /// Does this rectangle completely enclose the other?
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.tl.x + other.w <= self.tl.x + self.w
            && other.tl.y + other.h <= self.tl.y + self.h
    }

    /// The overlap between two rectangles as a cell range, or None if the
    /// cell ranges are disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x2 > x1 && y2 > y1 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Given a point that falls within this rectangle, rebase the point to be
    /// relative to our origin. If the point falls outside the rect, an error
    /// is returned.
    pub fn rebase(&self, pt: Point) -> Result<Point> {
        if !self.contains_point(pt) {
            return Err(Error::Geometry("co-ords outside rectangle".into()));
        }
        Ok(Point {
            x: pt.x - self.tl.x,
            y: pt.y - self.tl.y,
        })
    }

    /// A copy of this rectangle relocated to a new top-left corner.
    pub fn at(&self, tl: Point) -> Self {
        Self {
            tl,
            w: self.w,
            h: self.h,
        }
    }
}
