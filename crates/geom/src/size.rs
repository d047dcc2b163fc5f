use super::{Point, Rect};

/// A `Size` is a rectangle that has a width and height but no location. It is
/// used both for the extent a control is offered during measurement and for
/// the extent it is finally granted.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Size {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Default for Size {
    /// Constructs a zero-valued size.
    fn default() -> Self {
        Self { w: 0, h: 0 }
    }
}

impl Size {
    /// The sentinel offered to containers measured without constraint.
    pub const UNBOUNDED: Self = Self {
        w: u32::MAX,
        h: u32::MAX,
    };

    /// Construct a size.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// True only when both dimensions carry the unbounded sentinel.
    pub fn is_unbounded(&self) -> bool {
        self.w == u32::MAX && self.h == u32::MAX
    }

    /// The area of this size.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Return a `Rect` with the same dimensions as the `Size`, located at
    /// (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this size can completely enclose the target size in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<Rect> for Size {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Size {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
