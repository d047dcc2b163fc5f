use super::Rect;

/// The border cells of a rectangle, split into edges and corners.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Frame {
    /// The top edge, not including corners.
    pub top: Rect,
    /// The bottom edge, not including corners.
    pub bottom: Rect,
    /// The left edge, not including corners.
    pub left: Rect,
    /// The right edge, not including corners.
    pub right: Rect,
    /// The top left corner.
    pub topleft: Rect,
    /// The top right corner.
    pub topright: Rect,
    /// The bottom left corner.
    pub bottomleft: Rect,
    /// The bottom right corner.
    pub bottomright: Rect,
}

impl Frame {
    /// Construct a frame of the given border width around the inside of a
    /// rect. If the rect is too small to fit the frame, we return a zero
    /// frame.
    pub fn new(rect: Rect, border: u32) -> Self {
        if rect.w <= (border * 2) || rect.h <= (border * 2) {
            Self::zero()
        } else {
            Self {
                top: Rect::new(rect.tl.x + border, rect.tl.y, rect.w - 2 * border, border),
                bottom: Rect::new(
                    rect.tl.x + border,
                    rect.tl.y + rect.h - border,
                    rect.w - 2 * border,
                    border,
                ),
                left: Rect::new(rect.tl.x, rect.tl.y + border, border, rect.h - 2 * border),
                right: Rect::new(
                    rect.tl.x + rect.w - border,
                    rect.tl.y + border,
                    border,
                    rect.h - 2 * border,
                ),
                topleft: Rect::new(rect.tl.x, rect.tl.y, border, border),
                topright: Rect::new(rect.tl.x + rect.w - border, rect.tl.y, border, border),
                bottomleft: Rect::new(rect.tl.x, rect.tl.y + rect.h - border, border, border),
                bottomright: Rect::new(
                    rect.tl.x + rect.w - border,
                    rect.tl.y + rect.h - border,
                    border,
                    border,
                ),
            }
        }
    }

    /// The zero frame.
    pub fn zero() -> Self {
        Self {
            top: Rect::zero(),
            bottom: Rect::zero(),
            left: Rect::zero(),
            right: Rect::zero(),
            topleft: Rect::zero(),
            topright: Rect::zero(),
            bottomleft: Rect::zero(),
            bottomright: Rect::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tframe() {
        let r = Rect::new(10, 10, 10, 10);
        assert_eq!(
            Frame::new(r, 1),
            Frame {
                top: Rect::new(11, 10, 8, 1),
                bottom: Rect::new(11, 19, 8, 1),
                left: Rect::new(10, 11, 1, 8),
                right: Rect::new(19, 11, 1, 8),
                topleft: Rect::new(10, 10, 1, 1),
                topright: Rect::new(19, 10, 1, 1),
                bottomleft: Rect::new(10, 19, 1, 1),
                bottomright: Rect::new(19, 19, 1, 1),
            }
        );
        assert_eq!(Frame::new(Rect::new(0, 0, 2, 2), 1), Frame::zero());
    }
}
