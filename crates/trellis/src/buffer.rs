//! The cell buffer the control tree renders into.

use geom::{Point, Rect, Size};

use crate::{Result, style::Style};

/// A single screen cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,
    /// The cell's style.
    pub style: Style,
}

/// The trait implemented by flush targets. The kernel itself never talks to a
/// terminal; it paints into a [`ScreenBuf`] and hands finished frames to a
/// backend through this seam.
pub trait RenderBackend {
    /// Apply a style to the following text output.
    fn style(&mut self, style: Style) -> Result<()>;
    /// Output text at a screen location.
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    /// Flush output to the device.
    fn flush(&mut self) -> Result<()>;
}

/// A row-major buffer of styled cells.
#[derive(Clone, Debug)]
pub struct ScreenBuf {
    /// Buffer extent.
    size: Size,
    /// Cells, row-major.
    cells: Vec<Cell>,
}

impl ScreenBuf {
    /// Construct a buffer with every cell set to the given character and
    /// style.
    pub fn new(size: impl Into<Size>, ch: char, style: Style) -> Self {
        let size = size.into();
        let cell = Cell {
            ch,
            style: style.clone(),
        };
        Self {
            size,
            cells: vec![cell; size.area() as usize],
        }
    }

    /// The buffer extent.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The buffer extent as a rect at the origin.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// Index of a point in the cell vector, if it falls inside the buffer.
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < self.size.w && p.y < self.size.h {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// The cell at a point, if it falls inside the buffer.
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Write a single cell. Writes outside the buffer are dropped.
    pub fn put(&mut self, p: Point, ch: char, style: Style) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Fill a rectangle with a character, clipped to the buffer.
    pub fn fill(&mut self, style: Style, r: Rect, ch: char) {
        if let Some(isec) = self.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put(Point { x, y }, ch, style.clone());
                }
            }
        }
    }

    /// The buffer contents as one string per row, styling ignored.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.size.h as usize);
        for y in 0..self.size.h {
            let mut line = String::with_capacity(self.size.w as usize);
            for x in 0..self.size.w {
                if let Some(c) = self.get(Point { x, y }) {
                    line.push(c.ch);
                }
            }
            out.push(line);
        }
        out
    }

    /// Render this buffer in full through a backend, batching runs of text
    /// with the same style.
    pub fn render<R: RenderBackend>(&self, backend: &mut R) -> Result<()> {
        let mut wrote = false;
        for y in 0..self.size.h {
            let mut x = 0;
            while x < self.size.w {
                let idx = y as usize * self.size.w as usize + x as usize;
                let style = self.cells[idx].style.clone();
                let start_x = x;
                let mut text = String::new();
                while x < self.size.w {
                    let idx2 = y as usize * self.size.w as usize + x as usize;
                    let cell = &self.cells[idx2];
                    if cell.style == style {
                        text.push(cell.ch);
                        x += 1;
                    } else {
                        break;
                    }
                }
                backend.style(style)?;
                backend.text(Point { x: start_x, y }, &text)?;
                wrote = true;
            }
        }
        if wrote {
            backend.flush()?;
        }
        Ok(())
    }
}
