//! Utilities for testing trellis controls.

use std::{cell::RefCell, rc::Rc};

use geom::{Point, Rect, Size};

use crate::{
    Result,
    buffer::{RenderBackend, ScreenBuf},
    control::Control,
    state::{ControlState, StatefulControl},
    style::Style,
    surface::Surface,
};

/// A leaf control with a fixed desired size that paints its whole slot with
/// a single character, for buffer assertions. Optionally records the
/// available sizes offered to its measure pass.
pub struct TFixed {
    /// Layout state.
    state: ControlState,
    /// The fixed extent reported by measure.
    size: Size,
    /// Fill character used by draw.
    fill: char,
    /// Shared log of measure hints, if attached.
    measure_log: Option<Rc<RefCell<Vec<Size>>>>,
}

impl TFixed {
    /// Construct a fixed-size control filling with 'x'.
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            state: ControlState::default(),
            size: Size::new(w, h),
            fill: 'x',
            measure_log: None,
        }
    }

    /// Set the fill character.
    pub fn fill(mut self, ch: char) -> Self {
        self.fill = ch;
        self
    }

    /// Record every measure hint into a shared log.
    pub fn log_measures(mut self, log: &Rc<RefCell<Vec<Size>>>) -> Self {
        self.measure_log = Some(Rc::clone(log));
        self
    }
}

impl StatefulControl for TFixed {
    fn state(&self) -> &ControlState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }
}

impl Control for TFixed {
    fn measure_override(&mut self, available: Size) -> Result<Size> {
        if let Some(log) = &self.measure_log {
            log.borrow_mut().push(available);
        }
        Ok(self.size)
    }

    fn draw(&mut self, surface: &mut Surface) -> Result<()> {
        let own = Rect::new(0, 0, self.actual_width(), self.actual_height());
        surface.fill(Style::default(), own, self.fill);
        Ok(())
    }
}

/// A render backend that records the operations flushed through it.
pub struct TestBackend {
    /// Styles applied, in order.
    pub styles: Vec<Style>,
    /// Text runs emitted, in order.
    pub texts: Vec<String>,
    /// Locations of the text runs, parallel to `texts`.
    pub locations: Vec<Point>,
    /// Whether flush was called.
    pub flushed: bool,
}

impl TestBackend {
    /// Construct an empty recording backend.
    pub fn new() -> Self {
        Self {
            styles: vec![],
            texts: vec![],
            locations: vec![],
            flushed: false,
        }
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for TestBackend {
    fn style(&mut self, style: Style) -> Result<()> {
        self.styles.push(style);
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.locations.push(loc);
        self.texts.push(txt.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushed = true;
        Ok(())
    }
}

/// Asserts that the buffer contents match the expected lines of text,
/// ignoring all styling and trailing whitespace.
///
/// # Panics
///
/// Panics with a side-by-side dump if the line count or any line content
/// does not match.
pub fn assert_buffer_matches(buf: &ScreenBuf, expected: &[&str]) {
    let actual = buf.lines();
    let mut ok = expected.len() == actual.len();
    if ok {
        for (a, e) in actual.iter().zip(expected.iter()) {
            if a.trim_end() != e.trim_end() {
                ok = false;
                break;
            }
        }
    }
    if !ok {
        let width = expected.iter().map(|l| l.len()).max().unwrap_or(10).max(10);
        println!("\nExpected:");
        println!("┌{}┐", "─".repeat(width));
        for line in expected {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));
        println!("\nActual:");
        println!("┌{}┐", "─".repeat(width));
        for line in &actual {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));
        panic!("buffer contents did not match expected pattern");
    }
}
