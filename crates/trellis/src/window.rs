//! Top-level window surfaces hosted by [`crate::WindowsHost`].

use geom::{Frame, Point, Rect, Size};

use crate::{
    Result,
    control::Control,
    state::{ControlState, StatefulControl},
    style::{Color, Style},
    surface::Surface,
};

/// A positionable top-level surface. A window requests its own position and
/// extent; its host arranges it exactly there, without clipping or
/// repositioning. Windows live in a host's z-order from creation via
/// `add_window` until `remove_window`, and move within it only through
/// activation.
pub struct Window {
    /// Layout state.
    state: ControlState,
    /// Requested column of the left edge, in host coordinates.
    x: u32,
    /// Requested row of the top edge, in host coordinates.
    y: u32,
    /// Requested extent.
    extent: Size,
    /// Title shown in the top border.
    title: String,
}

impl Window {
    /// Construct a window with a requested position and extent.
    pub fn new(title: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            state: ControlState::default(),
            x,
            y,
            extent: Size::new(w, h),
            title: title.into(),
        }
    }

    /// Requested column of the left edge.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Requested row of the top edge.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Move the window. Takes effect on the next layout pass.
    pub fn set_position(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl StatefulControl for Window {
    fn state(&self) -> &ControlState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }
}

impl Control for Window {
    /// Windows claim their requested extent no matter what the host offers.
    fn measure_override(&mut self, _available: Size) -> Result<Size> {
        Ok(self.extent)
    }

    fn draw(&mut self, surface: &mut Surface) -> Result<()> {
        let own = Rect::new(0, 0, self.actual_width(), self.actual_height());
        surface.fill(Style::new(Color::Black, Color::Grey), own, ' ');
        let frame = Frame::new(own, 1);
        surface.solid_frame(Style::new(Color::White, Color::DarkBlue), frame, ' ');
        // Title in the top border, truncated to the frame edge.
        let room = frame.top.w.saturating_sub(2) as usize;
        if room > 0 && !self.title.is_empty() {
            let txt: String = self.title.chars().take(room).collect();
            surface.text(
                Style::new(Color::White, Color::DarkBlue),
                Point { x: 2, y: 0 },
                &txt,
            );
        }
        Ok(())
    }
}
