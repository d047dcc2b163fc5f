//! Cell styling: colors, text attributes, and resolved styles.

/// A terminal color.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    /// Black.
    Black,
    /// Dark grey.
    DarkGrey,
    /// Bright red.
    Red,
    /// Dark red.
    DarkRed,
    /// Bright green.
    Green,
    /// Dark green.
    DarkGreen,
    /// Bright yellow.
    Yellow,
    /// Dark yellow.
    DarkYellow,
    /// Bright blue.
    Blue,
    /// Dark blue.
    DarkBlue,
    /// Bright magenta.
    Magenta,
    /// Dark magenta.
    DarkMagenta,
    /// Bright cyan.
    Cyan,
    /// Dark cyan.
    DarkCyan,
    /// White.
    White,
    /// Grey.
    Grey,
    /// A 24-bit color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// An ANSI palette value.
    AnsiValue(u8),
}

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Crossed-out text.
    CrossedOut,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Overlined text.
    Overline,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Crossed-out flag.
    pub crossedout: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Overline flag.
    pub overline: bool,
    /// Underline flag.
    pub underline: bool,
}

impl AttrSet {
    /// Construct a set of text attributes with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold
            || self.dim
            || self.italic
            || self.crossedout
            || self.overline
            || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::CrossedOut => self.crossedout = true,
            Attr::Underline => self.underline = true,
            Attr::Overline => self.overline = true,
        };
        self
    }
}

/// A resolved cell style.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    pub attrs: AttrSet,
}

impl Style {
    /// Construct a style from a foreground and background color with no
    /// attributes.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attrs: AttrSet::default(),
        }
    }
}

impl Default for Style {
    /// White on black, no attributes.
    fn default() -> Self {
        Self::new(Color::White, Color::Black)
    }
}
