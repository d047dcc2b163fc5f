//! Crate error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the layout and compositing kernel. The `Layout` and
/// `ZOrder` classes are fatal: they signal programming defects and abort the
/// operation that detected them rather than degrading.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A layout invariant was violated, such as the space-accounting
    /// postcondition of a stacking pass.
    #[error("layout")]
    Layout(String),

    /// A z-order operation referenced a window the host does not own.
    #[error("zorder")]
    ZOrder(String),

    /// Geometric misuse, folded up from the geometry crate.
    #[error("geometry")]
    Geometry(String),

    /// A failure in the rendering flush path.
    #[error("render")]
    Render(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Error::Geometry(e.to_string())
    }
}
