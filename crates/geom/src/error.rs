/// Errors arising from geometry operations.
#[derive(Debug, Clone)]
pub enum Error {
    /// A geometric constraint was violated.
    Geometry(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geometry(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;
