//! Error types for atoms_scrolly

use thiserror::Error;

/// Errors raised while wiring a scrolly controller to a stage
#[derive(Error, Debug)]
pub enum ScrollyError {
    /// A required element was absent from the stage subtree at construction
    #[error("required element missing: .{0}")]
    MissingElement(&'static str),
}

/// Result type for scrolly operations
pub type Result<T> = std::result::Result<T, ScrollyError>;
