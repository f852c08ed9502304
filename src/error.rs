use thiserror::Error;

/// Errors returned by spaces and clustering algorithms in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point addresses a cell outside a fixed-size space.
    #[error("index out of bounds: index {index}, but space has size {size}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Size of the space.
        size: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
