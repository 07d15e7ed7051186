use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid dimensions must be positive and fit in memory, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Seed probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}
