use thiserror::Error;

/// Precondition violations for the public mutators.
/// Both are rejected before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Tick speed must be a positive number of milliseconds
    #[error("invalid speed: {0} ms (must be positive)")]
    InvalidSpeed(u32),

    /// Cell coordinates outside the current grid
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
