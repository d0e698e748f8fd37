use thiserror::Error;

/// Top-level error type for cell-to-polygon extraction.
#[derive(Debug, Error)]
pub enum CheeseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("cell size ({x}, {y}) must be finite and positive")]
    InvalidCellSize { x: f64, y: f64 },
}

/// Errors raised when a cell selection cannot be turned into one shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cell selection is empty")]
    Empty,

    #[error("cells are not connected ({components} separate components)")]
    NotConnected { components: usize },
}

/// Errors related to shape operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`CheeseError`].
pub type Result<T> = std::result::Result<T, CheeseError>;
