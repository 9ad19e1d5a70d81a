//! Error types for vector document generation and serialization.

use thiserror::Error;

/// Errors raised while building or writing vector documents.
///
/// A degenerate panel is a programming-contract violation (decomposition
/// guarantees positive dimensions), not a user-facing validation case.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("panel '{label}' has degenerate dimensions: {length_mm}x{width_mm}mm")]
    DegeneratePanel {
        label: String,
        length_mm: f64,
        width_mm: f64,
    },

    #[error("DXF serialization failed: {0}")]
    Dxf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
