//! Error types for mesh building
//!
//! Builders never abort a tile. A `BuildError` means the offending feature
//! was skipped and nothing was appended to the output mesh.

use thiserror::Error;

/// Errors that can occur while building a feature's mesh
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The triangulation backend could not tessellate the rings
    #[error("polygon is not tessellable: {reason}")]
    NotTessellable { reason: String },

    /// A coordinate was NaN or infinite
    #[error("non-finite coordinate at point {index}")]
    NonFiniteCoordinate { index: usize },

    /// The requested geometry is declared but not generated
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

impl BuildError {
    /// Creates a tessellation failure error.
    pub fn not_tessellable(reason: impl Into<String>) -> Self {
        Self::NotTessellable {
            reason: reason.into(),
        }
    }
}
