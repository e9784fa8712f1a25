//! Error types for Algovis.
//!
//! Only genuinely invalid requests are errors: positions or vertex indices
//! outside the structure, or an impossible graph size. Domain-normal outcomes
//! (value not found, no path between vertices) are reported through return
//! values, never through `Err`. No failure is fatal and a failed operation
//! leaves its target unchanged.

use thiserror::Error;

/// Result type alias using the Algovis [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by Algovis engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A positional operation referenced an index beyond the structure.
    #[error("position {position} out of range for length {len}")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The current length of the structure.
        len: usize,
    },

    /// A graph operation referenced a vertex beyond the graph.
    #[error("vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange {
        /// The requested vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertices: usize,
    },

    /// A graph was requested with an unsupported vertex count.
    #[error("invalid vertex count {requested} (must be 1..={max})")]
    InvalidVertexCount {
        /// The requested vertex count.
        requested: usize,
        /// The maximum supported vertex count.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PositionOutOfRange { position: 5, len: 3 };
        assert_eq!(err.to_string(), "position 5 out of range for length 3");

        let err = Error::VertexOutOfRange {
            vertex: 60,
            vertices: 10,
        };
        assert_eq!(
            err.to_string(),
            "vertex 60 out of range for graph with 10 vertices"
        );
    }
}
