//! # Mesh Errors
//!
//! Error types for mesh construction and STL encoding/decoding.

use thiserror::Error;

/// Errors that can occur while building, reading or writing meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Input shorter than the fixed binary STL preamble.
    #[error("STL data too short: {len} bytes (need at least {min})")]
    TooShort { len: usize, min: usize },

    /// Binary STL declares more triangles than the data holds.
    #[error("STL data truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// ASCII STL that is not valid UTF-8.
    #[error("ASCII STL is not valid UTF-8")]
    InvalidUtf8,

    /// ASCII STL with an unexpected token or number.
    #[error("Malformed ASCII STL at line {line}: {message}")]
    MalformedAscii { line: usize, message: String },

    /// File parsed but holds no triangles.
    #[error("STL contains no triangles")]
    Empty,

    /// Input larger than the accepted asset size.
    #[error("STL too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Triangle refers to a vertex that does not exist.
    #[error("Vertex index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl MeshError {
    /// Creates a malformed ASCII error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedAscii {
            line,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::Truncated {
            expected: 134,
            actual: 100,
        };
        assert!(err.to_string().contains("134"));

        let err = MeshError::malformed(7, "expected 'vertex'");
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
