//! # STL Codec
//!
//! Stereolithography reader and writer.
//!
//! Binary layout:
//!
//! ```text
//! 80 bytes   header (arbitrary, may start with "solid")
//!  4 bytes   u32 LE triangle count
//! 50 bytes   per triangle: normal 3×f32 LE, 3 vertices 3×f32 LE, u16 attribute
//! ```
//!
//! ASCII files are `solid … facet normal … outer loop / vertex ×3 / endloop
//! endfacet … endsolid`. Detection follows the binary size rule first, so a
//! binary file whose header happens to start with `solid` still decodes as
//! binary.

mod read;
mod write;

pub use read::{is_binary_stl, read_stl};
pub use write::{write_ascii_stl, write_binary_stl};

/// Size of the binary header.
pub const HEADER_LEN: usize = 80;

/// Size of the header plus the triangle count.
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;

/// Size of one binary triangle record.
pub const TRIANGLE_RECORD_LEN: usize = 50;

/// Byte length of a binary STL holding `triangle_count` triangles.
///
/// # Example
///
/// ```rust
/// use tiptop_mesh::stl::binary_len;
/// assert_eq!(binary_len(12), 684);
/// ```
pub const fn binary_len(triangle_count: usize) -> usize {
    PREAMBLE_LEN + triangle_count * TRIANGLE_RECORD_LEN
}
