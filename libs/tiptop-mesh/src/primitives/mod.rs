//! # Primitives
//!
//! Generated shapes. Only the placeholder cube is needed by the viewer.

pub mod cube;

pub use cube::create_cube;
