//! # TipTop Mesh
//!
//! Browser-safe triangle meshes for the TipTop viewer.
//!
//! ## Architecture
//!
//! ```text
//! STL bytes → stl::read_stl → Mesh → Aabb (centering, framing)
//!                               ↓
//!                        stl::write_binary_stl → download
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tiptop_mesh::{primitives::create_cube, stl};
//! use glam::DVec3;
//!
//! let cube = create_cube(DVec3::ONE, true).unwrap();
//! let bytes = stl::write_binary_stl(&cube, "cube").unwrap();
//! let parsed = stl::read_stl(&bytes).unwrap();
//! assert_eq!(parsed.triangle_count(), 12);
//! ```

pub mod bounds;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod stl;

pub use bounds::Aabb;
pub use error::MeshError;
pub use mesh::Mesh;
