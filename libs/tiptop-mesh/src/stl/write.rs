//! STL encoding.

use std::fmt::Write as _;

use config::constants::NORMAL_EPSILON;
use glam::DVec3;

use super::{binary_len, HEADER_LEN};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Encodes a mesh as binary STL.
///
/// `header` is truncated to 80 bytes and zero-padded. Facet normals are
/// recomputed from the triangle winding; degenerate triangles get a zero
/// normal.
///
/// # Errors
///
/// Returns [`MeshError::IndexOutOfRange`] when a triangle refers to a missing
/// vertex.
///
/// # Example
///
/// ```rust
/// use tiptop_mesh::{primitives::create_cube, stl};
/// use glam::DVec3;
///
/// let cube = create_cube(DVec3::ONE, true).unwrap();
/// let bytes = stl::write_binary_stl(&cube, "cube").unwrap();
/// assert_eq!(bytes.len(), stl::binary_len(12));
/// ```
pub fn write_binary_stl(mesh: &Mesh, header: &str) -> Result<Vec<u8>, MeshError> {
    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(binary_len(tri_count));

    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for index in 0..tri_count {
        let corners = mesh.triangle_corners(index)?;
        push_vec3(&mut buf, facet_normal(&corners));
        for corner in corners {
            push_vec3(&mut buf, corner);
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Encodes a mesh as an ASCII STL string.
///
/// # Errors
///
/// Returns [`MeshError::IndexOutOfRange`] when a triangle refers to a missing
/// vertex.
pub fn write_ascii_stl(mesh: &Mesh, name: &str) -> Result<String, MeshError> {
    let mut out = String::with_capacity(mesh.triangle_count() * 256);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "solid {name}");

    for index in 0..mesh.triangle_count() {
        let corners = mesh.triangle_corners(index)?;
        let n = facet_normal(&corners);
        let _ = writeln!(out, "  facet normal {} {} {}", n.x as f32, n.y as f32, n.z as f32);
        out.push_str("    outer loop\n");
        for v in corners {
            let _ = writeln!(out, "      vertex {} {} {}", v.x as f32, v.y as f32, v.z as f32);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    let _ = writeln!(out, "endsolid {name}");
    Ok(out)
}

fn facet_normal(corners: &[DVec3; 3]) -> DVec3 {
    let raw = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
    let len = raw.length();
    if len > NORMAL_EPSILON {
        raw / len
    } else {
        DVec3::ZERO
    }
}

fn push_vec3(buf: &mut Vec<u8>, v: DVec3) {
    buf.extend_from_slice(&(v.x as f32).to_le_bytes());
    buf.extend_from_slice(&(v.y as f32).to_le_bytes());
    buf.extend_from_slice(&(v.z as f32).to_le_bytes());
}
