//! STL decoding.

use config::constants::{MAX_ASSET_BYTES, MAX_TRIANGLES};
use glam::DVec3;
use tracing::debug;

use super::{binary_len, PREAMBLE_LEN, TRIANGLE_RECORD_LEN};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Decodes binary or ASCII STL into a mesh.
///
/// Every facet gets its own three vertices; facet normals become vertex
/// normals, and zero normals are recomputed from the winding.
///
/// # Errors
///
/// Returns [`MeshError`] for truncated binary data, malformed ASCII, oversized
/// input, or a file with no triangles.
///
/// # Example
///
/// ```rust
/// use tiptop_mesh::stl::read_stl;
///
/// let ascii = b"solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid t\n";
/// let mesh = read_stl(ascii).unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
pub fn read_stl(data: &[u8]) -> Result<Mesh, MeshError> {
    if data.len() > MAX_ASSET_BYTES {
        return Err(MeshError::TooLarge {
            size: data.len(),
            max: MAX_ASSET_BYTES,
        });
    }

    let facets = if is_binary_stl(data) {
        read_binary(data)?
    } else {
        read_ascii(data)?
    };

    if facets.is_empty() {
        return Err(MeshError::Empty);
    }
    debug!(triangles = facets.len(), bytes = data.len(), "decoded STL");

    Ok(facets_to_mesh(&facets))
}

/// Returns true when `data` should be decoded as binary STL.
///
/// A declared triangle count that matches the byte length wins; otherwise a
/// leading `solid` keyword marks ASCII.
pub fn is_binary_stl(data: &[u8]) -> bool {
    if data.len() >= PREAMBLE_LEN {
        let count = read_u32(data, 80) as usize;
        if count
            .checked_mul(TRIANGLE_RECORD_LEN)
            .and_then(|n| n.checked_add(PREAMBLE_LEN))
            == Some(data.len())
        {
            return true;
        }
    }
    let head = &data[..data.len().min(5)];
    !head.eq_ignore_ascii_case(b"solid")
}

struct Facet {
    normal: DVec3,
    vertices: [DVec3; 3],
}

fn read_binary(data: &[u8]) -> Result<Vec<Facet>, MeshError> {
    if data.len() < PREAMBLE_LEN {
        return Err(MeshError::TooShort {
            len: data.len(),
            min: PREAMBLE_LEN,
        });
    }

    let count = read_u32(data, 80) as usize;
    if count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count,
            max: MAX_TRIANGLES,
        });
    }

    let expected = binary_len(count);
    if data.len() < expected {
        return Err(MeshError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let facets = data[PREAMBLE_LEN..expected]
        .chunks_exact(TRIANGLE_RECORD_LEN)
        .map(|record| Facet {
            normal: read_vec3(record, 0),
            vertices: [
                read_vec3(record, 12),
                read_vec3(record, 24),
                read_vec3(record, 36),
            ],
        })
        .collect();
    Ok(facets)
}

fn read_ascii(data: &[u8]) -> Result<Vec<Facet>, MeshError> {
    let text = std::str::from_utf8(data).map_err(|_| MeshError::InvalidUtf8)?;
    let mut facets = Vec::new();
    let mut normal = DVec3::ZERO;
    let mut corners: Vec<DVec3> = Vec::with_capacity(3);
    let mut in_facet = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "solid" | "endsolid" | "outer" | "endloop" => {}
            "facet" => {
                if in_facet {
                    return Err(MeshError::malformed(line_no, "nested 'facet'"));
                }
                if tokens.next() != Some("normal") {
                    return Err(MeshError::malformed(line_no, "expected 'facet normal'"));
                }
                normal = parse_triplet(&mut tokens, line_no)?;
                corners.clear();
                in_facet = true;
            }
            "vertex" => {
                if !in_facet {
                    return Err(MeshError::malformed(line_no, "'vertex' outside facet"));
                }
                if corners.len() == 3 {
                    return Err(MeshError::malformed(line_no, "more than 3 vertices in facet"));
                }
                corners.push(parse_triplet(&mut tokens, line_no)?);
            }
            "endfacet" => {
                if !in_facet || corners.len() != 3 {
                    return Err(MeshError::malformed(
                        line_no,
                        format!("facet closed with {} vertices", corners.len()),
                    ));
                }
                facets.push(Facet {
                    normal,
                    vertices: [corners[0], corners[1], corners[2]],
                });
                if facets.len() > MAX_TRIANGLES {
                    return Err(MeshError::TooManyTriangles {
                        count: facets.len(),
                        max: MAX_TRIANGLES,
                    });
                }
                in_facet = false;
            }
            other => {
                return Err(MeshError::malformed(
                    line_no,
                    format!("unexpected token '{other}'"),
                ));
            }
        }
    }

    if in_facet {
        return Err(MeshError::malformed(text.lines().count(), "unterminated facet"));
    }
    Ok(facets)
}

fn parse_triplet<'a, I>(tokens: &mut I, line_no: usize) -> Result<DVec3, MeshError>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = [0.0f64; 3];
    for value in &mut out {
        let token = tokens
            .next()
            .ok_or_else(|| MeshError::malformed(line_no, "expected 3 numbers"))?;
        *value = token
            .parse::<f64>()
            .map_err(|_| MeshError::malformed(line_no, format!("invalid number '{token}'")))?;
    }
    Ok(DVec3::from_array(out))
}

fn facets_to_mesh(facets: &[Facet]) -> Mesh {
    let mut mesh = Mesh::with_capacity(facets.len() * 3, facets.len());
    let mut normals = Vec::with_capacity(facets.len() * 3);

    for facet in facets {
        let normal = if facet.normal.length_squared() > 0.0 {
            facet.normal.normalize_or_zero()
        } else {
            Mesh::face_normal(&facet.vertices)
        };
        let base = mesh.add_vertex(facet.vertices[0]);
        mesh.add_vertex(facet.vertices[1]);
        mesh.add_vertex(facet.vertices[2]);
        mesh.add_triangle(base, base + 1, base + 2);
        normals.extend_from_slice(&[normal; 3]);
    }

    mesh.set_normals(normals);
    mesh
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_vec3(record: &[u8], offset: usize) -> DVec3 {
    DVec3::new(
        read_f32(record, offset) as f64,
        read_f32(record, offset + 4) as f64,
        read_f32(record, offset + 8) as f64,
    )
}
