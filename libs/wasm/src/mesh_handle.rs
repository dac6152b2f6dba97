//! # Mesh Handle
//!
//! WASM-friendly wrapper for the displayed asset's geometry.

use config::constants::hex_to_rgb;
use tiptop_viewer::{AssetSlot, MeshAsset};
use wasm_bindgen::prelude::*;

/// World-space geometry and appearance of one asset.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = viewer.displayedMesh();
/// if (mesh) {
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
///   geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///   const [r, g, b] = mesh.color();
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Optional vertex normals as [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    /// Linear [r, g, b]
    color: [f32; 3],
    slot: AssetSlot,
    placeholder: bool,
    material_json: String,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Material color as linear [r, g, b].
    #[wasm_bindgen]
    pub fn color(&self) -> Vec<f32> {
        self.color.to_vec()
    }

    /// Full material description as JSON.
    #[wasm_bindgen(js_name = materialJson)]
    pub fn material_json(&self) -> String {
        self.material_json.clone()
    }

    /// "original" or "optimized".
    #[wasm_bindgen]
    pub fn slot(&self) -> String {
        slot_name(self.slot).to_string()
    }

    /// Returns true if the asset failed to load and a cube stands in.
    #[wasm_bindgen(js_name = isPlaceholder)]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Returns true if the mesh has normals.
    #[wasm_bindgen]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle with the asset transform baked into the buffers.
    pub fn from_asset(asset: &MeshAsset) -> Self {
        let mesh = asset.world_mesh();
        Self {
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            color: hex_to_rgb(asset.material.color),
            slot: asset.slot,
            placeholder: asset.is_placeholder(),
            material_json: serde_json::to_string(&asset.material).unwrap_or_default(),
        }
    }

    /// Vertex buffer without going through a JS typed array.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Index buffer without going through a JS typed array.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn rgb(&self) -> [f32; 3] {
        self.color
    }
}

pub(crate) fn slot_name(slot: AssetSlot) -> &'static str {
    match slot {
        AssetSlot::Original => "original",
        AssetSlot::Optimized => "optimized",
    }
}
