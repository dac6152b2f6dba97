//! # Assets
//!
//! The two fixed mesh slots, their materials and transforms, and the cache the
//! preloader fills at startup.
//!
//! ```text
//! AssetSource ──bytes──► read_stl ──Mesh──► center + scale ──► MeshAsset
//!       │ error                                                  │
//!       └──────────────► placeholder cube ───────────────────────┘
//! ```

mod preload;
mod source;

pub use preload::preload;
pub use source::{AssetSource, DirectoryAssetSource, InMemoryAssetSource};

use config::constants::{
    MATERIAL_CLEARCOAT, MATERIAL_CLEARCOAT_ROUGHNESS, MATERIAL_METALNESS, MATERIAL_REFLECTIVITY,
    MATERIAL_ROUGHNESS, OPTIMIZED_ASSET_PATH, OPTIMIZED_COLOR, OPTIMIZED_SCALE,
    ORIGINAL_ASSET_PATH, ORIGINAL_COLOR, ORIGINAL_SCALE,
};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use tiptop_mesh::{Aabb, Mesh};

/// One of the two fixed asset slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetSlot {
    Original,
    Optimized,
}

impl AssetSlot {
    /// Both slots in preload order.
    pub const ALL: [AssetSlot; 2] = [AssetSlot::Original, AssetSlot::Optimized];
}

/// Where an asset comes from and how it is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSpec {
    /// Path handed to the [`AssetSource`].
    pub path: String,
    /// Display color as `0xRRGGBB`.
    pub color: u32,
    /// Uniform scale applied after centering.
    pub scale: f64,
}

impl AssetSpec {
    /// The "before" model.
    pub fn original() -> Self {
        Self {
            path: ORIGINAL_ASSET_PATH.to_string(),
            color: ORIGINAL_COLOR,
            scale: ORIGINAL_SCALE,
        }
    }

    /// The "after" model.
    pub fn optimized() -> Self {
        Self {
            path: OPTIMIZED_ASSET_PATH.to_string(),
            color: OPTIMIZED_COLOR,
            scale: OPTIMIZED_SCALE,
        }
    }

    /// Specs for both slots, original first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tiptop_viewer::AssetSpec;
    ///
    /// let [original, optimized] = AssetSpec::defaults();
    /// assert!(original.scale > optimized.scale);
    /// ```
    pub fn defaults() -> [AssetSpec; 2] {
        [Self::original(), Self::optimized()]
    }
}

/// Load outcome of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LoadStatus {
    /// No cache installed yet.
    Pending,
    Loaded,
    /// The fetch or decode failed and a cube stands in.
    Placeholder { reason: String },
}

/// Surface appearance handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub color: u32,
    pub metalness: f32,
    pub roughness: f32,
    pub reflectivity: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub double_sided: bool,
    pub flat_shading: bool,
}

impl Material {
    /// Physically based material used for loaded models.
    pub fn physical(color: u32) -> Self {
        Self {
            color,
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            reflectivity: MATERIAL_REFLECTIVITY,
            clearcoat: MATERIAL_CLEARCOAT,
            clearcoat_roughness: MATERIAL_CLEARCOAT_ROUGHNESS,
            double_sided: true,
            flat_shading: false,
        }
    }

    /// Plain flat-shaded material for a stand-in cube in the slot's `color`.
    pub fn placeholder(color: u32) -> Self {
        Self {
            color,
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            reflectivity: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            double_sided: false,
            flat_shading: true,
        }
    }
}

/// Model-to-world transform: translate, then scale uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: DVec3,
    pub scale: f64,
}

impl Transform {
    /// Moves `bounds` to the origin and scales by `scale`.
    pub fn centering(bounds: &Aabb, scale: f64) -> Self {
        Self {
            translation: -bounds.center(),
            scale,
        }
    }

    /// Homogeneous matrix computing `scale * (v + translation)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use tiptop_viewer::Transform;
    ///
    /// let t = Transform { translation: DVec3::new(-10.0, 0.0, 0.0), scale: 0.5 };
    /// let p = t.matrix().transform_point3(DVec3::new(12.0, 2.0, 0.0));
    /// assert_eq!(p, DVec3::new(1.0, 1.0, 0.0));
    /// ```
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale(DVec3::splat(self.scale)) * DMat4::from_translation(self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            scale: 1.0,
        }
    }
}

/// A displayable object in one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAsset {
    pub slot: AssetSlot,
    /// Geometry in model space.
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Transform,
    pub status: LoadStatus,
}

impl MeshAsset {
    /// Returns true when the asset is a stand-in cube.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.status, LoadStatus::Placeholder { .. })
    }

    /// Bounds after the model-to-world transform.
    pub fn world_bounds(&self) -> Aabb {
        self.mesh
            .bounding_box()
            .map(|bounds| bounds.transformed(&self.transform.matrix()))
            .unwrap_or_else(|| Aabb::new(DVec3::ZERO, DVec3::ZERO))
    }

    /// Copy of the geometry with the transform baked in.
    pub fn world_mesh(&self) -> Mesh {
        self.mesh.transformed(&self.transform.matrix())
    }
}

/// Exactly one asset per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCache {
    original: MeshAsset,
    optimized: MeshAsset,
}

impl AssetCache {
    /// Builds a cache from the assets of both slots.
    pub fn new(original: MeshAsset, optimized: MeshAsset) -> Self {
        Self {
            original,
            optimized,
        }
    }

    /// Returns the asset stored in `slot`.
    pub fn get(&self, slot: AssetSlot) -> &MeshAsset {
        match slot {
            AssetSlot::Original => &self.original,
            AssetSlot::Optimized => &self.optimized,
        }
    }

    /// Iterates over both assets, original first.
    pub fn iter(&self) -> impl Iterator<Item = &MeshAsset> {
        [&self.original, &self.optimized].into_iter()
    }

    /// Returns true when at least one slot fell back to a placeholder.
    pub fn any_placeholder(&self) -> bool {
        self.iter().any(MeshAsset::is_placeholder)
    }
}

#[cfg(test)]
mod tests;
