//! Startup loading of both slots.

use config::constants::PLACEHOLDER_SIZE;
use glam::DVec3;
use tiptop_mesh::primitives::create_cube;
use tiptop_mesh::stl::read_stl;
use tracing::{info, instrument, warn};

use super::{AssetCache, AssetSlot, AssetSource, AssetSpec, LoadStatus, Material, MeshAsset, Transform};
use crate::error::AssetError;

/// Loads both slots and never fails.
///
/// `specs[0]` fills [`AssetSlot::Original`] and `specs[1]` fills
/// [`AssetSlot::Optimized`]. A slot whose fetch or decode fails gets a
/// placeholder cube instead.
///
/// # Example
///
/// ```rust
/// use tiptop_viewer::{preload, AssetSlot, AssetSpec, InMemoryAssetSource};
///
/// let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
/// assert!(cache.get(AssetSlot::Original).is_placeholder());
/// assert!(cache.get(AssetSlot::Optimized).is_placeholder());
/// ```
#[instrument(skip_all)]
pub fn preload<S>(source: &S, specs: &[AssetSpec; 2]) -> AssetCache
where
    S: AssetSource + ?Sized,
{
    let [original, optimized] = specs;
    let cache = AssetCache::new(
        load_slot(source, AssetSlot::Original, original),
        load_slot(source, AssetSlot::Optimized, optimized),
    );
    info!(degraded = cache.any_placeholder(), "assets preloaded");
    cache
}

fn load_slot<S>(source: &S, slot: AssetSlot, spec: &AssetSpec) -> MeshAsset
where
    S: AssetSource + ?Sized,
{
    match load_mesh(source, slot, spec) {
        Ok(asset) => asset,
        Err(err) => {
            warn!(?slot, path = %spec.path, error = %err, "asset unavailable, using placeholder");
            placeholder(slot, spec, &err)
        }
    }
}

fn load_mesh<S>(source: &S, slot: AssetSlot, spec: &AssetSpec) -> Result<MeshAsset, AssetError>
where
    S: AssetSource + ?Sized,
{
    let bytes = source.fetch(&spec.path)?;
    let mesh = read_stl(&bytes)?;
    // read_stl rejects meshes without triangles, so bounds always exist
    let transform = mesh
        .bounding_box()
        .map(|bounds| Transform::centering(&bounds, spec.scale))
        .unwrap_or_default();

    info!(?slot, triangles = mesh.triangle_count(), "asset loaded");
    Ok(MeshAsset {
        slot,
        mesh,
        material: Material::physical(spec.color),
        transform,
        status: LoadStatus::Loaded,
    })
}

fn placeholder(slot: AssetSlot, spec: &AssetSpec, reason: &AssetError) -> MeshAsset {
    MeshAsset {
        slot,
        mesh: create_cube(DVec3::splat(PLACEHOLDER_SIZE), true).unwrap_or_default(),
        material: Material::placeholder(spec.color),
        transform: Transform::default(),
        status: LoadStatus::Placeholder {
            reason: reason.to_string(),
        },
    }
}
