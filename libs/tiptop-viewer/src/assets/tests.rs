//! Preloader tests against in-memory and on-disk sources.

use super::*;
use crate::error::FetchError;
use approx::assert_relative_eq;
use config::constants::{OPTIMIZED_COLOR, ORIGINAL_COLOR};
use tiptop_mesh::primitives::create_cube;
use tiptop_mesh::stl::write_binary_stl;

/// Binary STL of a cube with edge `size` whose minimum corner sits at `offset`.
fn cube_stl(size: f64, offset: DVec3) -> Vec<u8> {
    let mut cube = create_cube(DVec3::splat(size), false).unwrap();
    cube.translate(offset);
    write_binary_stl(&cube, "fixture").unwrap()
}

fn source_with_both() -> InMemoryAssetSource {
    let mut source = InMemoryAssetSource::default();
    source.insert(ORIGINAL_ASSET_PATH, cube_stl(10.0, DVec3::new(100.0, 0.0, 0.0)));
    source.insert(OPTIMIZED_ASSET_PATH, cube_stl(20.0, DVec3::new(0.0, -50.0, 3.0)));
    source
}

#[test]
fn test_loaded_assets_are_centered_and_scaled() {
    let cache = preload(&source_with_both(), &AssetSpec::defaults());
    assert!(!cache.any_placeholder());

    let original = cache.get(AssetSlot::Original);
    assert_eq!(original.status, LoadStatus::Loaded);
    assert_eq!(original.material, Material::physical(ORIGINAL_COLOR));

    let bounds = original.world_bounds();
    assert_relative_eq!(bounds.center().length(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max_dimension(), 1.0, epsilon = 1e-9);

    let optimized = cache.get(AssetSlot::Optimized).world_bounds();
    assert_relative_eq!(optimized.center().length(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(optimized.max_dimension(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_model_space_geometry_is_untouched() {
    let cache = preload(&source_with_both(), &AssetSpec::defaults());
    let model = cache.get(AssetSlot::Original).mesh.bounding_box().unwrap();
    assert_relative_eq!(model.min.x, 100.0, epsilon = 1e-6);
}

#[test]
fn test_failed_fetch_degrades_to_placeholder() {
    let mut source = source_with_both();
    source.insert_error(
        OPTIMIZED_ASSET_PATH,
        FetchError::Status {
            path: OPTIMIZED_ASSET_PATH.into(),
            status: 404,
        },
    );

    let cache = preload(&source, &AssetSpec::defaults());
    assert!(cache.any_placeholder());
    assert!(!cache.get(AssetSlot::Original).is_placeholder());

    let placeholder = cache.get(AssetSlot::Optimized);
    assert_eq!(placeholder.slot, AssetSlot::Optimized);
    assert_eq!(placeholder.material, Material::placeholder(OPTIMIZED_COLOR));
    assert_eq!(placeholder.mesh.triangle_count(), 12);
    match &placeholder.status {
        LoadStatus::Placeholder { reason } => assert!(reason.contains("404")),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn test_undecodable_bytes_degrade_to_placeholder() {
    let mut source = InMemoryAssetSource::default();
    source.insert(ORIGINAL_ASSET_PATH, b"solid broken\nfacet normal x\n".to_vec());
    source.insert(OPTIMIZED_ASSET_PATH, cube_stl(1.0, DVec3::ZERO)[..90].to_vec());

    let cache = preload(&source, &AssetSpec::defaults());
    for asset in cache.iter() {
        assert!(asset.is_placeholder(), "{:?} should be a placeholder", asset.slot);
        assert_relative_eq!(asset.world_bounds().max_dimension(), 1.0);
    }
}

#[test]
fn test_preload_always_fills_both_slots() {
    let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
    let slots: Vec<_> = cache.iter().map(|asset| asset.slot).collect();
    assert_eq!(slots, AssetSlot::ALL.to_vec());
}

#[test]
fn test_world_mesh_bakes_transform() {
    let cache = preload(&source_with_both(), &AssetSpec::defaults());
    let asset = cache.get(AssetSlot::Original);
    let world = asset.world_mesh().bounding_box().unwrap();
    assert_relative_eq!(world.min.x, asset.world_bounds().min.x, epsilon = 1e-12);
    assert_relative_eq!(world.max.y, 0.5, epsilon = 1e-9);
}

#[test]
fn test_in_memory_source_reports_missing_path() {
    let source = InMemoryAssetSource::default();
    assert_eq!(
        source.fetch("/nope.stl"),
        Err(FetchError::NotFound {
            path: "/nope.stl".into()
        })
    );
}

#[test]
fn test_directory_source_reads_relative_to_root() {
    let root = std::env::temp_dir().join(format!("tiptop-assets-{}", std::process::id()));
    std::fs::create_dir_all(root.join("models")).unwrap();
    std::fs::write(root.join("models/model1.stl"), cube_stl(2.0, DVec3::ZERO)).unwrap();

    let source = DirectoryAssetSource::new(&root);
    assert_eq!(source.fetch("/models/model1.stl").unwrap().len(), 684);
    assert!(matches!(
        source.fetch("/models/model2.stl"),
        Err(FetchError::NotFound { .. })
    ));

    let cache = preload(&source, &AssetSpec::defaults());
    assert!(!cache.get(AssetSlot::Original).is_placeholder());
    assert!(cache.get(AssetSlot::Optimized).is_placeholder());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_placeholders_keep_slot_colors() {
    let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
    let original = cache.get(AssetSlot::Original);
    let optimized = cache.get(AssetSlot::Optimized);

    assert_eq!(original.material.color, ORIGINAL_COLOR);
    assert_eq!(optimized.material.color, OPTIMIZED_COLOR);
    assert!(original.material.flat_shading);
    assert!(original.is_placeholder() && optimized.is_placeholder());
}
