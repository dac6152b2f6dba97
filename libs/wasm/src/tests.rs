//! Tests for the WASM-facing helpers that do not need a JS host.

use super::*;
use config::constants::{OPTIMIZED_ASSET_PATH, ORIGINAL_ASSET_PATH};
use glam::DVec3;
use tiptop_mesh::primitives::create_cube;
use tiptop_mesh::stl::write_binary_stl;
use tiptop_viewer::{
    preload, FixedJitter, InMemoryAssetSource, ManualClock, PromptField, StartOutcome,
    ValidationError,
};

fn loaded_source() -> InMemoryAssetSource {
    let cube = create_cube(DVec3::splat(30.0), false).unwrap();
    let bytes = write_binary_stl(&cube, "fixture").unwrap();
    let mut source = InMemoryAssetSource::default();
    source.insert(ORIGINAL_ASSET_PATH, bytes.clone());
    source.insert(OPTIMIZED_ASSET_PATH, bytes);
    source
}

fn context(clock: &ManualClock) -> ViewerContext<&ManualClock, FixedJitter> {
    let mut ctx = ViewerContext::new(ViewerConfig::default(), clock, FixedJitter(5.0), 800, 600);
    ctx.preload_from(&loaded_source(), &AssetSpec::defaults());
    ctx
}

/// Mesh buffers carry world-space geometry for the requested slot.
#[test]
fn test_mesh_handle_bakes_transform() {
    let cache = preload(&loaded_source(), &AssetSpec::defaults());
    let handle = mesh_for_slot_internal(Some(&cache), "original").expect("slot exists");

    assert_eq!(handle.triangle_count(), 12);
    assert_eq!(handle.vertex_buffer().len(), handle.vertex_count() as usize * 3);
    assert_eq!(handle.index_buffer().len(), 36);
    assert!(!handle.is_placeholder());
    assert_eq!(handle.slot(), "original");

    // 30 units at scale 0.1, centered
    let max = handle
        .vertex_buffer()
        .iter()
        .fold(f32::MIN, |acc, &v| acc.max(v));
    assert!((max - 1.5).abs() < 1e-5);
}

#[test]
fn test_mesh_handle_reports_color() {
    let cache = preload(&loaded_source(), &AssetSpec::defaults());
    let handle = mesh_for_slot_internal(Some(&cache), "optimized").unwrap();
    let [r, g, b] = handle.rgb();
    // 0x10b981
    assert!(g > r && g > b);
    assert!(handle.material_json().contains("\"doubleSided\":true"));
}

#[test]
fn test_unknown_slot_name_yields_nothing() {
    let cache = preload(&loaded_source(), &AssetSpec::defaults());
    assert!(mesh_for_slot_internal(Some(&cache), "final").is_none());
    assert!(mesh_for_slot_internal(None, "original").is_none());
}

#[test]
fn test_placeholder_mesh_is_flagged() {
    let cache = preload(&InMemoryAssetSource::default(), &AssetSpec::defaults());
    let handle = mesh_for_slot_internal(Some(&cache), "original").unwrap();
    assert!(handle.is_placeholder());
    assert!(handle.has_normals());
    assert!(!handle.is_empty());
}

/// Frame JSON follows the displayed asset and disappears after teardown.
#[test]
fn test_frame_json_tracks_view() {
    let clock = ManualClock::new(0);
    let mut ctx = context(&clock);

    let idle = frame_json_internal(&ctx).unwrap().expect("live scene draws");
    assert!(idle.contains("\"object\":null"));
    assert!(idle.contains("\"kind\":\"hemisphere\""));

    ctx.select_file(true);
    let shown = frame_json_internal(&ctx).unwrap().unwrap();
    assert!(shown.contains("\"slot\":\"original\""));

    ctx.teardown();
    assert_eq!(frame_json_internal(&ctx).unwrap(), None);
}

#[test]
fn test_ui_state_json_roundtrips_flags() {
    let clock = ManualClock::new(0);
    let mut ctx = context(&clock);
    ctx.select_file(true);
    ctx.request_optimization();

    let json = ui_state::snapshot_json(&ctx.snapshot()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["view"], "showingOriginal");
    assert_eq!(value["promptOpen"], true);
    assert_eq!(value["optimizeEnabled"], true);
    assert_eq!(value["downloadVisible"], false);
}

#[test]
fn test_ui_text_matches_prompt_fields() {
    let text = ui_state::ui_text();
    assert_eq!(
        text.prompt_labels,
        vec!["Force Scaling", "Resolution", "Volume Fraction Limit"]
    );
    assert_eq!(text.prompt_placeholder, "0.00");
}

#[test]
fn test_validation_alert_text() {
    let err = ViewerError::Validation(ValidationError::MissingAnswer {
        field: PromptField::ForceScaling,
    });
    assert_eq!(alert_text(&err), "Please answer all questions");
}

#[test]
fn test_outcome_names_are_stable() {
    assert_eq!(ui_state::outcome_name(StartOutcome::Started), "started");
    assert_eq!(ui_state::outcome_name(StartOutcome::AlreadyRunning), "alreadyRunning");
    assert_eq!(ui_state::outcome_name(StartOutcome::NotReady), "notReady");
}
