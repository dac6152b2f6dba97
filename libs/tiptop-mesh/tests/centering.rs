use glam::{DMat4, DVec3};
use tiptop_mesh::primitives::create_cube;
use tiptop_mesh::stl::{read_stl, write_binary_stl};

#[test]
fn test_offset_model_recenters_through_public_api() {
    let mut part = create_cube(DVec3::new(40.0, 10.0, 20.0), false).unwrap();
    part.translate(DVec3::new(100.0, 0.0, -5.0));
    let bytes = write_binary_stl(&part, "offset part").unwrap();

    let decoded = read_stl(&bytes).unwrap();
    let aabb = decoded.bounding_box().unwrap();
    assert_eq!(aabb.center(), DVec3::new(120.0, 5.0, 5.0));

    let to_origin = DMat4::from_scale(DVec3::splat(0.1)) * DMat4::from_translation(-aabb.center());
    let centered = decoded.transformed(&to_origin).bounding_box().unwrap();
    assert!(centered.center().length() < 1e-9);
    assert!((centered.max_dimension() - 4.0).abs() < 1e-9);
}
