// Tests for the slider camera.

use folio_core::Camera;
use glam::Vec3;

#[test]
fn view_matrix_maps_the_eye_to_the_origin() {
    let camera = Camera::for_surface(800, 600);
    let eye_in_view = camera.view_matrix().transform_point3(camera.eye);
    assert!(eye_in_view.length() < 1e-5);
}

#[test]
fn resize_only_changes_the_aspect_ratio() {
    let mut camera = Camera::for_surface(800, 600);
    let eye = camera.eye;
    camera.set_aspect(1920, 1080);
    assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(camera.eye, eye);
}

#[test]
fn degenerate_surface_sizes_are_clamped() {
    let camera = Camera::for_surface(0, 0);
    assert!(camera.aspect.is_finite());
    assert!(camera.aspect > 0.0);
}

#[test]
fn view_proj_looks_down_negative_z() {
    let camera = Camera::for_surface(800, 600);
    // a point in front of the camera lands inside clip space
    let clip = camera.view_proj().project_point3(Vec3::ZERO);
    assert!(clip.x.abs() < 1e-5);
    assert!(clip.y.abs() < 1e-5);
    assert!(clip.z > 0.0 && clip.z < 1.0);
}
