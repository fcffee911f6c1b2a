// Host-side tests for the viewer controller: dimension changes drive both
// views, and frames drive orbit and color.

mod common;

use boxfold_web::camera::{light_view_proj, Camera};
use boxfold_web::constants::*;
use boxfold_web::core::*;
use boxfold_web::viewer::BoxViewer;
use common::{CountingBackend, FakeGeometry, Op, RecordingSurface};
use glam::{Vec3, Vec4Swizzles};

const NET: (f64, f64) = (800.0, 600.0);

fn ranges() -> [SliderRange; 3] {
    Axis::ALL.map(Axis::default_range)
}

fn ready_viewer() -> (BoxViewer<FakeGeometry>, CountingBackend, RecordingSurface) {
    let mut viewer = BoxViewer::new(Dimensions::default(), ranges());
    let mut backend = CountingBackend::default();
    let mut surface = RecordingSurface::default();
    viewer.rebuild(&mut backend, &mut surface, NET);
    (viewer, backend, surface)
}

#[test]
fn initial_rebuild_populates_both_views() {
    let (viewer, backend, surface) = ready_viewer();
    assert_eq!(viewer.rebuild_count(), 1);
    assert_eq!(viewer.scene().live_count(), PanelKind::COUNT);
    assert_eq!(backend.live.len(), PanelKind::COUNT);
    assert!(surface.texts().iter().any(|t| t == "W: 2.0"));
}

#[test]
fn width_change_rebuilds_scene_and_net() {
    let (mut viewer, mut backend, mut surface) = ready_viewer();
    let stored = viewer.set_dimension(Axis::Width, 3.0, &mut backend, &mut surface, NET);
    assert_eq!(stored, 3.0);
    assert_eq!(viewer.dimensions(), Dimensions::new(3.0, 1.8, 2.0));
    assert_eq!(viewer.rebuild_count(), 2);

    let floor = viewer.scene().slot(PanelKind::Floor).expect("floor");
    assert_eq!(floor.geometry.size.x, 3.0);
    assert!(surface.texts().iter().any(|t| t == "W: 3.0"));
    // the repaint cleared the surface first
    assert_eq!(surface.count(|op| matches!(op, Op::Clear(..))), 2);
}

#[test]
fn out_of_range_values_are_clamped() {
    let (mut viewer, mut backend, mut surface) = ready_viewer();
    assert_eq!(viewer.set_dimension(Axis::Height, 99.0, &mut backend, &mut surface, NET), 3.0);
    assert_eq!(viewer.set_dimension(Axis::Depth, 0.0, &mut backend, &mut surface, NET), 0.5);
    assert_eq!(
        viewer.set_dimension(Axis::Width, f32::NAN, &mut backend, &mut surface, NET),
        0.5
    );
    assert_eq!(viewer.dimensions(), Dimensions::new(0.5, 3.0, 0.5));
}

#[test]
fn constructor_clamps_the_starting_box() {
    let viewer: BoxViewer<FakeGeometry> =
        BoxViewer::new(Dimensions::new(10.0, 0.1, 2.0), ranges());
    assert_eq!(viewer.dimensions(), Dimensions::new(4.0, 0.5, 2.0));
    assert_eq!(viewer.range(Axis::Height), Axis::Height.default_range());
}

#[test]
fn many_changes_keep_eight_live_meshes() {
    let (mut viewer, mut backend, mut surface) = ready_viewer();
    for i in 0..40 {
        let axis = Axis::ALL[i % 3];
        viewer.set_dimension(axis, 0.6 + i as f32 * 0.05, &mut backend, &mut surface, NET);
        assert_eq!(backend.live.len(), PanelKind::COUNT);
    }
    assert_eq!(viewer.rebuild_count(), 41);
    viewer.teardown(&mut backend);
    assert!(backend.live.is_empty());
}

#[test]
fn redraw_net_leaves_the_scene_alone() {
    let (viewer, backend, mut surface) = ready_viewer();
    let created = backend.created;
    viewer.redraw_net(&mut surface, (400.0, 300.0));
    assert_eq!(backend.created, created);
    assert_eq!(viewer.rebuild_count(), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::Clear(..))), 2);
}

#[test]
fn frame_pushes_orbit_into_the_root_group() {
    let (mut viewer, _backend, _surface) = ready_viewer();
    viewer.input.press(0.0, 0.0);
    viewer.input.drag_to(100.0, 0.0);
    viewer.input.release();

    let params = viewer.frame(0.0);
    let root = viewer.scene().group(GroupId::Root);
    assert!((root.rotation.y - ORBIT_EASING).abs() < 1e-6);
    assert_eq!(root.rotation.x, 0.0);
    assert_eq!(params.zoom, ZOOM_DEFAULT);
}

#[test]
fn frame_colors_follow_the_hue_sweep() {
    let (mut viewer, _backend, _surface) = ready_viewer();
    let at_zero = viewer.frame(0.0);
    assert!((at_zero.hue - 0.5).abs() < 1e-6);

    let peak = viewer.frame(std::f32::consts::FRAC_PI_2);
    assert!((peak.hue - 1.0).abs() < 1e-6);
    // hue 1.0 wraps to red
    assert!(peak.body_color.x > peak.body_color.y);
    assert!(peak.body_color.x > peak.body_color.z);

    for p in [at_zero, peak] {
        assert_eq!(p.body_color, hsl_to_rgb(p.hue, 0.7, 0.5));
        assert_eq!(p.lid_color, hsl_to_rgb(p.hue, 0.6, 0.4));
        // the lid is the darker of the two materials
        assert!(p.lid_color.max_element() < p.body_color.max_element());
    }
}

#[test]
fn hsl_primary_and_gray_values() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red - Vec3::new(1.0, 0.0, 0.0)).abs().max_element() < 1e-6);
    let gray = hsl_to_rgb(0.3, 0.0, 0.25);
    assert_eq!(gray, Vec3::splat(0.25));
    assert!((hex_to_linear(0xffffff) - Vec3::ONE).abs().max_element() < 1e-6);
    assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
}

#[test]
fn zoom_moves_the_camera_back() {
    let near = Camera::orbit(ZOOM_MIN, 800, 600);
    let far = Camera::orbit(ZOOM_MAX, 800, 600);
    assert_eq!(near.eye, Vec3::new(0.0, 0.0, ZOOM_MIN));
    assert!(far.eye.z > near.eye.z);
    assert!((near.aspect - 800.0 / 600.0).abs() < 1e-6);

    // the origin projects to the center of the screen
    let clip = near.view_proj() * Vec3::ZERO.extend(1.0);
    assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
}

#[test]
fn shadow_projection_keeps_the_box_in_view() {
    let m = light_view_proj(
        Vec3::from(SUN_POSITION),
        SHADOW_HALF_EXTENT,
        SHADOW_NEAR,
        SHADOW_FAR,
    );
    for p in [Vec3::ZERO, Vec3::new(2.0, 1.5, 2.0), Vec3::new(-2.0, -1.5, -2.0)] {
        let ndc = (m * p.extend(1.0)).xyz();
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
