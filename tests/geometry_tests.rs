// Host-side tests for dimension state and the panel builder.

use boxfold_web::core::constants::WALL_THICKNESS;
use boxfold_web::core::*;
use glam::Vec3;

const EPS: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn approx_v(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPS
}

fn sample_dimensions() -> Vec<Dimensions> {
    let mut out = Vec::new();
    for w in [0.5_f32, 1.0, 2.0, 3.3, 4.0] {
        for h in [0.5_f32, 1.8, 2.7, 3.0] {
            for d in [0.5_f32, 1.2, 2.0, 4.0] {
                out.push(Dimensions::new(w, h, d));
            }
        }
    }
    out
}

fn find(panels: &[PanelDescriptor], kind: PanelKind) -> PanelDescriptor {
    *panels.iter().find(|p| p.kind == kind).expect("panel present")
}

#[test]
fn build_returns_eight_distinct_panels_with_positive_sizes() {
    for dims in sample_dimensions() {
        let panels = build(&dims);
        assert_eq!(panels.len(), 8);
        for kind in PanelKind::ALL {
            assert_eq!(panels.iter().filter(|p| p.kind == kind).count(), 1);
        }
        for p in &panels {
            assert!(
                p.size.min_element() > 0.0,
                "{:?} has non-positive size {:?} for {:?}",
                p.kind,
                p.size,
                dims
            );
        }
    }
}

#[test]
fn build_is_idempotent() {
    for dims in sample_dimensions() {
        assert_eq!(build(&dims), build(&dims));
        assert_eq!(pivots(&dims), pivots(&dims));
    }
}

#[test]
fn flaps_follow_depth_and_height() {
    for dims in sample_dimensions() {
        let panels = build(&dims);
        for kind in [PanelKind::FlapLeft, PanelKind::FlapRight] {
            let flap = find(&panels, kind);
            assert!(approx(flap.size.z, dims.depth / 2.0));
            assert!(approx(flap.size.y, dims.height * 0.3));
            assert!(approx(dims.flap_width(), dims.depth / 2.0));
            assert!(approx(dims.flap_height(), dims.height * 0.3));
        }
    }
}

#[test]
fn default_box_matches_design_sizes() {
    let dims = Dimensions::default();
    assert_eq!(dims, Dimensions::new(2.0, 1.8, 2.0));
    let panels = build(&dims);

    let floor = find(&panels, PanelKind::Floor);
    assert!(approx_v(floor.size, Vec3::new(2.0, WALL_THICKNESS, 2.0)));
    assert!(approx(floor.local_position.y, -0.9));

    let lid = find(&panels, PanelKind::Lid);
    assert!(approx_v(lid.size, Vec3::new(2.1, 0.09, 2.1)));

    let lid_pivot = pivots(&dims)[0];
    assert_eq!(lid_pivot.group, GroupId::LidPivot);
    assert!(approx(lid_pivot.rest_rotation.x, -70.0_f32.to_radians()));
    assert!(approx(lid_pivot.rest_rotation.y, 0.0));
}

#[test]
fn walls_sit_on_the_box_faces() {
    let dims = Dimensions::new(3.0, 1.5, 2.5);
    let panels = build(&dims);

    let front = find(&panels, PanelKind::Front);
    let back = find(&panels, PanelKind::Back);
    assert!(approx(front.local_position.z, 1.25));
    assert!(approx(back.local_position.z, -1.25));
    assert!(approx_v(front.size, Vec3::new(3.0, 1.5, WALL_THICKNESS)));

    let left = find(&panels, PanelKind::Left);
    let right = find(&panels, PanelKind::Right);
    assert!(approx(left.local_position.x, -1.5));
    assert!(approx(right.local_position.x, 1.5));
    assert!(approx_v(left.size, Vec3::new(WALL_THICKNESS, 1.5, 2.5)));
}

#[test]
fn pivots_anchor_on_top_edges_with_fixed_angles() {
    let dims = Dimensions::new(3.0, 1.5, 2.5);
    let [lid, flap_l, flap_r] = pivots(&dims);

    assert!(approx_v(lid.position, Vec3::new(0.0, 0.75, -1.25)));
    assert!(approx_v(flap_l.position, Vec3::new(-1.5, 0.75, 0.0)));
    assert!(approx_v(flap_r.position, Vec3::new(1.5, 0.75, 0.0)));

    // angles do not depend on size
    let other = pivots(&Dimensions::new(0.7, 2.9, 3.1));
    assert_eq!(lid.rest_rotation, other[0].rest_rotation);
    assert_eq!(flap_l.rest_rotation, other[1].rest_rotation);
    assert!(approx(flap_l.rest_rotation.z, 45.0_f32.to_radians()));
    assert!(approx(flap_r.rest_rotation.z, -45.0_f32.to_radians()));
}

#[test]
fn panels_hang_from_the_right_groups() {
    assert_eq!(PanelKind::Floor.parent(), GroupId::Body);
    assert_eq!(PanelKind::Right.parent(), GroupId::Body);
    assert_eq!(PanelKind::Lid.parent(), GroupId::LidPivot);
    assert_eq!(PanelKind::FlapLeft.parent(), GroupId::FlapLeftPivot);
    assert_eq!(PanelKind::FlapRight.parent(), GroupId::FlapRightPivot);
    assert_eq!(PanelKind::Lid.material(), MaterialKind::Lid);
    assert_eq!(PanelKind::FlapLeft.material(), MaterialKind::Body);
}

#[test]
fn with_replaces_one_axis_only() {
    let dims = Dimensions::default().with(Axis::Height, 2.5);
    assert_eq!(dims, Dimensions::new(2.0, 2.5, 2.0));
    assert!(approx(dims.floor_y(), -1.25));
    assert!(approx(dims.lid_thickness(), 0.125));
}

#[test]
fn slider_range_clamps_and_falls_back() {
    let r = SliderRange::from_bounds(Axis::Width, Some(1.0), Some(3.0));
    assert_eq!(r.clamp(0.2), 1.0);
    assert_eq!(r.clamp(9.0), 3.0);
    assert_eq!(r.clamp(2.2), 2.2);
    assert_eq!(r.clamp(f32::NAN), 1.0);

    let fallback = SliderRange::from_bounds(Axis::Height, None, Some(f32::NAN));
    assert_eq!(fallback, Axis::Height.default_range());

    // a non-positive minimum is not a usable box size
    let r = SliderRange::from_bounds(Axis::Depth, Some(-1.0), None);
    assert_eq!(r.min, Axis::Depth.default_range().min);
}

#[test]
fn box_mesh_has_outward_face_normals() {
    let mesh = box_mesh(Vec3::new(2.0, 0.5, 1.0));
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        // each vertex lies on the face its normal points out of
        assert!(p.dot(n) > 0.0);
        assert!(approx(p.abs().dot(n.abs()), (Vec3::new(1.0, 0.25, 0.5) * n.abs()).element_sum()));
    }
    // triangles wind counter-clockwise seen from outside
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
        let n = Vec3::from(mesh.vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}
