// Host-side tests for the scene assembler's resource discipline and
// transforms.

mod common;

use boxfold_web::core::*;
use common::CountingBackend;
use glam::{Vec3, Vec4Swizzles};

#[test]
fn first_rebuild_allocates_one_geometry_per_panel() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    scene.rebuild(&mut backend, &Dimensions::default());

    assert_eq!(scene.live_count(), PanelKind::COUNT);
    assert_eq!(backend.live.len(), PanelKind::COUNT);
    assert!(backend.disposed.is_empty());
}

#[test]
fn repeated_rebuilds_never_leak() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    let mut dims = Dimensions::default();
    for i in 0..50 {
        dims = dims.with(Axis::ALL[i % 3], 0.5 + (i as f32) * 0.07);
        scene.rebuild(&mut backend, &dims);
        assert_eq!(backend.live.len(), PanelKind::COUNT);
        assert_eq!(scene.live_count(), PanelKind::COUNT);
    }
    assert_eq!(backend.created, 50 * PanelKind::COUNT as u32);
    assert_eq!(backend.disposed.len(), 49 * PanelKind::COUNT);
}

#[test]
fn slots_hold_the_latest_geometry() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    scene.rebuild(&mut backend, &Dimensions::default());
    let first_ids: Vec<u32> = PanelKind::ALL
        .iter()
        .map(|k| scene.slot(*k).expect("slot").geometry.id)
        .collect();

    let dims = Dimensions::new(3.0, 1.0, 1.5);
    scene.rebuild(&mut backend, &dims);
    for (kind, old) in PanelKind::ALL.iter().zip(first_ids) {
        let slot = scene.slot(*kind).expect("slot");
        assert_ne!(slot.geometry.id, old);
        assert!(backend.disposed.contains(&old));
        assert_eq!(slot.geometry.kind, *kind);
        assert_eq!(slot.descriptor, build(&dims)[kind.index()]);
        assert_eq!(slot.geometry.size, slot.descriptor.size);
    }
}

#[test]
fn meshes_are_attached_to_their_parent_groups_once() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    for _ in 0..3 {
        scene.rebuild(&mut backend, &Dimensions::default());
    }
    let body = scene.group(GroupId::Body);
    assert_eq!(body.children.len(), 5);
    for kind in [
        PanelKind::Floor,
        PanelKind::Front,
        PanelKind::Back,
        PanelKind::Left,
        PanelKind::Right,
    ] {
        assert!(body.children.contains(&kind));
    }
    assert_eq!(scene.group(GroupId::LidPivot).children.as_slice(), &[PanelKind::Lid]);
    assert_eq!(
        scene.group(GroupId::FlapLeftPivot).children.as_slice(),
        &[PanelKind::FlapLeft]
    );
    assert_eq!(
        scene.group(GroupId::FlapRightPivot).children.as_slice(),
        &[PanelKind::FlapRight]
    );
    assert!(scene.group(GroupId::Root).children.is_empty());
}

#[test]
fn clear_releases_everything() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    scene.rebuild(&mut backend, &Dimensions::default());
    scene.clear(&mut backend);
    assert_eq!(scene.live_count(), 0);
    assert!(backend.live.is_empty());
    assert!(scene.group(GroupId::Body).children.is_empty());
}

#[test]
fn pivots_follow_dimensions_with_fixed_rotation() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    scene.rebuild(&mut backend, &Dimensions::new(2.0, 2.0, 4.0));
    let lid = scene.group(GroupId::LidPivot);
    assert_eq!(lid.position, Vec3::new(0.0, 1.0, -2.0));
    assert!((lid.rotation.x + 70.0_f32.to_radians()).abs() < 1e-6);

    scene.rebuild(&mut backend, &Dimensions::new(2.0, 3.0, 1.0));
    let lid = scene.group(GroupId::LidPivot);
    assert_eq!(lid.position, Vec3::new(0.0, 1.5, -0.5));
    assert!((lid.rotation.x + 70.0_f32.to_radians()).abs() < 1e-6);
}

#[test]
fn open_lid_tilts_up_from_the_back_edge() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    let dims = Dimensions::default();
    scene.rebuild(&mut backend, &dims);

    let (_, model, material) = scene
        .meshes()
        .find(|(g, _, _)| g.kind == PanelKind::Lid)
        .expect("lid mesh");
    assert_eq!(material, MaterialKind::Lid);
    let center = (model * Vec3::ZERO.extend(1.0)).xyz();
    // hinge at the top of the box, lid center above it and forward of the back wall
    assert!(center.y > dims.height / 2.0);
    assert!(center.z > -dims.depth / 2.0);
}

#[test]
fn open_flaps_lean_away_from_their_walls() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    for dims in [Dimensions::default(), Dimensions::new(0.8, 3.0, 1.0)] {
        scene.rebuild(&mut backend, &dims);
        let half_w = dims.width / 2.0;
        let top = dims.height / 2.0;
        let center = |kind| {
            let (_, model, _) = scene
                .meshes()
                .find(|(g, _, _)| g.kind == kind)
                .expect("flap mesh");
            (model * Vec3::ZERO.extend(1.0)).xyz()
        };

        let left = center(PanelKind::FlapLeft);
        let right = center(PanelKind::FlapRight);
        assert!(left.x < -half_w, "left flap leans over the box: {:?}", left);
        assert!(right.x > half_w, "right flap leans over the box: {:?}", right);
        assert!(left.y > top && right.y > top);
        // mirror images across the YZ plane
        assert!((left.x + right.x).abs() < 1e-5);
        assert!((left.y - right.y).abs() < 1e-5);

        // 45 degrees: the center is as far out as it is up
        let out = -half_w - left.x;
        let up = left.y - top;
        assert!((out - up).abs() < 1e-5);
    }
}

#[test]
fn root_rotation_turns_every_mesh() {
    let mut backend = CountingBackend::default();
    let mut scene = SceneAssembler::new();
    scene.rebuild(&mut backend, &Dimensions::default());
    scene.set_root_rotation(0.0, std::f32::consts::FRAC_PI_2);

    let (_, model, _) = scene
        .meshes()
        .find(|(g, _, _)| g.kind == PanelKind::Front)
        .expect("front mesh");
    let center = (model * Vec3::ZERO.extend(1.0)).xyz();
    // a quarter turn about Y carries +Z onto +X
    assert!((center.x - 1.0).abs() < 1e-5);
    assert!(center.z.abs() < 1e-5);
}
