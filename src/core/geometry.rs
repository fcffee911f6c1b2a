//! Panel layout for the folding box.
//!
//! `build` is pure: it turns a `Dimensions` into eight panel descriptors and
//! owns nothing afterwards. GPU resources are created from the descriptors by
//! the scene assembler.

use super::constants::{FLAP_OPEN_DEG, LID_OPEN_DEG};
use super::dimensions::Dimensions;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Floor,
    Front,
    Back,
    Left,
    Right,
    Lid,
    FlapLeft,
    FlapRight,
}

impl PanelKind {
    pub const COUNT: usize = 8;
    pub const ALL: [PanelKind; PanelKind::COUNT] = [
        PanelKind::Floor,
        PanelKind::Front,
        PanelKind::Back,
        PanelKind::Left,
        PanelKind::Right,
        PanelKind::Lid,
        PanelKind::FlapLeft,
        PanelKind::FlapRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Group the panel's mesh hangs from.
    pub fn parent(self) -> GroupId {
        match self {
            PanelKind::Lid => GroupId::LidPivot,
            PanelKind::FlapLeft => GroupId::FlapLeftPivot,
            PanelKind::FlapRight => GroupId::FlapRightPivot,
            _ => GroupId::Body,
        }
    }

    pub fn material(self) -> MaterialKind {
        match self {
            PanelKind::Lid => MaterialKind::Lid,
            _ => MaterialKind::Body,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Floor => "Floor",
            PanelKind::Front => "Front",
            PanelKind::Back => "Back",
            PanelKind::Left => "Left",
            PanelKind::Right => "Right",
            PanelKind::Lid => "Lid",
            PanelKind::FlapLeft => "Flap L",
            PanelKind::FlapRight => "Flap R",
        }
    }
}

/// Scene groups. `Root` carries the orbit rotation; everything else is a
/// child of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupId {
    Root,
    Body,
    LidPivot,
    FlapLeftPivot,
    FlapRightPivot,
}

impl GroupId {
    pub const COUNT: usize = 5;
    pub const ALL: [GroupId; GroupId::COUNT] = [
        GroupId::Root,
        GroupId::Body,
        GroupId::LidPivot,
        GroupId::FlapLeftPivot,
        GroupId::FlapRightPivot,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Body,
    Lid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDescriptor {
    pub kind: PanelKind,
    pub size: Vec3,
    /// Position relative to the parent group.
    pub local_position: Vec3,
}

/// Hinge anchor for the lid or a flap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pivot {
    pub group: GroupId,
    /// Position relative to the root group.
    pub position: Vec3,
    /// Fixed XYZ euler rest rotation in radians.
    pub rest_rotation: Vec3,
}

pub fn lid_rest_angle() -> f32 {
    -LID_OPEN_DEG.to_radians()
}

/// Z rotation that swings a flap away from its wall. Positive Z carries +Y
/// toward -X, so the left flap turns positive and the right flap negative.
pub fn flap_rest_angle(kind: PanelKind) -> f32 {
    match kind {
        PanelKind::FlapLeft => FLAP_OPEN_DEG.to_radians(),
        PanelKind::FlapRight => -FLAP_OPEN_DEG.to_radians(),
        _ => 0.0,
    }
}

/// Descriptors for all eight panels, in `PanelKind::ALL` order.
pub fn build(dims: &Dimensions) -> [PanelDescriptor; PanelKind::COUNT] {
    let (w, h, d) = (dims.width, dims.height, dims.depth);
    let t = dims.wall_thickness();
    let panel = |kind, size: Vec3, local_position: Vec3| PanelDescriptor {
        kind,
        size,
        local_position,
    };
    [
        panel(
            PanelKind::Floor,
            Vec3::new(w, t, d),
            Vec3::new(0.0, dims.floor_y(), 0.0),
        ),
        panel(
            PanelKind::Front,
            Vec3::new(w, h, t),
            Vec3::new(0.0, 0.0, d / 2.0),
        ),
        panel(
            PanelKind::Back,
            Vec3::new(w, h, t),
            Vec3::new(0.0, 0.0, -d / 2.0),
        ),
        panel(
            PanelKind::Left,
            Vec3::new(t, h, d),
            Vec3::new(-w / 2.0, 0.0, 0.0),
        ),
        panel(
            PanelKind::Right,
            Vec3::new(t, h, d),
            Vec3::new(w / 2.0, 0.0, 0.0),
        ),
        // Lid extends forward from the back-top hinge
        panel(
            PanelKind::Lid,
            Vec3::new(w * dims.lid_margin(), dims.lid_thickness(), d * dims.lid_margin()),
            Vec3::new(0.0, 0.0, d / 2.0),
        ),
        // Flaps stand up from the side-top hinges
        panel(
            PanelKind::FlapLeft,
            Vec3::new(t, dims.flap_height(), dims.flap_width()),
            Vec3::new(0.0, dims.flap_height() / 2.0, 0.0),
        ),
        panel(
            PanelKind::FlapRight,
            Vec3::new(t, dims.flap_height(), dims.flap_width()),
            Vec3::new(0.0, dims.flap_height() / 2.0, 0.0),
        ),
    ]
}

/// Hinge anchors for the lid and both flaps.
pub fn pivots(dims: &Dimensions) -> [Pivot; 3] {
    let top = dims.height / 2.0;
    [
        Pivot {
            group: GroupId::LidPivot,
            position: Vec3::new(0.0, top, -dims.depth / 2.0),
            rest_rotation: Vec3::new(lid_rest_angle(), 0.0, 0.0),
        },
        Pivot {
            group: GroupId::FlapLeftPivot,
            position: Vec3::new(-dims.width / 2.0, top, 0.0),
            rest_rotation: Vec3::new(0.0, 0.0, flap_rest_angle(PanelKind::FlapLeft)),
        },
        Pivot {
            group: GroupId::FlapRightPivot,
            position: Vec3::new(dims.width / 2.0, top, 0.0),
            rest_rotation: Vec3::new(0.0, 0.0, flap_rest_angle(PanelKind::FlapRight)),
        },
    ]
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Axis-aligned box centered on the origin: 24 vertices (4 per face so each
/// face gets its own normal) and 12 counter-clockwise triangles.
pub fn box_mesh(size: Vec3) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
        let base = mesh.vertices.len() as u16;
        for position in corners {
            mesh.vertices.push(Vertex { position, normal });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    // +X
    add_face(
        [[h.x, -h.y, h.z], [h.x, -h.y, -h.z], [h.x, h.y, -h.z], [h.x, h.y, h.z]],
        [1.0, 0.0, 0.0],
    );
    // -X
    add_face(
        [[-h.x, -h.y, -h.z], [-h.x, -h.y, h.z], [-h.x, h.y, h.z], [-h.x, h.y, -h.z]],
        [-1.0, 0.0, 0.0],
    );
    // +Y
    add_face(
        [[-h.x, h.y, h.z], [h.x, h.y, h.z], [h.x, h.y, -h.z], [-h.x, h.y, -h.z]],
        [0.0, 1.0, 0.0],
    );
    // -Y
    add_face(
        [[-h.x, -h.y, -h.z], [h.x, -h.y, -h.z], [h.x, -h.y, h.z], [-h.x, -h.y, h.z]],
        [0.0, -1.0, 0.0],
    );
    // +Z
    add_face(
        [[-h.x, -h.y, h.z], [h.x, -h.y, h.z], [h.x, h.y, h.z], [-h.x, h.y, h.z]],
        [0.0, 0.0, 1.0],
    );
    // -Z
    add_face(
        [[h.x, -h.y, -h.z], [-h.x, -h.y, -h.z], [-h.x, h.y, -h.z], [h.x, h.y, -h.z]],
        [0.0, 0.0, -1.0],
    );

    mesh
}

/// Horizontal quad facing +Y, used for the ground.
pub fn plane_mesh(width: f32, depth: f32) -> MeshData {
    let (hx, hz) = (width * 0.5, depth * 0.5);
    let normal = [0.0, 1.0, 0.0];
    MeshData {
        vertices: vec![
            Vertex { position: [-hx, 0.0, hz], normal },
            Vertex { position: [hx, 0.0, hz], normal },
            Vertex { position: [hx, 0.0, -hz], normal },
            Vertex { position: [-hx, 0.0, -hz], normal },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
