//! Scene graph for the box: five fixed groups and one mesh slot per panel.
//!
//! The assembler exclusively owns the live geometry. Every `apply` releases a
//! slot's previous geometry through the backend before the replacement is
//! allocated, so the live count never exceeds `PanelKind::COUNT`.

use super::dimensions::Dimensions;
use super::geometry::{build, pivots, GroupId, MaterialKind, PanelDescriptor, PanelKind};
use glam::{EulerRot, Mat4, Vec3};
use smallvec::SmallVec;

/// Rendering capability that creates and releases panel geometry.
pub trait GeometryBackend {
    type Geometry;

    fn create_box(&mut self, kind: PanelKind, size: Vec3) -> Self::Geometry;

    /// Release GPU-backed storage. Takes ownership so a disposed handle
    /// cannot be reused.
    fn dispose(&mut self, geometry: Self::Geometry);
}

#[derive(Clone, Debug)]
pub struct Group {
    pub position: Vec3,
    /// XYZ euler rotation in radians.
    pub rotation: Vec3,
    pub children: SmallVec<[PanelKind; 5]>,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            children: SmallVec::new(),
        }
    }
}

impl Group {
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    fn attach(&mut self, kind: PanelKind) {
        if !self.children.contains(&kind) {
            self.children.push(kind);
        }
    }

    fn detach(&mut self, kind: PanelKind) {
        self.children.retain(|k| *k != kind);
    }
}

pub struct MeshSlot<G> {
    pub geometry: G,
    pub descriptor: PanelDescriptor,
}

pub struct SceneAssembler<G> {
    groups: [Group; GroupId::COUNT],
    slots: [Option<MeshSlot<G>>; PanelKind::COUNT],
}

impl<G> Default for SceneAssembler<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SceneAssembler<G> {
    pub fn new() -> Self {
        Self {
            groups: Default::default(),
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Replace every panel mesh with one built from `descriptors`.
    pub fn apply<B>(&mut self, backend: &mut B, descriptors: &[PanelDescriptor])
    where
        B: GeometryBackend<Geometry = G>,
    {
        for desc in descriptors {
            let parent = desc.kind.parent();
            if let Some(old) = self.slots[desc.kind.index()].take() {
                self.groups[old.descriptor.kind.parent().index()].detach(old.descriptor.kind);
                backend.dispose(old.geometry);
            }
            let geometry = backend.create_box(desc.kind, desc.size);
            self.slots[desc.kind.index()] = Some(MeshSlot {
                geometry,
                descriptor: *desc,
            });
            self.groups[parent.index()].attach(desc.kind);
        }
    }

    /// Rebuild panels and re-anchor pivots for new dimensions.
    pub fn rebuild<B>(&mut self, backend: &mut B, dims: &Dimensions)
    where
        B: GeometryBackend<Geometry = G>,
    {
        for pivot in pivots(dims) {
            let g = &mut self.groups[pivot.group.index()];
            g.position = pivot.position;
            g.rotation = pivot.rest_rotation;
        }
        self.apply(backend, &build(dims));
    }

    /// Release everything. The assembler is empty afterwards.
    pub fn clear<B>(&mut self, backend: &mut B)
    where
        B: GeometryBackend<Geometry = G>,
    {
        for slot in self.slots.iter_mut() {
            if let Some(old) = slot.take() {
                self.groups[old.descriptor.kind.parent().index()].detach(old.descriptor.kind);
                backend.dispose(old.geometry);
            }
        }
    }

    pub fn set_root_rotation(&mut self, x: f32, y: f32) {
        self.groups[GroupId::Root.index()].rotation = Vec3::new(x, y, 0.0);
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }

    pub fn slot(&self, kind: PanelKind) -> Option<&MeshSlot<G>> {
        self.slots[kind.index()].as_ref()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// World transform of a group. Every non-root group hangs from `Root`.
    pub fn group_world(&self, id: GroupId) -> Mat4 {
        let root = self.groups[GroupId::Root.index()].local_matrix();
        match id {
            GroupId::Root => root,
            _ => root * self.groups[id.index()].local_matrix(),
        }
    }

    /// Live meshes with their world matrices and materials.
    pub fn meshes(&self) -> impl Iterator<Item = (&G, Mat4, MaterialKind)> + '_ {
        self.slots.iter().flatten().map(move |slot| {
            let kind = slot.descriptor.kind;
            let model = self.group_world(kind.parent())
                * Mat4::from_translation(slot.descriptor.local_position);
            (&slot.geometry, model, kind.material())
        })
    }
}
