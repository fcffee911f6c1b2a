//! Owning controller for one box viewer session.
//!
//! Holds the dimension state, orbit/pointer state and the live scene. Every
//! dimension change rebuilds the 3D scene and the unfolded net together.

use crate::constants::{BODY_SL, LID_SL};
use crate::core::{
    animated_hue, hsl_to_rgb, Axis, Dimensions, GeometryBackend, SceneAssembler, SliderRange,
};
use crate::diagram::{self, Surface2d};
use crate::input::InteractionController;
use glam::Vec3;

/// Per-frame values handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub hue: f32,
    /// sRGB
    pub body_color: Vec3,
    /// sRGB
    pub lid_color: Vec3,
    pub zoom: f32,
}

pub struct BoxViewer<G> {
    dims: Dimensions,
    ranges: [SliderRange; 3],
    pub input: InteractionController,
    scene: SceneAssembler<G>,
    rebuilds: u64,
}

impl<G> BoxViewer<G> {
    pub fn new(dims: Dimensions, ranges: [SliderRange; 3]) -> Self {
        let mut clamped = dims;
        for axis in Axis::ALL {
            clamped = clamped.with(axis, ranges[axis as usize].clamp(dims.get(axis)));
        }
        Self {
            dims: clamped,
            ranges,
            input: InteractionController::default(),
            scene: SceneAssembler::new(),
            rebuilds: 0,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn range(&self, axis: Axis) -> SliderRange {
        self.ranges[axis as usize]
    }

    pub fn scene(&self) -> &SceneAssembler<G> {
        &self.scene
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Apply a slider value to one axis and rebuild both views. Returns the
    /// value actually stored after clamping.
    pub fn set_dimension<B, S>(
        &mut self,
        axis: Axis,
        value: f32,
        backend: &mut B,
        surface: &mut S,
        net_size: (f64, f64),
    ) -> f32
    where
        B: GeometryBackend<Geometry = G>,
        S: Surface2d + ?Sized,
    {
        let v = self.ranges[axis as usize].clamp(value);
        self.dims = self.dims.with(axis, v);
        self.rebuild(backend, surface, net_size);
        v
    }

    /// Rebuild the 3D panels and repaint the net from the current dimensions.
    pub fn rebuild<B, S>(&mut self, backend: &mut B, surface: &mut S, net_size: (f64, f64))
    where
        B: GeometryBackend<Geometry = G>,
        S: Surface2d + ?Sized,
    {
        self.scene.rebuild(backend, &self.dims);
        diagram::draw(surface, &self.dims, net_size.0, net_size.1);
        self.rebuilds += 1;
        log::debug!(
            "[rebuild] #{} w={:.2} h={:.2} d={:.2} live={}",
            self.rebuilds,
            self.dims.width,
            self.dims.height,
            self.dims.depth,
            self.scene.live_count()
        );
    }

    /// Repaint only the net, e.g. after the 2D canvas was resized.
    pub fn redraw_net<S: Surface2d + ?Sized>(&self, surface: &mut S, net_size: (f64, f64)) {
        diagram::draw(surface, &self.dims, net_size.0, net_size.1);
    }

    /// Advance orbit easing and idle spin, push the rotation into the scene
    /// and compute the animated material colors.
    pub fn frame(&mut self, elapsed_sec: f32) -> FrameParams {
        self.input.step();
        let cur = self.input.orbit.current;
        self.scene.set_root_rotation(cur.x, cur.y);
        let hue = animated_hue(elapsed_sec);
        FrameParams {
            hue,
            body_color: hsl_to_rgb(hue, BODY_SL[0], BODY_SL[1]),
            lid_color: hsl_to_rgb(hue, LID_SL[0], LID_SL[1]),
            zoom: self.input.orbit.zoom,
        }
    }

    /// Release all scene geometry.
    pub fn teardown<B: GeometryBackend<Geometry = G>>(&mut self, backend: &mut B) {
        self.scene.clear(backend);
    }
}
