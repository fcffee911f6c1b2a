use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Up,
    Down,
}

/// Press/drag tracking. Deltas are taken against the last seen position, not
/// the press anchor.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub phase: PointerPhase,
    pub last: Vec2,
}

impl PointerState {
    #[inline]
    pub fn is_down(&self) -> bool {
        self.phase == PointerPhase::Down
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitState {
    pub current: Vec2,
    pub target: Vec2,
    pub zoom: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            zoom: ZOOM_DEFAULT,
        }
    }
}

/// Pointer and wheel input mapped onto the orbit targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    pub pointer: PointerState,
    pub orbit: OrbitState,
}

impl InteractionController {
    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer.phase = PointerPhase::Down;
        self.pointer.last = Vec2::new(x, y);
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        if !self.pointer.is_down() {
            return;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.pointer.last;
        // horizontal motion yaws (y axis), vertical motion pitches (x axis)
        self.orbit.target.y += delta.x * ROTATE_PER_PX;
        self.orbit.target.x += delta.y * ROTATE_PER_PX;
        self.pointer.last = pos;
    }

    pub fn release(&mut self) {
        self.pointer.phase = PointerPhase::Up;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.orbit.zoom = (self.orbit.zoom + delta_y * ZOOM_PER_WHEEL_UNIT).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// One frame of orbit motion: ease toward the target, then spin the
    /// target while idle.
    pub fn step(&mut self) {
        self.orbit.current += (self.orbit.target - self.orbit.current) * ORBIT_EASING;
        if !self.pointer.is_down() {
            self.orbit.target.y += AUTOROTATE_PER_FRAME;
        }
    }
}
