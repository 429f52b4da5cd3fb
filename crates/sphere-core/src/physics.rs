//! Rotation physics: idle drift with magnetic follow, direct drag, and
//! geometric inertia decay.

use crate::config::SphereConfig;
use crate::input::PointerState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Drag,
    Inertia,
}

/// Rotation angles and angular velocity. Angles are unbounded and advance
/// every frame regardless of mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhysicsState {
    pub rot_x: f32,
    pub rot_y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub mode: Mode,
}

impl PhysicsState {
    pub fn begin_drag(&mut self) {
        self.mode = Mode::Drag;
    }

    /// Feed one frame-to-frame pointer delta while dragging. Horizontal
    /// movement drives yaw, vertical movement drives pitch; no easing.
    pub fn drag_by(&mut self, dx: f32, dy: f32, cfg: &SphereConfig) {
        let max = cfg.max_velocity;
        self.vel_y = (dx * cfg.drag_sensitivity).clamp(-max, max);
        self.vel_x = (dy * cfg.drag_sensitivity).clamp(-max, max);
    }

    /// End a drag, carrying the last drag velocity into inertia.
    pub fn release(&mut self) {
        self.mode = Mode::Inertia;
    }

    /// End a tap: no travel happened, so there is no momentum to spend.
    pub fn settle(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Advance one frame. Pointer state is only read for the idle
    /// magnetic-follow target; drag velocity is pushed in via [`drag_by`].
    ///
    /// [`drag_by`]: PhysicsState::drag_by
    pub fn step(&mut self, pointer: &PointerState, cfg: &SphereConfig) {
        match self.mode {
            Mode::Idle => {
                let max = cfg.max_velocity;
                let mut target_x = cfg.base_spin_x;
                let mut target_y = cfg.base_spin_y;
                if pointer.hovering {
                    target_y += (pointer.norm.x * cfg.follow_sensitivity).clamp(-max, max);
                    target_x += (pointer.norm.y * cfg.follow_sensitivity).clamp(-max, max);
                }
                self.vel_x += (target_x - self.vel_x) * cfg.follow_ease;
                self.vel_y += (target_y - self.vel_y) * cfg.follow_ease;
            }
            Mode::Drag => {}
            Mode::Inertia => {
                self.vel_x *= cfg.friction;
                self.vel_y *= cfg.friction;
                if self.vel_x.abs() + self.vel_y.abs() < cfg.stop_threshold {
                    self.mode = Mode::Idle;
                }
            }
        }
        self.rot_x += self.vel_x;
        self.rot_y += self.vel_y;
    }
}
