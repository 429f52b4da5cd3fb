//! The display-independent simulation: physics, pointer state and the node
//! arena behind one seam.
//!
//! `SphereSim` never schedules anything. The web frontend drives it from a
//! requestAnimationFrame loop; tests drive it by calling [`advance_frame`]
//! in a plain loop. That keeps every frame-level behavior testable without
//! a canvas and portable to other rendering backends.
//!
//! [`advance_frame`]: SphereSim::advance_frame

use crate::config::SphereConfig;
use crate::geometry::sphere_points;
use crate::input::{PointerInput, PointerKind, PointerState};
use crate::physics::{Mode, PhysicsState};
use crate::projection::{NodeArena, Viewport};

/// Result of feeding a pointer event: a tap resolved to a node slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tap {
    pub node_index: usize,
}

pub struct SphereSim {
    cfg: SphereConfig,
    physics: PhysicsState,
    pointer: PointerState,
    arena: NodeArena,
    viewport: Viewport,
}

impl SphereSim {
    /// Build a sim for `item_count` nodes over a CSS-pixel surface.
    pub fn new(item_count: usize, css_width: f32, css_height: f32, cfg: SphereConfig) -> Self {
        let viewport = Viewport::new(css_width, css_height, &cfg);
        let mut sim = Self {
            arena: NodeArena::from_points(&sphere_points(item_count)),
            physics: PhysicsState::default(),
            pointer: PointerState::default(),
            viewport,
            cfg,
        };
        // Project once so hit-testing is valid before the first frame
        sim.arena
            .project(0.0, 0.0, &sim.viewport, &sim.cfg);
        sim
    }

    /// Recompute center and radius for a new surface size. Rotation and
    /// velocity are deliberately untouched, so a resize never causes a jump.
    pub fn resize(&mut self, css_width: f32, css_height: f32) {
        self.viewport = Viewport::new(css_width, css_height, &self.cfg);
    }

    /// Feed one unified pointer event. Returns a tap when an up event lands
    /// within the tap threshold on a node.
    pub fn pointer(&mut self, input: PointerInput) -> Option<Tap> {
        if !input.is_finite() {
            log::warn!("[sphere] ignoring non-finite pointer event");
            return None;
        }
        match input.kind {
            PointerKind::Down => {
                self.pointer.start_x = input.x;
                self.pointer.start_y = input.y;
                self.pointer.moved = false;
                self.pointer.hovering = true;
                self.track(input.x, input.y);
                self.physics.begin_drag();
                None
            }
            PointerKind::Move => {
                let dx = input.x - self.pointer.x;
                let dy = input.y - self.pointer.y;
                self.pointer.hovering = true;
                self.track(input.x, input.y);
                if self.physics.mode == Mode::Drag {
                    self.physics.drag_by(dx, dy, &self.cfg);
                    if !self.pointer.moved
                        && self.pointer.travel_from_start() > self.cfg.tap_threshold_px
                    {
                        self.pointer.moved = true;
                    }
                }
                None
            }
            PointerKind::Up => {
                self.track(input.x, input.y);
                if self.physics.mode != Mode::Drag {
                    return None;
                }
                if self.pointer.moved {
                    self.physics.release();
                    None
                } else {
                    self.physics.settle();
                    self.arena
                        .hit_test(input.x, input.y)
                        .map(|node_index| Tap { node_index })
                }
            }
            PointerKind::Cancel => {
                self.pointer.hovering = false;
                if self.physics.mode == Mode::Drag {
                    self.physics.release();
                }
                None
            }
            PointerKind::Leave => {
                self.pointer.hovering = false;
                None
            }
        }
    }

    /// Advance physics one frame and reproject every node.
    pub fn advance_frame(&mut self) {
        self.physics.step(&self.pointer, &self.cfg);
        self.arena
            .project(self.physics.rot_x, self.physics.rot_y, &self.viewport, &self.cfg);
    }

    #[inline]
    fn track(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
        self.pointer.norm = self.viewport.normalize(x, y);
    }

    #[inline]
    pub fn nodes(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.cfg
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.physics.mode
    }

    #[inline]
    pub fn rotation(&self) -> (f32, f32) {
        (self.physics.rot_x, self.physics.rot_y)
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.physics.vel_x, self.physics.vel_y)
    }

    #[inline]
    pub fn dragging(&self) -> bool {
        self.physics.mode == Mode::Drag
    }
}
