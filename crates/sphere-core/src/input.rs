//! Host-independent pointer representation.
//!
//! Mouse, touch and pointer events all reduce to [`PointerInput`] before the
//! simulation sees them, so the interaction logic has no notion of the DOM
//! event model.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Pointer left the surface; relaxes magnetic follow back to baseline.
    Leave,
}

/// A unified pointer event in CSS-pixel canvas coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerInput {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// Last raw position (CSS px).
    pub x: f32,
    pub y: f32,
    /// Last position normalized to [-1, 1] about the canvas center.
    pub norm: Vec2,
    /// Position recorded at pointer-down, for the tap/drag discriminator.
    pub start_x: f32,
    pub start_y: f32,
    /// Set once travel from the start position exceeds the tap threshold.
    pub moved: bool,
    /// Pointer is over the surface (drives magnetic follow while idle).
    pub hovering: bool,
}

impl PointerState {
    #[inline]
    pub fn travel_from_start(&self) -> f32 {
        let dx = self.x - self.start_x;
        let dy = self.y - self.start_y;
        (dx * dx + dy * dy).sqrt()
    }
}
