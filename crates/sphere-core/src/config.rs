//! Tuning configuration for the sphere's motion and projection.
//!
//! The original site shipped two copies of this widget with diverging magic
//! numbers. Everything feel-related is collected here instead, so there is a
//! single documented set of constants and the page layer can re-tune a field
//! without touching the frame loop.

/// All interaction and projection tuning in one place.
///
/// Angles are radians, velocities are radians per frame, pixel values are in
/// CSS pixels. `Default` is the shipped feel.
#[derive(Clone, Debug)]
pub struct SphereConfig {
    /// Ambient pitch applied while idle (rad/frame).
    pub base_spin_x: f32,
    /// Ambient yaw applied while idle (rad/frame).
    pub base_spin_y: f32,
    /// Per-frame lerp factor easing idle velocity toward its target.
    pub follow_ease: f32,
    /// Magnetic-follow strength: rad/frame per unit of normalized pointer
    /// deflection while hovering (not dragging).
    pub follow_sensitivity: f32,
    /// Drag strength: rad/frame per pixel of pointer movement.
    pub drag_sensitivity: f32,
    /// Clamp on either velocity component (rad/frame).
    pub max_velocity: f32,
    /// Geometric decay factor applied each frame during inertia.
    pub friction: f32,
    /// Inertia ends once `|vel_x| + |vel_y|` falls below this.
    pub stop_threshold: f32,
    /// Pointer travel (px) separating a tap from a drag.
    pub tap_threshold_px: f32,
    /// Perspective distance as a multiple of the sphere radius.
    pub perspective_ratio: f32,
    /// Sphere radius as a fraction of `min(width, height) / 2`.
    pub radius_ratio: f32,
    /// Opacity of the farthest node.
    pub alpha_min: f32,
    /// Opacity of the nearest node.
    pub alpha_max: f32,
    /// Icon size (px) at projection scale 1.0.
    pub base_draw_size: f32,
    /// Upper clamp on `devicePixelRatio` for the canvas backing store.
    pub dpr_max: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            base_spin_x: 0.0005,
            base_spin_y: 0.0018,
            follow_ease: 0.06,
            follow_sensitivity: 0.003,
            drag_sensitivity: 0.005,
            max_velocity: 0.05,
            friction: 0.965,
            stop_threshold: 1e-3,
            tap_threshold_px: 7.0,
            perspective_ratio: 3.0,
            radius_ratio: 0.82,
            alpha_min: 0.25,
            alpha_max: 1.0,
            base_draw_size: 36.0,
            dpr_max: 2.5,
        }
    }
}
