//! Golden-angle (Fibonacci) point distribution on the unit sphere.
//!
//! Deterministic by construction: the same `n` always yields the same point
//! sequence, which keeps sphere slots aligned with sprite indices and lets
//! the static fallback grid mirror the animated layout.

use glam::Vec3;

#[inline]
pub fn golden_angle() -> f32 {
    std::f32::consts::PI * (5.0f32.sqrt() - 1.0)
}

/// Point `i` of an `n`-point distribution.
///
/// Bands run from the north pole (`i = 0`) to the south pole; `n = 1` is a
/// single point at the origin by convention.
pub fn sphere_point(i: usize, n: usize) -> Vec3 {
    if n <= 1 {
        return Vec3::ZERO;
    }
    let y = 1.0 - (i as f32 / (n as f32 - 1.0)) * 2.0;
    let radius = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle() * i as f32;
    Vec3::new(theta.cos() * radius, y, theta.sin() * radius)
}

pub fn sphere_points(n: usize) -> Vec<Vec3> {
    (0..n).map(|i| sphere_point(i, n)).collect()
}
