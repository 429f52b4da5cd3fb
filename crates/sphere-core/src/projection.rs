//! Per-frame projection and depth pipeline.
//!
//! Node fields live in flat parallel columns rather than per-node objects;
//! the frame loop rewrites them in place and re-sorts a reusable index
//! buffer, so steady-state frames allocate nothing.

use crate::config::SphereConfig;
use glam::Vec3;
use smallvec::SmallVec;

/// Canvas-derived projection frame: CSS-pixel dimensions, center and sphere
/// radius. Recomputed on resize; rotation state is untouched by that.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, cfg: &SphereConfig) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            center_x: width * 0.5,
            center_y: height * 0.5,
            radius: width.min(height) * 0.5 * cfg.radius_ratio,
        }
    }

    /// Normalize a CSS-pixel position to [-1, 1] about the canvas center.
    #[inline]
    pub fn normalize(&self, x: f32, y: f32) -> glam::Vec2 {
        let hx = (self.width * 0.5).max(1.0);
        let hy = (self.height * 0.5).max(1.0);
        glam::Vec2::new(
            ((x - self.center_x) / hx).clamp(-1.0, 1.0),
            ((y - self.center_y) / hy).clamp(-1.0, 1.0),
        )
    }
}

/// Struct-of-arrays node storage for the hot per-frame loop.
pub struct NodeArena {
    base_x: Vec<f32>,
    base_y: Vec<f32>,
    base_z: Vec<f32>,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub sx: Vec<f32>,
    pub sy: Vec<f32>,
    pub scale: Vec<f32>,
    pub alpha: Vec<f32>,
    pub draw_size: Vec<f32>,
    order: Vec<usize>,
}

impl NodeArena {
    pub fn from_points(points: &[Vec3]) -> Self {
        let n = points.len();
        Self {
            base_x: points.iter().map(|p| p.x).collect(),
            base_y: points.iter().map(|p| p.y).collect(),
            base_z: points.iter().map(|p| p.z).collect(),
            x: vec![0.0; n],
            y: vec![0.0; n],
            z: vec![0.0; n],
            sx: vec![0.0; n],
            sy: vec![0.0; n],
            scale: vec![0.0; n],
            alpha: vec![0.0; n],
            draw_size: vec![0.0; n],
            order: (0..n).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.base_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base_x.is_empty()
    }

    /// Rotate, perspective-project and depth-shade every node, then rebuild
    /// the painter's draw order (ascending z, farthest first).
    pub fn project(&mut self, rot_x: f32, rot_y: f32, vp: &Viewport, cfg: &SphereConfig) {
        let (sin_x, cos_x) = rot_x.sin_cos();
        let (sin_y, cos_y) = rot_y.sin_cos();
        let r = vp.radius.max(1.0);
        let perspective = cfg.perspective_ratio * r;

        for i in 0..self.len() {
            let bx = self.base_x[i];
            let by = self.base_y[i];
            let bz = self.base_z[i];

            // X-axis rotation, then Y-axis rotation
            let y1 = by * cos_x - bz * sin_x;
            let z1 = by * sin_x + bz * cos_x;
            let x2 = bx * cos_y + z1 * sin_y;
            let z2 = -bx * sin_y + z1 * cos_y;

            let x = x2 * r;
            let y = y1 * r;
            let z = z2 * r;

            let scale = perspective / (perspective - z);
            let depth = ((z / r) + 1.0) * 0.5;
            let depth = depth.clamp(0.0, 1.0);

            self.x[i] = x;
            self.y[i] = y;
            self.z[i] = z;
            self.sx[i] = x * scale + vp.center_x;
            self.sy[i] = y * scale + vp.center_y;
            self.scale[i] = scale;
            self.alpha[i] = cfg.alpha_min + (cfg.alpha_max - cfg.alpha_min) * depth;
            self.draw_size[i] = cfg.base_draw_size * scale;
        }

        let z = &self.z;
        self.order
            .sort_unstable_by(|&a, &b| z[a].partial_cmp(&z[b]).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Back-to-front node indices from the last [`project`] call.
    ///
    /// [`project`]: NodeArena::project
    #[inline]
    pub fn draw_order(&self) -> &[usize] {
        &self.order
    }

    /// True when the node's projected bounding box lies fully outside the
    /// viewport and can be skipped by the renderer.
    #[inline]
    pub fn is_offscreen(&self, i: usize, vp: &Viewport) -> bool {
        let half = self.draw_size[i] * 0.5;
        self.sx[i] + half < 0.0
            || self.sx[i] - half > vp.width
            || self.sy[i] + half < 0.0
            || self.sy[i] - half > vp.height
    }

    /// Hit-test a CSS-pixel point against the last projected frame.
    ///
    /// Each node is a circle of radius `draw_size / 2`; among overlapping
    /// matches the greatest z wins, matching the order the renderer draws.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        let mut hits: SmallVec<[usize; 4]> = SmallVec::new();
        for i in 0..self.len() {
            let dx = px - self.sx[i];
            let dy = py - self.sy[i];
            let radius = self.draw_size[i] * 0.5;
            if dx * dx + dy * dy <= radius * radius {
                hits.push(i);
            }
        }
        hits.into_iter()
            .max_by(|&a, &b| self.z[a].partial_cmp(&self.z[b]).unwrap_or(std::cmp::Ordering::Equal))
    }
}
