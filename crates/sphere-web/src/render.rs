//! Canvas 2D renderer: one sprite sheet, one pass, back-to-front.

use crate::constants::*;
use sphere_core::{atlas, NodeArena, SpriteSheetMeta, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-slot draw data that never changes after mount.
struct SlotStyle {
    sprite_index: usize,
    dimmed: bool,
}

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
    sprite: web::HtmlImageElement,
    sheet: SpriteSheetMeta,
    slots: Vec<SlotStyle>,
    css_width: f64,
    css_height: f64,
}

impl Renderer {
    /// Acquire the 2D context. `None` means the surface is unsupported and
    /// the caller must engage the fallback grid instead.
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        sprite: web::HtmlImageElement,
        sheet: SpriteSheetMeta,
        slots: impl Iterator<Item = (usize, bool)>,
    ) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            sprite,
            sheet,
            slots: slots
                .map(|(sprite_index, dimmed)| SlotStyle {
                    sprite_index,
                    dimmed,
                })
                .collect(),
            css_width: 0.0,
            css_height: 0.0,
        })
    }

    /// Apply the backing-store transform after a (re)size so all drawing
    /// happens in CSS-pixel units.
    pub fn set_surface(&mut self, css_width: f32, css_height: f32, dpr: f64) {
        self.css_width = css_width as f64;
        self.css_height = css_height as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    /// Draw one frame from the arena's last projection.
    pub fn draw(&self, nodes: &NodeArena, vp: &Viewport) {
        self.ctx.clear_rect(0.0, 0.0, self.css_width, self.css_height);
        self.draw_orbit_rings(vp);

        for &i in nodes.draw_order() {
            if nodes.is_offscreen(i, vp) {
                continue;
            }
            let slot = &self.slots[i];
            let tile = atlas::tile_for_index(slot.sprite_index, self.sheet.columns);
            let (sx, sy, sw, sh) = atlas::source_rect(tile, self.sheet.tile_size);
            let size = nodes.draw_size[i] as f64;
            let mut alpha = nodes.alpha[i];
            if slot.dimmed {
                alpha *= COMING_SOON_ALPHA;
            }
            self.ctx.set_global_alpha(alpha as f64);
            _ = self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &self.sprite,
                    sx,
                    sy,
                    sw,
                    sh,
                    nodes.sx[i] as f64 - size * 0.5,
                    nodes.sy[i] as f64 - size * 0.5,
                    size,
                    size,
                );
        }
        self.ctx.set_global_alpha(1.0);
    }

    // Visual anchoring only; node rendering does not depend on it.
    fn draw_orbit_rings(&self, vp: &Viewport) {
        let radius = vp.radius as f64 * RING_RADIUS_RATIO;
        if radius <= 0.0 {
            return;
        }
        self.ctx.set_stroke_style_str(RING_COLOR);
        self.ctx.set_line_width(RING_LINE_WIDTH);
        for tilt in RING_TILTS {
            self.ctx.begin_path();
            _ = self.ctx.ellipse(
                vp.center_x as f64,
                vp.center_y as f64,
                radius,
                radius * RING_SQUASH,
                tilt,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.stroke();
        }
    }
}
