use crate::constants::REDUCED_MOTION_QUERY;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// CSS-pixel size of the canvas, from layout.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio,
/// with the ratio clamped to keep mobile backing stores bounded.
///
/// Returns `(css_width, css_height, dpr)` for the renderer transform.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, dpr_max: f64) -> (f32, f32, f64) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, dpr_max);
    let (css_w, css_h) = canvas_css_size(canvas);
    canvas.set_width(((css_w as f64 * dpr) as u32).max(1));
    canvas.set_height(((css_h as f64 * dpr) as u32).max(1));
    (css_w, css_h, dpr)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

#[inline]
pub fn hide(el: &web::Element) {
    let cl = el.class_list();
    _ = cl.add_1("hidden");
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "display:none");
}
