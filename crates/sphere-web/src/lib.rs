#![cfg(target_arch = "wasm32")]
//! WASM front-end for the integration sphere.
//!
//! Reads the embedded payload, mounts the canvas renderer and frame loop,
//! and converges every failure path (no 2D context, sprite load error,
//! malformed payload, reduced motion) on the static fallback grid.

use crate::constants::*;
use crate::frame::{start_loop, FrameContext, FrameLoop};
use crate::lifecycle::{ListenerBag, VisibilityObserver};
use crate::render::Renderer;
use sphere_core::{ItemStatus, SphereConfig, SpherePayload, SphereSim};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod lifecycle;
mod render;

thread_local! {
    static AUTO_MOUNT: RefCell<Option<SphereHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[sphere] sphere-web starting");

    // Auto-mount when the page carries the widget's canvas.
    if let Some((_, document)) = dom::window_document() {
        if document.get_element_by_id(CANVAS_ID).is_some() {
            spawn_local(async move {
                match init().await {
                    Ok(handle) => AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(handle)),
                    Err(e) => log::error!("[sphere] mount error: {e:?}"),
                }
            });
        }
    }
    Ok(())
}

/// Explicit mount for pages that manage the widget themselves.
#[wasm_bindgen]
pub async fn mount() -> Result<SphereHandle, JsValue> {
    init()
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

/// Tear down the auto-mounted instance, if any.
#[wasm_bindgen]
pub fn unmount() {
    AUTO_MOUNT.with(|slot| {
        if let Some(mut handle) = slot.borrow_mut().take() {
            handle.destroy();
        }
    });
}

#[wasm_bindgen]
pub struct SphereHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl SphereHandle {
    /// Cancel the frame loop and remove every listener this mount added.
    pub fn destroy(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.teardown();
        }
    }
}

struct Mounted {
    frame_loop: FrameLoop,
    listeners: ListenerBag,
    observer: Option<VisibilityObserver>,
}

impl Mounted {
    fn teardown(mut self) {
        self.frame_loop.cancel();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.listeners.clear();
        log::info!("[sphere] destroyed");
    }
}

/// A handle with nothing to tear down; returned when mounting ended on the
/// fallback grid.
fn inert() -> SphereHandle {
    SphereHandle { inner: None }
}

async fn init() -> anyhow::Result<SphereHandle> {
    let (window, document) = dom::window_document()
        .ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let fallback_el = document
        .get_element_by_id(FALLBACK_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{FALLBACK_ID}"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());

    // Payload first: without it there is nothing to animate and nothing to
    // put in the grid.
    let raw = document
        .get_element_by_id(PAYLOAD_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let payload = match SpherePayload::parse(&raw) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("[sphere] unusable payload: {e}");
            fallback::engage(canvas.as_ref(), &fallback_el);
            return Ok(inert());
        }
    };

    // The grid is always built, so every later failure can just switch to it.
    fallback::build_grid(&document, &fallback_el, &payload)?;

    let canvas = match canvas {
        Some(canvas) => canvas,
        None => {
            log::warn!("[sphere] missing #{CANVAS_ID}");
            fallback::engage(None, &fallback_el);
            return Ok(inert());
        }
    };

    if dom::prefers_reduced_motion(&window) {
        log::info!("[sphere] reduced motion preferred; serving the static grid");
        fallback::engage(Some(&canvas), &fallback_el);
        return Ok(inert());
    }

    let sprite = match load_sprite(&payload.sprite.url).await {
        Ok(image) => image,
        Err(e) => {
            log::error!("[sphere] {e}");
            fallback::engage(Some(&canvas), &fallback_el);
            return Ok(inert());
        }
    };

    let cfg = SphereConfig::default();
    let SpherePayload { logos, sprite: sheet } = payload;
    let slot_styles = logos
        .iter()
        .map(|item| (item.sprite_index, item.status == ItemStatus::ComingSoon))
        .collect::<Vec<_>>();
    let mut renderer = match Renderer::new(&canvas, sprite, sheet, slot_styles.into_iter()) {
        Some(renderer) => renderer,
        None => {
            log::warn!("[sphere] 2d context unavailable");
            fallback::engage(Some(&canvas), &fallback_el);
            return Ok(inert());
        }
    };

    let (css_w, css_h, dpr) = dom::sync_canvas_backing_size(&canvas, cfg.dpr_max);
    renderer.set_surface(css_w, css_h, dpr);
    let sim = Rc::new(RefCell::new(SphereSim::new(
        logos.len(),
        css_w,
        css_h,
        cfg.clone(),
    )));
    let items = Rc::new(logos);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        sim: sim.clone(),
        renderer,
    }));

    let mut listeners = ListenerBag::default();
    events::wire_input_handlers(
        &mut listeners,
        &events::InputWiring {
            canvas: canvas.clone(),
            sim: sim.clone(),
            items: items.clone(),
        },
    )?;
    lifecycle::wire_resize(
        &mut listeners,
        &window,
        canvas.clone(),
        frame_ctx.clone(),
        cfg.dpr_max,
    )?;

    let frame_loop = start_loop(frame_ctx);
    let observer = lifecycle::observe_visibility(&canvas, frame_loop.clone());
    if observer.is_none() {
        log::warn!("[sphere] IntersectionObserver unavailable; loop stays active");
    }

    log::info!("[sphere] mounted with {} items", items.len());
    Ok(SphereHandle {
        inner: Some(Mounted {
            frame_loop,
            listeners,
            observer,
        }),
    })
}

/// Load the sprite sheet exactly once; the promise settles with the image's
/// load or error event.
async fn load_sprite(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let image = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let ready = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    wasm_bindgen_futures::JsFuture::from(ready)
        .await
        .map_err(|_| anyhow::anyhow!("sprite sheet failed to load: {url}"))?;
    Ok(image)
}
