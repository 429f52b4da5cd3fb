//! Pointer and touch wiring: host events become unified `PointerInput`
//! before the simulation sees them.

use crate::lifecycle::ListenerBag;
use sphere_core::{IntegrationItem, PointerInput, PointerKind, SphereSim, Tap};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<SphereSim>>,
    pub items: Rc<Vec<IntegrationItem>>,
}

pub fn wire_input_handlers(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    wire_pointerdown(bag, w)?;
    wire_pointermove(bag, w)?;
    wire_pointerup(bag, w)?;
    wire_pointercancel(bag, w)?;
    wire_pointerleave(bag, w)?;
    wire_touchmove(bag, w)?;
    Ok(())
}

/// Pointer position in CSS-pixel canvas coordinates; the simulation's
/// viewport works in the same units.
#[inline]
fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    )
}

fn wire_pointerdown(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_css_px(&ev, &w.canvas);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        w.sim.borrow_mut().pointer(PointerInput {
            kind: PointerKind::Down,
            x,
            y,
        });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    bag.add(&canvas_for_listener, "pointerdown", closure)
}

fn wire_pointermove(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_css_px(&ev, &w.canvas);
        w.sim.borrow_mut().pointer(PointerInput {
            kind: PointerKind::Move,
            x,
            y,
        });
    }) as Box<dyn FnMut(_)>);
    // Captured pointers keep retargeting moves here mid-drag, even once the
    // pointer is outside the canvas.
    bag.add(&canvas_for_listener, "pointermove", closure)
}

fn wire_pointerup(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_css_px(&ev, &w.canvas);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        let tap = w.sim.borrow_mut().pointer(PointerInput {
            kind: PointerKind::Up,
            x,
            y,
        });
        if let Some(Tap { node_index }) = tap {
            navigate(&w.items[node_index]);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    bag.add(&window, "pointerup", closure)
}

fn wire_pointercancel(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_css_px(&ev, &w.canvas);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        w.sim.borrow_mut().pointer(PointerInput {
            kind: PointerKind::Cancel,
            x,
            y,
        });
    }) as Box<dyn FnMut(_)>);
    bag.add(&window, "pointercancel", closure)
}

fn wire_pointerleave(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_css_px(&ev, &w.canvas);
        w.sim.borrow_mut().pointer(PointerInput {
            kind: PointerKind::Leave,
            x,
            y,
        });
    }) as Box<dyn FnMut(_)>);
    bag.add(&canvas_for_listener, "pointerleave", closure)
}

/// While a drag is active the page must not scroll under the sphere, so the
/// listener is registered non-passively and calls `preventDefault`.
fn wire_touchmove(bag: &mut ListenerBag, w: &InputWiring) -> anyhow::Result<()> {
    let sim = w.sim.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if sim.borrow().dragging() {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    bag.add_with_options(&w.canvas, "touchmove", closure, &options)
}

fn navigate(item: &IntegrationItem) {
    log::info!("[sphere] activate {} -> {}", item.id, item.href);
    if let Some(window) = web::window() {
        let location = window.location();
        if item.href.starts_with('#') {
            // Same-document jump to the anchored directory entry.
            _ = location.set_hash(&item.id);
        } else {
            _ = location.set_href(&item.href);
        }
    }
}
