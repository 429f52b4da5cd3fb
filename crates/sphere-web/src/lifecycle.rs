//! Listener bookkeeping, resize wiring and visibility-driven pause.
//!
//! Every registration is tracked so `destroy` can unwind the whole mount:
//! a dropped bag removes its listeners instead of leaking live closures
//! into a dead widget.

use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ListenerEntry {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    // Keeps the closure alive for as long as the listener is registered.
    _closure: Box<dyn std::any::Any>,
}

#[derive(Default)]
pub struct ListenerBag {
    entries: Vec<ListenerEntry>,
}

impl ListenerBag {
    pub fn add<T>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> anyhow::Result<()>
    where
        T: ?Sized + 'static,
    {
        let function: js_sys::Function = closure.as_ref().clone().unchecked_into();
        target
            .add_event_listener_with_callback(event, &function)
            .map_err(|e| anyhow::anyhow!("failed to register {event}: {e:?}"))?;
        self.entries.push(ListenerEntry {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        });
        Ok(())
    }

    pub fn add_with_options<T>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
        options: &web::AddEventListenerOptions,
    ) -> anyhow::Result<()>
    where
        T: ?Sized + 'static,
    {
        let function: js_sys::Function = closure.as_ref().clone().unchecked_into();
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event, &function, options,
            )
            .map_err(|e| anyhow::anyhow!("failed to register {event}: {e:?}"))?;
        self.entries.push(ListenerEntry {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        });
        Ok(())
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            _ = entry
                .target
                .remove_event_listener_with_callback(entry.event, &entry.function);
        }
    }
}

impl Drop for ListenerBag {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Recompute backing size, projection center/radius and the HiDPI transform
/// when the window resizes. Rotation and velocity are left alone.
pub fn wire_resize(
    bag: &mut ListenerBag,
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
    dpr_max: f64,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || {
        let (css_w, css_h, dpr) = dom::sync_canvas_backing_size(&canvas, dpr_max);
        let mut ctx = ctx.borrow_mut();
        ctx.sim.borrow_mut().resize(css_w, css_h);
        ctx.renderer.set_surface(css_w, css_h, dpr);
    }) as Box<dyn FnMut()>);
    bag.add(window, "resize", closure)
}

pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

/// Pause the loop while the widget is out of the viewport. Returns `None`
/// where the observer API is unavailable; the loop then simply keeps going.
pub fn observe_visibility(
    target: &web::Element,
    frame_loop: FrameLoop,
) -> Option<VisibilityObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            if let Ok(entry) = entries.get(0).dyn_into::<web::IntersectionObserverEntry>() {
                frame_loop.set_paused(!entry.is_intersecting());
            }
        },
    )
        as Box<dyn FnMut(_, _)>);
    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(target);
    Some(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

impl VisibilityObserver {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
