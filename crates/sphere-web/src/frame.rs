//! The requestAnimationFrame loop. This is the only module that touches the
//! scheduler; everything it drives lives behind `SphereSim` and `Renderer`.

use crate::render::Renderer;
use sphere_core::SphereSim;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<SphereSim>>,
    pub renderer: Renderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut sim = self.sim.borrow_mut();
        sim.advance_frame();
        self.renderer.draw(sim.nodes(), sim.viewport());
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running loop. Pausing cancels the pending frame and resuming
/// re-requests it; neither touches simulation state, so rotation continues
/// exactly where it left off.
#[derive(Clone)]
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    paused: Rc<Cell<bool>>,
    tick: TickClosure,
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let paused = Rc::new(Cell::new(false));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let raf_id_tick = raf_id.clone();
    let paused_tick = paused.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if paused_tick.get() {
            return;
        }
        ctx.borrow_mut().frame();
        schedule(&raf_id_tick, &tick_clone);
    }) as Box<dyn FnMut()>));

    let frame_loop = FrameLoop {
        raf_id,
        paused,
        tick,
    };
    schedule(&frame_loop.raf_id, &frame_loop.tick);
    frame_loop
}

fn schedule(raf_id: &Rc<Cell<Option<i32>>>, tick: &TickClosure) {
    if raf_id.get().is_some() {
        return;
    }
    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }
}

impl FrameLoop {
    pub fn set_paused(&self, paused: bool) {
        if self.paused.replace(paused) == paused {
            return;
        }
        if paused {
            self.cancel_pending();
            log::info!("[sphere] loop paused (offscreen)");
        } else {
            log::info!("[sphere] loop resumed");
            schedule(&self.raf_id, &self.tick);
        }
    }

    /// Stop for good: cancel the pending frame and drop the tick closure so
    /// nothing can reschedule it.
    pub fn cancel(&self) {
        self.cancel_pending();
        self.tick.borrow_mut().take();
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}
