use std::cell::RefCell;
use std::rc::Rc;

use comet_core::{CometField, FieldEvent};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::OVERLAY_TOTAL_MS;
use crate::input::PointerState;
use crate::{dom, overlay, render, Mount};

pub struct FrameContext {
    pub engine: Rc<RefCell<CometField>>,
    pub renderer: Option<render::Canvas2d>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub on_reveal_change: Option<js_sys::Function>,
    pub document: web::Document,

    pub reveal_started_at: Option<Instant>,
    pub events: Vec<FieldEvent>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.events.clear();
        {
            let mut engine = self.engine.borrow_mut();
            let p = *self.pointer.borrow();
            engine.set_pointer(p.x, p.y);
            engine.tick(dt, &mut self.events);
        }

        for i in 0..self.events.len() {
            match self.events[i] {
                FieldEvent::RevealStarted => {
                    self.reveal_started_at = Some(now);
                    overlay::show(&self.document);
                    self.notify_reveal(true);
                }
                FieldEvent::RevealEnded => {
                    self.reveal_started_at = None;
                    overlay::hide(&self.document);
                    self.notify_reveal(false);
                }
            }
        }

        // the overlay never outlives its fixed window, host callback or not
        if let Some(t0) = self.reveal_started_at {
            if now.duration_since(t0).as_millis() as u64 >= OVERLAY_TOTAL_MS {
                overlay::hide(&self.document);
                self.reveal_started_at = None;
            }
        }

        if let Some(r) = &self.renderer {
            r.render(&self.engine.borrow(), dom::pixel_ratio());
        }
    }

    fn notify_reveal(&self, active: bool) {
        if let Some(f) = &self.on_reveal_change {
            _ = f.call1(&JsValue::NULL, &JsValue::from_bool(active));
        }
    }
}

/// Drive the frame loop off requestAnimationFrame. The closure keeps itself
/// alive through the usual Rc cycle; `mount.running` breaks the chain on
/// unmount and the pending handle in `mount.raf_id` is canceled there.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, mount: Rc<Mount>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mount_tick = mount.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !mount_tick.running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                mount_tick.raf_id.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            mount.raf_id.set(id);
        }
    }
}
