//! Window listener wiring. Closures are retained (not forgotten) so unmount
//! can remove the listeners and release the callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use comet_core::CometField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input::PointerState;

pub struct Listeners {
    resize: Closure<dyn FnMut()>,
    scroll: Closure<dyn FnMut()>,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
}

pub fn wire(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<CometField>>,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<Listeners> {
    let resize = {
        let engine = engine.clone();
        let canvas = canvas.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            let mut e = engine.borrow_mut();
            e.set_viewport(w, h);
            e.set_section_offsets(dom::section_offsets(&document));
        }) as Box<dyn FnMut()>)
    };
    add(window, "resize", resize.as_ref())?;

    let scroll = {
        let engine = engine.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let mut e = engine.borrow_mut();
            e.set_scroll_target(dom::current_scroll_y());
            e.set_section_offsets(dom::section_offsets(&document));
        }) as Box<dyn FnMut()>)
    };
    add(window, "scroll", scroll.as_ref())?;

    let pointermove = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            pointer.borrow_mut().update(&ev);
        }) as Box<dyn FnMut(_)>)
    };
    add(window, "pointermove", pointermove.as_ref())?;

    Ok(Listeners {
        resize,
        scroll,
        pointermove,
    })
}

impl Listeners {
    /// Remove every listener; dropping `self` then releases the closures.
    pub fn detach(self) {
        let Some(window) = web::window() else { return };
        remove(&window, "resize", self.resize.as_ref());
        remove(&window, "scroll", self.scroll.as_ref());
        remove(&window, "pointermove", self.pointermove.as_ref());
    }
}

fn add(window: &web::Window, kind: &str, cb: &wasm_bindgen::JsValue) -> anyhow::Result<()> {
    window
        .add_event_listener_with_callback(kind, cb.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("failed to attach {kind} listener: {e:?}"))
}

fn remove(window: &web::Window, kind: &str, cb: &wasm_bindgen::JsValue) {
    _ = window.remove_event_listener_with_callback(kind, cb.unchecked_ref());
}
