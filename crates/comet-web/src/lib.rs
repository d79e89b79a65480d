#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use comet_core::{CometField, FieldConfig};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Shared teardown state for one mounted field.
pub(crate) struct Mount {
    pub(crate) running: Cell<bool>,
    pub(crate) raf_id: Cell<i32>,
    pub(crate) listeners: RefCell<Option<events::Listeners>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("comet-web starting");
    Ok(())
}

/// Mount the comet field onto the canvas with the given element id.
///
/// `on_reveal_change` receives `true` when a brand reveal starts and
/// `false` once it has fully eased back. Call [`FieldHandle::unmount`] to
/// stop the frame loop and remove all listeners.
#[wasm_bindgen]
pub fn mount(
    canvas_id: &str,
    on_reveal_change: Option<js_sys::Function>,
) -> Result<FieldHandle, JsValue> {
    init(canvas_id, on_reveal_change).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init(
    canvas_id: &str,
    on_reveal_change: Option<js_sys::Function>,
) -> anyhow::Result<FieldHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{canvas_id} is not a canvas"))?;

    dom::style_canvas(&canvas);
    let (w, h) = dom::sync_canvas_backing_size(&canvas);

    let config = if dom::is_mobile_viewport(&window) {
        FieldConfig::mobile()
    } else {
        FieldConfig::desktop()
    };
    let seed = js_sys::Date::now() as u64;
    let mut field = CometField::new(config, w, h, seed)?;
    field.set_scroll_target(dom::current_scroll_y());
    field.set_section_offsets(dom::section_offsets(&document));
    let engine = Rc::new(RefCell::new(field));

    let renderer = render::Canvas2d::new(&canvas);
    if renderer.is_none() {
        log::warn!("2d context unavailable, comet field will not draw");
    }

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let listeners = events::wire(&window, &document, &canvas, engine.clone(), pointer.clone())?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        renderer,
        pointer,
        on_reveal_change,
        document,
        reveal_started_at: None,
        events: Vec::new(),
        last_instant: Instant::now(),
    }));

    let mount = Rc::new(Mount {
        running: Cell::new(true),
        raf_id: Cell::new(0),
        listeners: RefCell::new(Some(listeners)),
    });
    frame::start_loop(frame_ctx, mount.clone());
    log::info!("comet field mounted on #{canvas_id}");

    Ok(FieldHandle { inner: mount })
}

/// Owner of a mounted field; unmounting tears everything down.
#[wasm_bindgen]
pub struct FieldHandle {
    inner: Rc<Mount>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Cancel the pending animation frame and remove all listeners. No
    /// frame or listener callback fires after this returns.
    pub fn unmount(&self) {
        self.inner.running.set(false);
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(self.inner.raf_id.get());
        }
        if let Some(listeners) = self.inner.listeners.borrow_mut().take() {
            listeners.detach();
        }
        log::info!("comet field unmounted");
    }
}
