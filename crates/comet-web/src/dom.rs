use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CANVAS_STYLE, MAX_PIXEL_RATIO, MOBILE_BREAKPOINT_PX, SECTION_MARKER_SELECTOR};

#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO)
}

pub fn viewport_css_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn is_mobile_viewport(window: &web::Window) -> bool {
    let (w, _) = viewport_css_size(window);
    (w as f64) < MOBILE_BREAKPOINT_PX
}

pub fn style_canvas(canvas: &web::HtmlCanvasElement) {
    _ = canvas.set_attribute("style", CANVAS_STYLE);
}

/// Match the backing store to the viewport at the capped pixel ratio.
/// Returns the CSS-pixel size the simulation runs in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let dpr = pixel_ratio();
    let (w, h) = viewport_css_size(&window);
    canvas.set_width(((w as f64 * dpr) as u32).max(1));
    canvas.set_height(((h as f64 * dpr) as u32).max(1));
    (w, h)
}

pub fn current_scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Absolute top offsets of the `[data-comet-section]` markers. Missing
/// markers just mean a single default section.
pub fn section_offsets(document: &web::Document) -> Vec<f32> {
    let mut offsets = Vec::new();
    let Ok(nodes) = document.query_selector_all(SECTION_MARKER_SELECTOR) else {
        return offsets;
    };
    let scroll_y = current_scroll_y() as f64;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let top = el.get_bounding_client_rect().top() + scroll_y;
        offsets.push(top as f32);
    }
    offsets
}
