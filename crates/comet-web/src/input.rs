use comet_core::constants::POINTER_PARKED;
use web_sys as web;

/// Latest pointer position in viewport coordinates, parked far off-screen
/// until the first move so nothing gets repelled spuriously.
#[derive(Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: POINTER_PARKED,
            y: POINTER_PARKED,
        }
    }
}

impl PointerState {
    pub fn update(&mut self, ev: &web::PointerEvent) {
        self.x = ev.client_x() as f32;
        self.y = ev.client_y() as f32;
    }
}
