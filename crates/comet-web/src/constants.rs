// DOM wiring and presentation constants for the web front end.

/// Overlay element shown while a brand reveal is active.
pub const OVERLAY_ELEMENT_ID: &str = "brand-reveal";

/// Page sections carrying a theme are marked with this attribute.
pub const SECTION_MARKER_SELECTOR: &str = "[data-comet-section]";

/// Device pixel ratio is capped to bound raster cost on dense displays.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Below this CSS width the mobile tuning is used.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// The overlay never outlives this window, host callback or not.
pub const OVERLAY_TOTAL_MS: u64 = 3600;

/// Styling for the canvas layer: fixed, behind content, input transparent,
/// composited additively over the page.
pub const CANVAS_STYLE: &str = "position:fixed;inset:0;width:100vw;height:100vh;\
pointer-events:none;z-index:1;mix-blend-mode:screen";
