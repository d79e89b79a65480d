//! Simulation tuning constants.
//!
//! Per-frame rates stay per-frame (the field advances one simulation step
//! per animation tick, as the scheduler provides them); only the wall-clock
//! windows (collision spacing, star interval, reveal dwell) are in seconds.

use crate::color::Hsl;

// Scroll smoothing toward the target offset
pub const SCROLL_EASE: f32 = 0.12;

// Comet motion
pub const DAMPING: f32 = 0.997;
pub const STIR_THRESHOLD: f32 = 0.1;
pub const STIR_KICK: f32 = 0.06;
pub const MAX_SPEED: f32 = 1.5;
pub const WRAP_MARGIN: f32 = 20.0;
pub const SPAWN_DRIFT_X: f32 = 0.4;
pub const SPAWN_DRIFT_Y: f32 = 0.3;

// Pointer repulsion peak force (radius is per depth layer)
pub const REPEL_FORCE: f32 = 0.15;

// Color and glow easing; colors ease slower than the glow radius
pub const COLOR_EASE: f32 = 0.025;
pub const COLOR_SNAP: f32 = 0.01;
pub const GLOW_EASE: f32 = 0.03;

// Glow radius range before layer scaling
pub const GLOW_RADIUS_MIN: f32 = 12.0;
pub const GLOW_RADIUS_SPAN: f32 = 8.0;

// Lateral oscillation (radians per frame, pixels of amplitude)
pub const OSC_SPEED_MIN: f32 = 0.01;
pub const OSC_SPEED_SPAN: f32 = 0.02;
pub const OSC_AMP_MIN: f32 = 0.2;
pub const OSC_AMP_SPAN: f32 = 0.4;

// Trails
pub const TRAIL_DECAY: f32 = 0.93;

// Scale easing toward the (reveal-adjusted) target
pub const SCALE_EASE: f32 = 0.06;

// Collisions
pub const COLLISION_RADIUS: f32 = 25.0;
pub const COLLISION_IMPULSE: f32 = 0.4;
pub const COLLISION_COOLDOWN_FRAMES: u32 = 120;
pub const COLLISION_SPACING_SECS: f64 = 2.0;
pub const COLLISION_SPARK_COUNT: usize = 5;

// Section-transition pop
pub const POP_GLOW_BONUS: f32 = 12.0;
pub const POP_RIPPLE_RADIUS: f32 = 40.0;
pub const POP_SPARK_COUNT: usize = 4;

// Ripples
pub const RIPPLE_START_RADIUS: f32 = 2.0;
pub const RIPPLE_START_ALPHA: f32 = 0.4;
pub const RIPPLE_GROWTH: f32 = 1.5;
pub const RIPPLE_FADE: f32 = 0.012;

// Sparks
pub const SPARK_DAMPING: f32 = 0.95;
pub const SPARK_FADE: f32 = 0.018;
pub const SPARK_LIFE_MIN: f32 = 0.5;
pub const SPARK_LIFE_SPAN: f32 = 0.3;
pub const SPARK_SPEED_MIN: f32 = 1.0;
pub const SPARK_SPEED_SPAN: f32 = 1.5;
pub const SPARK_SIZE_MIN: f32 = 0.8;
pub const SPARK_SIZE_SPAN: f32 = 1.0;

// Shooting star
pub const STAR_TRAIL_LENGTH: usize = 48;
pub const STAR_TRAIL_DECAY: f32 = 0.92;
pub const STAR_LIFE_DECAY: f32 = 0.006;
pub const STAR_OFFSCREEN_MARGIN: f32 = 60.0;
pub const STAR_SPEED_MIN: f32 = 2.5;
pub const STAR_SPEED_SPAN: f32 = 2.0;
pub const STAR_FALL_MIN: f32 = 1.2;
pub const STAR_FALL_SPAN: f32 = 1.0;
pub const STAR_CURVE_MAX: f32 = 0.03;
pub const STAR_COLOR: Hsl = Hsl::new(200.0, 90.0, 85.0);

// Reveal boost envelope and its effect on the comets
pub const REVEAL_RISE: f32 = 0.08;
pub const REVEAL_FALL: f32 = 0.04;
pub const REVEAL_SNAP: f32 = 0.01;
pub const REVEAL_SCALE_BONUS: f32 = 0.35;
pub const REVEAL_SPEED_BONUS: f32 = 0.6;
pub const REVEAL_GLOW_BONUS: f32 = 0.5;
pub const REVEAL_OSC_BONUS: f32 = 0.8;
pub const REVEAL_TRAIL_BONUS: f32 = 0.5;

// Where the pointer is parked while outside the window
pub const POINTER_PARKED: f32 = -1000.0;
