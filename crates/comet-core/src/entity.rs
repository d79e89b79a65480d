//! Simulated entities: comets, the shooting star, ripples and sparks.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

use crate::color::Hsl;
use crate::config::FieldConfig;
use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Comet trails are capped at the configured length, star trails at
/// [`STAR_TRAIL_LENGTH`]; the inline capacity covers both.
pub type Trail = SmallVec<[TrailPoint; 48]>;

/// Depth layer of a comet. Ordering is draw order: far comets are drawn
/// first so nearer ones occlude them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepthLayer {
    Far,
    Mid,
    Near,
}

/// Per-layer tuning fixed at comet creation.
#[derive(Clone, Copy, Debug)]
pub struct LayerParams {
    pub size_min: f32,
    pub size_max: f32,
    pub speed_scale: f32,
    pub glow_scale: f32,
    pub trail_alpha: f32,
    pub trail_scale: f32,
    pub repel_radius: f32,
}

impl DepthLayer {
    pub fn params(self) -> LayerParams {
        match self {
            DepthLayer::Far => LayerParams {
                size_min: 0.8,
                size_max: 1.8,
                speed_scale: 0.55,
                glow_scale: 0.8,
                trail_alpha: 0.35,
                trail_scale: 0.6,
                repel_radius: 70.0,
            },
            DepthLayer::Mid => LayerParams {
                size_min: 1.2,
                size_max: 2.6,
                speed_scale: 0.8,
                glow_scale: 1.0,
                trail_alpha: 0.5,
                trail_scale: 0.8,
                repel_radius: 90.0,
            },
            DepthLayer::Near => LayerParams {
                size_min: 1.8,
                size_max: 3.6,
                speed_scale: 1.1,
                glow_scale: 1.3,
                trail_alpha: 0.65,
                trail_scale: 1.0,
                repel_radius: 110.0,
            },
        }
    }

    /// Weighted choice, weights ordered far / mid / near.
    pub fn sample(weights: &[f32; 3], rng: &mut impl Rng) -> Self {
        let total: f32 = weights.iter().sum();
        let mut roll = rng.gen::<f32>() * total;
        for (layer, w) in [DepthLayer::Far, DepthLayer::Mid, DepthLayer::Near]
            .into_iter()
            .zip(weights)
        {
            if roll < *w {
                return layer;
            }
            roll -= *w;
        }
        DepthLayer::Near
    }
}

#[derive(Clone, Debug)]
pub struct Comet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub layer: DepthLayer,
    pub core_color: Hsl,
    pub glow_color: Hsl,
    pub trail_color: Hsl,
    pub target_core: Hsl,
    pub target_glow: Hsl,
    pub target_trail: Hsl,
    pub trail: Trail,
    pub glow_radius: f32,
    pub target_glow_radius: f32,
    pub section: usize,
    pub collision_cooldown: u32,
    pub can_pop: bool,
    pub osc_phase: f32,
    pub osc_speed: f32,
    pub osc_amp: f32,
    pub scale: f32,
    pub target_scale: f32,
}

impl Comet {
    pub fn spawn(config: &FieldConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let layer = DepthLayer::sample(&config.layer_weights, rng);
        let lp = layer.params();
        let theme = config.themes[0];
        let glow = (GLOW_RADIUS_MIN + rng.gen::<f32>() * GLOW_RADIUS_SPAN) * lp.glow_scale;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * SPAWN_DRIFT_X,
                (rng.gen::<f32>() - 0.5) * SPAWN_DRIFT_Y,
            ) * lp.speed_scale,
            size: lp.size_min + rng.gen::<f32>() * (lp.size_max - lp.size_min),
            layer,
            core_color: theme.core,
            glow_color: theme.glow,
            trail_color: theme.trail,
            target_core: theme.core,
            target_glow: theme.glow,
            target_trail: theme.trail,
            trail: Trail::new(),
            glow_radius: glow,
            target_glow_radius: glow,
            section: 0,
            collision_cooldown: 0,
            can_pop: rng.gen::<f32>() < config.pop_probability,
            osc_phase: rng.gen::<f32>() * TAU,
            osc_speed: OSC_SPEED_MIN + rng.gen::<f32>() * OSC_SPEED_SPAN,
            osc_amp: OSC_AMP_MIN + rng.gen::<f32>() * OSC_AMP_SPAN,
            scale: 1.0,
            target_scale: 1.0,
        }
    }

    /// Record the current position at the head of the trail, truncate to
    /// `max_len` and fade every point.
    pub(crate) fn push_trail(&mut self, max_len: usize) {
        self.trail.insert(0, TrailPoint { pos: self.pos, alpha: 1.0 });
        self.trail.truncate(max_len);
        for p in self.trail.iter_mut() {
            p.alpha *= TRAIL_DECAY;
        }
    }
}

/// At most one of these is alive at a time.
#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub pos: Vec2,
    pub vel: Vec2,
    pub trail: Trail,
    /// Remaining life in [0, 1].
    pub life: f32,
    /// Constant lateral acceleration, perpendicular to the velocity.
    pub curve: f32,
}

impl ShootingStar {
    pub fn spawn(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let from_left = rng.gen::<bool>();
        let vx = STAR_SPEED_MIN + rng.gen::<f32>() * STAR_SPEED_SPAN;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height * 0.35),
            vel: Vec2::new(
                if from_left { vx } else { -vx },
                STAR_FALL_MIN + rng.gen::<f32>() * STAR_FALL_SPAN,
            ),
            trail: Trail::new(),
            life: 1.0,
            curve: (rng.gen::<f32>() - 0.5) * 2.0 * STAR_CURVE_MAX,
        }
    }
}

/// Expanding ring left behind by a section pop.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub alpha: f32,
    pub color: Hsl,
}

impl Ripple {
    pub fn new(pos: Vec2, color: Hsl, max_radius: f32) -> Self {
        Self {
            pos,
            radius: RIPPLE_START_RADIUS,
            max_radius,
            alpha: RIPPLE_START_ALPHA,
            color,
        }
    }
}

/// Short-lived particle from a collision or pop burst.
#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub decay: f32,
    pub color: Hsl,
    pub size: f32,
}

impl Spark {
    /// Emit a radial burst of `count` sparks into `out`.
    pub fn burst(out: &mut Vec<Spark>, rng: &mut impl Rng, pos: Vec2, color: Hsl, count: usize) {
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32 + rng.gen::<f32>() * 0.3;
            let speed = SPARK_SPEED_MIN + rng.gen::<f32>() * SPARK_SPEED_SPAN;
            let lifetime = SPARK_LIFE_MIN + rng.gen::<f32>() * SPARK_LIFE_SPAN;
            out.push(Spark {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                decay: SPARK_FADE / lifetime,
                color,
                size: SPARK_SIZE_MIN + rng.gen::<f32>() * SPARK_SIZE_SPAN,
            });
        }
    }
}
