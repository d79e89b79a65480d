//! The comet field engine.
//!
//! One instance owns every simulated entity and all timing state, advances
//! one simulation step per [`CometField::tick`] call and reports reveal
//! transitions through the caller's event buffer. Nothing here touches the
//! platform; the web crate feeds in scroll, pointer and viewport state and
//! draws the result.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::config::{ConfigError, FieldConfig};
use crate::constants::*;
use crate::entity::{Comet, DepthLayer, Ripple, ShootingStar, Spark, TrailPoint};

/// Reveal transitions, in the order they happened during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    RevealStarted,
    RevealEnded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum RevealPhase {
    Idle,
    Boost { until: f64 },
    Restore,
}

pub struct CometField {
    pub comets: Vec<Comet>,
    pub shooting_star: Option<ShootingStar>,
    pub ripples: Vec<Ripple>,
    pub sparks: Vec<Spark>,

    config: FieldConfig,
    width: f32,
    height: f32,
    pointer: Vec2,
    scroll: f32,
    scroll_target: f32,
    section_offsets: Vec<f32>,

    clock: f64,
    last_collision_at: f64,
    next_star_at: f64,
    last_reveal_at: f64,
    reveal: RevealPhase,
    boost: f32,

    rng: StdRng,
}

impl CometField {
    pub fn new(
        config: FieldConfig,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut comets: Vec<Comet> = (0..config.comet_count)
            .map(|_| Comet::spawn(&config, width, height, &mut rng))
            .collect();
        // far-to-near, so iteration order is draw order
        comets.sort_by_key(|c| c.layer);
        let (lo, hi) = config.star_interval;
        let next_star_at = rng.gen_range(lo..hi);
        Ok(Self {
            comets,
            shooting_star: None,
            ripples: Vec::new(),
            sparks: Vec::new(),
            config,
            width,
            height,
            pointer: Vec2::new(POINTER_PARKED, POINTER_PARKED),
            scroll: 0.0,
            scroll_target: 0.0,
            section_offsets: Vec::new(),
            clock: 0.0,
            last_collision_at: f64::NEG_INFINITY,
            next_star_at,
            last_reveal_at: f64::NEG_INFINITY,
            reveal: RevealPhase::Idle,
            boost: 0.0,
            rng,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = Vec2::new(POINTER_PARKED, POINTER_PARKED);
    }

    pub fn set_scroll_target(&mut self, y: f32) {
        self.scroll_target = y;
    }

    /// Absolute top offsets of the themed page sections; kept sorted.
    pub fn set_section_offsets(&mut self, mut offsets: Vec<f32>) {
        offsets.sort_by(|a, b| a.total_cmp(b));
        self.section_offsets = offsets;
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// True from `RevealStarted` until `RevealEnded`.
    pub fn reveal_active(&self) -> bool {
        !matches!(self.reveal, RevealPhase::Idle)
    }

    /// Smoothed reveal boost in [0, 1].
    pub fn reveal_boost(&self) -> f32 {
        self.boost
    }

    /// Trail cap for a comet of the given layer at the current boost.
    pub fn effective_trail_len(&self, layer: DepthLayer) -> usize {
        effective_trail_len(&self.config, layer, self.boost)
    }

    /// Advance one frame. `dt` only moves the wall-clock windows (star
    /// spawning, collision spacing, reveal dwell); integration itself is
    /// per-frame, matching the animation scheduler.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<FieldEvent>) {
        self.clock += dt.as_secs_f64();
        self.scroll += (self.scroll_target - self.scroll) * SCROLL_EASE;
        self.step_shooting_star(out_events);
        self.step_reveal(out_events);
        self.step_comets();
        self.step_ripples();
        self.step_sparks();
    }

    fn step_shooting_star(&mut self, out_events: &mut Vec<FieldEvent>) {
        let Some(star) = self.shooting_star.as_mut() else {
            if self.clock >= self.next_star_at {
                self.shooting_star =
                    Some(ShootingStar::spawn(self.width, self.height, &mut self.rng));
            }
            return;
        };

        let dir = star.vel.normalize_or_zero();
        star.vel += Vec2::new(-dir.y, dir.x) * star.curve;
        star.pos += star.vel;
        star.trail.insert(0, TrailPoint { pos: star.pos, alpha: 1.0 });
        star.trail.truncate(STAR_TRAIL_LENGTH);
        for p in star.trail.iter_mut() {
            p.alpha *= STAR_TRAIL_DECAY;
        }
        star.life -= STAR_LIFE_DECAY;

        let m = STAR_OFFSCREEN_MARGIN;
        let gone = star.life <= 0.0
            || star.pos.x < -m
            || star.pos.x > self.width + m
            || star.pos.y < -m
            || star.pos.y > self.height + m;
        if !gone {
            return;
        }

        self.shooting_star = None;
        let (lo, hi) = self.config.star_interval;
        self.next_star_at = self.clock + self.rng.gen_range(lo..hi);

        let due = self.clock - self.last_reveal_at >= self.config.reveal_min_interval;
        if due && matches!(self.reveal, RevealPhase::Idle) {
            self.last_reveal_at = self.clock;
            self.reveal = RevealPhase::Boost {
                until: self.clock + self.config.reveal_dwell,
            };
            out_events.push(FieldEvent::RevealStarted);
            log::debug!("reveal started at t={:.2}s", self.clock);
        }
    }

    fn step_reveal(&mut self, out_events: &mut Vec<FieldEvent>) {
        match self.reveal {
            RevealPhase::Idle => {}
            RevealPhase::Boost { until } => {
                self.boost += (1.0 - self.boost) * REVEAL_RISE;
                if self.clock >= until {
                    self.reveal = RevealPhase::Restore;
                }
            }
            RevealPhase::Restore => {
                self.boost -= self.boost * REVEAL_FALL;
                if self.boost <= REVEAL_SNAP {
                    self.boost = 0.0;
                    self.reveal = RevealPhase::Idle;
                    out_events.push(FieldEvent::RevealEnded);
                    log::debug!("reveal ended at t={:.2}s", self.clock);
                }
            }
        }
    }

    fn step_comets(&mut self) {
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;
        let boost = self.boost;

        for i in 0..self.comets.len() {
            // split so the collision scan below can reach later comets
            let (head, tail) = self.comets.split_at_mut(i + 1);
            let c = &mut head[i];
            let lp = c.layer.params();

            // pointer repulsion, stronger the closer the pointer is
            let d_pointer = c.pos.distance(pointer);
            if d_pointer < lp.repel_radius {
                let force = (lp.repel_radius - d_pointer) / lp.repel_radius * REPEL_FORCE;
                c.vel += (c.pos - pointer).normalize_or_zero() * force;
            }

            c.vel *= DAMPING;
            if c.vel.length() < STIR_THRESHOLD {
                c.vel += Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * STIR_KICK,
                    (self.rng.gen::<f32>() - 0.5) * STIR_KICK,
                );
            }
            let ceiling = MAX_SPEED * lp.speed_scale * (1.0 + boost * REVEAL_SPEED_BONUS);
            let speed = c.vel.length();
            if speed > ceiling {
                c.vel *= ceiling / speed;
            }

            // integrate, with the lateral wobble perpendicular to travel
            c.osc_phase += c.osc_speed;
            let dir = c.vel.normalize_or_zero();
            let wobble = Vec2::new(-dir.y, dir.x)
                * (c.osc_phase.sin() * c.osc_amp * (1.0 + boost * REVEAL_OSC_BONUS));
            c.pos += c.vel + wobble;

            // wrap across the viewport edges
            if c.pos.x < -WRAP_MARGIN {
                c.pos.x = w + WRAP_MARGIN;
            }
            if c.pos.x > w + WRAP_MARGIN {
                c.pos.x = -WRAP_MARGIN;
            }
            if c.pos.y < -WRAP_MARGIN {
                c.pos.y = h + WRAP_MARGIN;
            }
            if c.pos.y > h + WRAP_MARGIN {
                c.pos.y = -WRAP_MARGIN;
            }

            c.target_scale = 1.0 + boost * REVEAL_SCALE_BONUS;
            c.scale += (c.target_scale - c.scale) * SCALE_EASE;

            // section theming from the absolute vertical position
            let section = section_at(
                &self.section_offsets,
                self.config.themes.len(),
                c.pos.y + self.scroll,
            );
            if section != c.section {
                let theme = self.config.themes[section];
                c.target_core = theme.core;
                c.target_glow = theme.glow;
                c.target_trail = theme.trail;
                if c.can_pop {
                    c.glow_radius = c.target_glow_radius + POP_GLOW_BONUS;
                    self.ripples
                        .push(Ripple::new(c.pos, theme.core, POP_RIPPLE_RADIUS));
                    Spark::burst(
                        &mut self.sparks,
                        &mut self.rng,
                        c.pos,
                        theme.core,
                        POP_SPARK_COUNT,
                    );
                }
                c.section = section;
            }

            c.core_color = c.core_color.eased_toward(c.target_core, COLOR_EASE, COLOR_SNAP);
            c.glow_color = c.glow_color.eased_toward(c.target_glow, COLOR_EASE, COLOR_SNAP);
            c.trail_color = c
                .trail_color
                .eased_toward(c.target_trail, COLOR_EASE, COLOR_SNAP);
            let glow_target = c.target_glow_radius * (1.0 + boost * REVEAL_GLOW_BONUS);
            c.glow_radius += (glow_target - c.glow_radius) * GLOW_EASE;

            if c.collision_cooldown > 0 {
                c.collision_cooldown -= 1;
            }

            let max_len = effective_trail_len(&self.config, c.layer, boost);
            c.push_trail(max_len);

            // gentle collisions, rate limited per comet and globally
            if c.collision_cooldown == 0
                && self.clock - self.last_collision_at > COLLISION_SPACING_SECS
            {
                for other in tail.iter_mut() {
                    if other.collision_cooldown > 0 {
                        continue;
                    }
                    if c.pos.distance(other.pos) >= COLLISION_RADIUS {
                        continue;
                    }
                    self.last_collision_at = self.clock;
                    let mid = (c.pos + other.pos) * 0.5;
                    Spark::burst(
                        &mut self.sparks,
                        &mut self.rng,
                        mid,
                        c.core_color,
                        COLLISION_SPARK_COUNT,
                    );
                    let axis = (c.pos - other.pos).normalize_or_zero();
                    c.vel += axis * COLLISION_IMPULSE;
                    other.vel -= axis * COLLISION_IMPULSE;
                    c.collision_cooldown = COLLISION_COOLDOWN_FRAMES;
                    other.collision_cooldown = COLLISION_COOLDOWN_FRAMES;
                    log::debug!("comet collision at ({:.0}, {:.0})", mid.x, mid.y);
                    break;
                }
            }
        }
    }

    fn step_ripples(&mut self) {
        self.ripples.retain_mut(|r| {
            r.radius += RIPPLE_GROWTH;
            r.alpha -= RIPPLE_FADE;
            r.alpha > 0.0 && r.radius < r.max_radius
        });
    }

    fn step_sparks(&mut self) {
        self.sparks.retain_mut(|s| {
            s.pos += s.vel;
            s.vel *= SPARK_DAMPING;
            s.life -= s.decay;
            s.life > 0.0
        });
    }
}

/// Index of the highest section boundary at or below `abs_y`, clamped to
/// the available themes. No markers means a single default section.
fn section_at(offsets: &[f32], theme_count: usize, abs_y: f32) -> usize {
    for (i, top) in offsets.iter().enumerate().rev() {
        if abs_y >= *top {
            return i.min(theme_count - 1);
        }
    }
    0
}

fn effective_trail_len(config: &FieldConfig, layer: DepthLayer, boost: f32) -> usize {
    let lp = layer.params();
    let len = config.trail_length as f32 * lp.trail_scale * (1.0 + boost * REVEAL_TRAIL_BONUS);
    (len.round() as usize).clamp(2, config.trail_length)
}
