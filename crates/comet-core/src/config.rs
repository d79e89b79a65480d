//! Field configuration.
//!
//! Everything that differs between device classes or between observed
//! tunings of the field (comet counts, depth-layer distribution, pop
//! probability, star and reveal windows, section themes) is an explicit
//! field here rather than a buried constant.

use thiserror::Error;

use crate::color::Hsl;

/// Core, glow and trail colors of one themed page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTheme {
    pub core: Hsl,
    pub glow: Hsl,
    pub trail: Hsl,
}

/// The five default section themes, cyan through amber.
pub const SECTION_THEMES: [SectionTheme; 5] = [
    SectionTheme {
        core: Hsl::new(191.0, 100.0, 62.0),
        glow: Hsl::new(191.0, 100.0, 70.0),
        trail: Hsl::new(191.0, 80.0, 75.0),
    },
    SectionTheme {
        core: Hsl::new(280.0, 80.0, 65.0),
        glow: Hsl::new(270.0, 90.0, 60.0),
        trail: Hsl::new(290.0, 60.0, 75.0),
    },
    SectionTheme {
        core: Hsl::new(150.0, 90.0, 55.0),
        glow: Hsl::new(160.0, 85.0, 50.0),
        trail: Hsl::new(140.0, 70.0, 70.0),
    },
    SectionTheme {
        core: Hsl::new(340.0, 90.0, 60.0),
        glow: Hsl::new(350.0, 85.0, 55.0),
        trail: Hsl::new(330.0, 70.0, 70.0),
    },
    SectionTheme {
        core: Hsl::new(35.0, 95.0, 58.0),
        glow: Hsl::new(40.0, 90.0, 55.0),
        trail: Hsl::new(30.0, 80.0, 70.0),
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("comet count must be at least 1")]
    NoComets,
    #[error("trail length must be at least 2")]
    TrailTooShort,
    #[error("at least one section theme is required")]
    NoThemes,
    #[error("depth layer weights must be positive")]
    BadLayerWeights,
    #[error("shooting star interval must be a positive window")]
    BadStarInterval,
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Live comets for the whole session.
    pub comet_count: usize,
    /// Upper bound for every comet trail.
    pub trail_length: usize,
    /// Chance that a comet flashes on section transitions.
    pub pop_probability: f32,
    /// Weighted depth-layer choice, ordered far / mid / near.
    pub layer_weights: [f32; 3],
    /// Seconds between shooting stars, sampled uniformly from this window.
    pub star_interval: (f64, f64),
    /// Minimum seconds between brand reveals.
    pub reveal_min_interval: f64,
    /// Seconds the reveal boost holds before easing back.
    pub reveal_dwell: f64,
    pub themes: Vec<SectionTheme>,
}

impl FieldConfig {
    pub fn desktop() -> Self {
        Self {
            comet_count: 18,
            trail_length: 20,
            pop_probability: 0.3,
            layer_weights: [0.4, 0.3, 0.3],
            star_interval: (7.0, 13.0),
            reveal_min_interval: 45.0,
            reveal_dwell: 2.8,
            themes: SECTION_THEMES.to_vec(),
        }
    }

    pub fn mobile() -> Self {
        Self {
            comet_count: 8,
            trail_length: 10,
            ..Self::desktop()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comet_count == 0 {
            return Err(ConfigError::NoComets);
        }
        if self.trail_length < 2 {
            return Err(ConfigError::TrailTooShort);
        }
        if self.themes.is_empty() {
            return Err(ConfigError::NoThemes);
        }
        if self.layer_weights.iter().any(|w| *w <= 0.0) {
            return Err(ConfigError::BadLayerWeights);
        }
        let (lo, hi) = self.star_interval;
        if !(lo > 0.0 && hi > lo) {
            return Err(ConfigError::BadStarInterval);
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::desktop()
    }
}
