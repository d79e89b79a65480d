pub mod color;
pub mod config;
pub mod constants;
pub mod entity;
pub mod field;

pub use color::Hsl;
pub use config::{ConfigError, FieldConfig, SectionTheme, SECTION_THEMES};
pub use entity::{Comet, DepthLayer, LayerParams, Ripple, ShootingStar, Spark, Trail, TrailPoint};
pub use field::{CometField, FieldEvent};
