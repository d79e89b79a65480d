use comet_core::{ConfigError, FieldConfig, Hsl, SECTION_THEMES};

#[test]
fn device_class_defaults_are_valid() {
    assert!(FieldConfig::desktop().validate().is_ok());
    assert!(FieldConfig::mobile().validate().is_ok());
}

#[test]
fn desktop_and_mobile_counts() {
    let desktop = FieldConfig::desktop();
    let mobile = FieldConfig::mobile();
    assert_eq!(desktop.comet_count, 18);
    assert_eq!(desktop.trail_length, 20);
    assert_eq!(mobile.comet_count, 8);
    assert_eq!(mobile.trail_length, 10);
    // everything else is shared between the device classes
    assert_eq!(mobile.pop_probability, desktop.pop_probability);
    assert_eq!(mobile.layer_weights, desktop.layer_weights);
}

#[test]
fn default_is_the_desktop_tuning() {
    assert_eq!(FieldConfig::default().comet_count, 18);
}

#[test]
fn layer_weights_skew_toward_the_far_layer() {
    let cfg = FieldConfig::desktop();
    let [far, mid, near] = cfg.layer_weights;
    assert!(far >= mid && far >= near);
    let total = far + mid + near;
    assert!((total - 1.0).abs() < 1e-5);
}

#[test]
fn five_section_themes_starting_cyan() {
    assert_eq!(SECTION_THEMES.len(), 5);
    assert_eq!(SECTION_THEMES[0].core, Hsl::new(191.0, 100.0, 62.0));
    assert_eq!(FieldConfig::desktop().themes.len(), 5);
}

#[test]
fn validation_rejects_bad_configs() {
    let mut cfg = FieldConfig::desktop();
    cfg.comet_count = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::NoComets));

    let mut cfg = FieldConfig::desktop();
    cfg.trail_length = 1;
    assert_eq!(cfg.validate(), Err(ConfigError::TrailTooShort));

    let mut cfg = FieldConfig::desktop();
    cfg.themes.clear();
    assert_eq!(cfg.validate(), Err(ConfigError::NoThemes));

    let mut cfg = FieldConfig::desktop();
    cfg.layer_weights = [0.5, 0.0, 0.5];
    assert_eq!(cfg.validate(), Err(ConfigError::BadLayerWeights));

    let mut cfg = FieldConfig::desktop();
    cfg.star_interval = (5.0, 5.0);
    assert_eq!(cfg.validate(), Err(ConfigError::BadStarInterval));
}
