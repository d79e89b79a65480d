use comet_core::constants::{SPARK_SIZE_MIN, SPARK_SIZE_SPAN, SPARK_SPEED_MIN, SPARK_SPEED_SPAN};
use comet_core::{Comet, DepthLayer, FieldConfig, Hsl, ShootingStar, Spark};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn layer_sampling_follows_the_weights() {
    let weights = [0.4_f32, 0.3, 0.3];
    let mut rng = StdRng::seed_from_u64(9);
    let mut counts = [0usize; 3];
    let n = 20_000;
    for _ in 0..n {
        counts[DepthLayer::sample(&weights, &mut rng) as usize] += 1;
    }
    for (count, weight) in counts.iter().zip(weights) {
        let observed = *count as f32 / n as f32;
        assert!(
            (observed - weight).abs() < 0.02,
            "observed {observed} for weight {weight}"
        );
    }
}

#[test]
fn comet_spawn_respects_layer_ranges() {
    let cfg = FieldConfig::desktop();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let c = Comet::spawn(&cfg, 800.0, 600.0, &mut rng);
        let lp = c.layer.params();
        assert!(c.size >= lp.size_min && c.size <= lp.size_max);
        assert!(c.pos.x >= 0.0 && c.pos.x <= 800.0);
        assert!(c.pos.y >= 0.0 && c.pos.y <= 600.0);
        assert!(c.trail.is_empty());
        assert_eq!(c.section, 0);
        assert_eq!(c.collision_cooldown, 0);
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.core_color, cfg.themes[0].core);
    }
}

#[test]
fn pop_eligibility_tracks_the_configured_probability() {
    let mut cfg = FieldConfig::desktop();
    cfg.pop_probability = 0.3;
    let mut rng = StdRng::seed_from_u64(21);
    let n = 10_000;
    let poppers = (0..n)
        .filter(|_| Comet::spawn(&cfg, 800.0, 600.0, &mut rng).can_pop)
        .count();
    let observed = poppers as f32 / n as f32;
    assert!((observed - 0.3).abs() < 0.02, "observed {observed}");
}

#[test]
fn spark_burst_emits_the_requested_count_in_all_directions() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut sparks = Vec::new();
    let color = Hsl::new(191.0, 100.0, 62.0);
    Spark::burst(&mut sparks, &mut rng, Vec2::new(10.0, 20.0), color, 6);
    assert_eq!(sparks.len(), 6);
    let mut sum = Vec2::ZERO;
    for s in &sparks {
        assert_eq!(s.pos, Vec2::new(10.0, 20.0));
        assert_eq!(s.color, color);
        assert_eq!(s.life, 1.0);
        let speed = s.vel.length();
        assert!(speed >= SPARK_SPEED_MIN && speed <= SPARK_SPEED_MIN + SPARK_SPEED_SPAN);
        assert!(s.size >= SPARK_SIZE_MIN && s.size <= SPARK_SIZE_MIN + SPARK_SIZE_SPAN);
        sum += s.vel.normalize();
    }
    // a radial burst roughly cancels out
    assert!(sum.length() / 6.0 < 0.5);
}

#[test]
fn shooting_star_spawns_in_the_upper_band_moving_down() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let star = ShootingStar::spawn(800.0, 600.0, &mut rng);
        assert!(star.pos.y <= 600.0 * 0.35);
        assert!(star.vel.y > 0.0, "stars streak downward");
        assert!(star.vel.x.abs() > 0.0);
        assert_eq!(star.life, 1.0);
        assert!(star.trail.is_empty());
    }
}
