use super::*;

fn field_and_scene() -> (DistanceField, SceneConfig) {
    let scene = SceneConfig::default();
    (DistanceField::new(&scene), scene)
}

#[test]
fn ray_aimed_away_from_the_fractal_misses() {
    let (field, scene) = field_and_scene();
    let outcome = march(
        &field,
        Vec3::new(0.0, 1.2, -5.0),
        Vec3::new(0.0, 0.0, -1.0),
        &scene,
    );
    assert!(!outcome.is_hit());
    assert_eq!(outcome, MarchOutcome::Miss);
}

#[test]
fn axis_ray_into_the_bulb_hits_before_the_origin() {
    let (field, scene) = field_and_scene();
    let outcome = march(
        &field,
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(0.0, 0.0, 1.0),
        &scene,
    );
    let MarchOutcome::Hit { point } = outcome else {
        panic!("expected a hit, got {outcome:?}");
    };
    // The ray never leaves the z axis, and the bulb surface sits between
    // the origin of the ray and the attractor's center.
    assert_eq!(point.x, 0.0);
    assert_eq!(point.y, 0.0);
    assert!(point.z > -2.0 && point.z < 0.0, "hit at {point}");
}

#[test]
fn budget_check_wins_over_the_hit_threshold() {
    let (field, _) = field_and_scene();
    // Generous hit threshold, but a travel budget smaller than the first
    // step: the budget is checked first, so this must be a miss.
    let scene = SceneConfig {
        max_distance: 0.05,
        hit_epsilon: 10.0,
        ..SceneConfig::default()
    };
    let outcome = march(
        &field,
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(0.0, 0.0, 1.0),
        &scene,
    );
    assert_eq!(outcome, MarchOutcome::Miss);
}

#[test]
fn generous_hit_threshold_reports_the_ray_origin() {
    let (field, _) = field_and_scene();
    let scene = SceneConfig {
        hit_epsilon: 10.0,
        ..SceneConfig::default()
    };
    let ro = Vec3::new(0.0, 0.0, -2.0);
    let outcome = march(&field, ro, Vec3::new(0.0, 0.0, 1.0), &scene);
    // The first sample is already under the threshold, and a hit reports
    // the pre-step point.
    assert_eq!(outcome, MarchOutcome::Hit { point: ro });
}
