use super::*;

const CANVAS: Canvas = Canvas {
    width: 16,
    height: 9,
};

fn field_and_scene() -> (DistanceField, SceneConfig) {
    let scene = SceneConfig::default();
    (DistanceField::new(&scene), scene)
}

#[test]
fn corner_pixels_shade_to_black_at_t0() {
    let (field, scene) = field_and_scene();
    for (x, y) in [(0, 0), (CANVAS.width - 1, 0)] {
        let c = shade(&field, &scene, CANVAS, x, y, 0.0);
        assert_eq!(c, Vec3::ZERO, "corner ({x},{y}) unexpectedly hit");
    }
}

#[test]
fn every_channel_stays_inside_display_range() {
    let (field, scene) = field_and_scene();
    for y in 0..CANVAS.height {
        for x in 0..CANVAS.width {
            let c = shade(&field, &scene, CANVAS, x, y, 0.0);
            for ch in [c.x, c.y, c.z] {
                assert!(
                    (0.0..=1.0).contains(&ch),
                    "channel {ch} out of range at ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn shading_is_deterministic() {
    let (field, scene) = field_and_scene();
    for y in 0..CANVAS.height {
        for x in 0..CANVAS.width {
            let a = shade(&field, &scene, CANVAS, x, y, 1.5);
            let b = shade(&field, &scene, CANVAS, x, y, 1.5);
            assert_eq!(a, b);
        }
    }
}
