use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::foundation::core::Canvas;
use crate::render::march::{MarchOutcome, march};
use crate::scene::config::SceneConfig;
use crate::scene::distance::DistanceField;

/// Floor applied to the diffuse term so hit surfaces never go fully dark.
const AMBIENT_FLOOR: f32 = 0.08;

/// Downward camera tilt around the view x axis, in radians.
const CAMERA_TILT: f32 = 0.11 * PI;

/// Rotate `(a, b)` by `angle` radians within their shared plane.
fn rot2(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

/// Shade one output pixel at timeline time `t` seconds.
///
/// View-plane coordinates are centered and scaled by the frame height, which
/// preserves aspect ratio for any canvas. The camera bobs toward and away
/// from the fractal on z while both it and the view direction orbit the y
/// axis over time.
///
/// Returns linear color with every channel in `[0, 1]`; misses shade to
/// black.
pub fn shade(
    field: &DistanceField,
    scene: &SceneConfig,
    canvas: Canvas,
    x: u32,
    y: u32,
    t: f32,
) -> Vec3 {
    let w = canvas.width as f32;
    let h = canvas.height as f32;
    let uv = Vec2::new((x as f32 - 0.5 * w) / h, (y as f32 - 0.5 * h) / h);

    let mut ro = Vec3::new(0.0, 1.2, -1.0 - 2.0 * (t.sin() / 2.0 + 0.5));
    let mut rd = Vec3::new(uv.x, -uv.y, 1.0).normalize();

    (rd.y, rd.z) = rot2(rd.y, rd.z, CAMERA_TILT);
    (rd.x, rd.z) = rot2(rd.x, rd.z, t);
    (ro.x, ro.z) = rot2(ro.x, ro.z, t);

    let MarchOutcome::Hit { point } = march(field, ro, rd, scene) else {
        return Vec3::ZERO;
    };

    let surface = field.surface_sample(point, scene.normal_epsilon);
    let light_dir = Vec3::new(PI.cos(), 1.0, PI.sin()).normalize();
    let light = surface.normal.dot(light_dir).max(AMBIENT_FLOOR);

    surface.trap_color * light
}

#[cfg(test)]
#[path = "../../tests/unit/render/shade.rs"]
mod tests;
