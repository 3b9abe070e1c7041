use glam::{Vec3, Vec4};

use crate::scene::config::SceneConfig;

/// Squared-radius bound past which an iterate has escaped.
const ESCAPE_RADIUS_SQ: f32 = 256.0;

/// Substitute step size when the distance estimate goes non-finite.
///
/// Large enough that a march treats the point as "far away" and runs out of
/// travel budget instead of stalling on a NaN.
const FAR_SENTINEL: f32 = 256.0;

/// One evaluation of the distance field at a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceSample {
    /// Estimated distance to the fractal surface. Always finite, so it is
    /// safe to use directly as a sphere-tracing step size. Negative inside
    /// the set.
    pub distance: f32,
    /// Color signal derived from the orbit trap gathered while measuring the
    /// distance, clamped to `[0, 1]` per channel. Says nothing about
    /// geometry; consumed by shading only.
    pub trap_color: Vec3,
}

/// The 8th-power Mandelbulb distance field.
///
/// Distance is estimated by iterating the degree-8 triplex power map
/// `w -> w^8 + p` a fixed number of times while accumulating the running
/// derivative `dz`, then applying the escape-time estimator
/// `0.25 * ln(m) * sqrt(m) / dz`.
#[derive(Clone, Copy, Debug)]
pub struct DistanceField {
    iterations: u32,
}

impl DistanceField {
    /// Create a field from scene constants.
    pub fn new(scene: &SceneConfig) -> Self {
        Self {
            iterations: scene.iterations,
        }
    }

    /// Estimate the signed distance from `p` to the fractal surface.
    ///
    /// Points far outside the attractor escape on the first iteration, which
    /// keeps evaluation cheap exactly where rays take their largest steps.
    pub fn sample(&self, p: Vec3) -> DistanceSample {
        let mut w = p;
        let mut m = w.dot(w);

        // Orbit trap: componentwise minima of |iterate| and of the squared
        // radius, seeded from the input point itself.
        let mut trap = Vec4::new(w.x.abs(), w.y.abs(), w.z.abs(), m);
        let mut dz = 1.0_f32;

        for _ in 0..self.iterations {
            // Running derivative of the degree-8 power map: |w|^7 scaling.
            let m2 = m * m;
            let m4 = m2 * m2;
            dz = 8.0 * (m4 * m2 * m).sqrt() * dz + 1.0;

            // Closed-form polynomial expansion of the degree-8 triplex power,
            // offset by the original point: w = w^8 + p.
            let x = w.x;
            let x2 = x * x;
            let x4 = x2 * x2;
            let y = w.y;
            let y2 = y * y;
            let y4 = y2 * y2;
            let z = w.z;
            let z2 = z * z;
            let z4 = z2 * z2;

            let k3 = x2 + z2;
            let k2 = 1.0 / (k3 * k3 * k3 * k3 * k3 * k3 * k3).sqrt();
            let k1 = x4 + y4 + z4 - 6.0 * y2 * z2 - 6.0 * x2 * y2 + 2.0 * z2 * x2;
            let k4 = x2 - y2 + z2;

            w.x = p.x
                + 64.0 * x * y * z * (x2 - z2) * k4 * (x4 - 6.0 * x2 * z2 + z4) * k1 * k2;
            w.y = p.y - 16.0 * y2 * k3 * k4 * k4 + k1 * k1;
            w.z = p.z
                - 8.0 * y * k4 * (x4 * x4 - 28.0 * x4 * x2 * z2 + 70.0 * x4 * z4
                    - 28.0 * x2 * z2 * z4 + z4 * z4) * k1 * k2;

            // Trap minima take the squared radius from before this step.
            trap = Vec4::new(
                w.x.abs().min(trap.x),
                w.y.abs().min(trap.y),
                w.z.abs().min(trap.z),
                m.min(trap.w),
            );

            m = w.dot(w);
            if m > ESCAPE_RADIUS_SQ {
                break;
            }
        }

        let trap_color = Vec3::new(m.min(1.0), trap.y.min(1.0), trap.z.min(1.0));

        let distance = 0.25 * m.ln() * m.sqrt() / dz;
        let distance = if distance.is_finite() {
            distance
        } else {
            FAR_SENTINEL
        };

        DistanceSample {
            distance,
            trap_color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/distance.rs"]
mod tests;
