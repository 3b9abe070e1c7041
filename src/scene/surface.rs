use glam::Vec3;

use crate::scene::distance::DistanceField;

/// Surface data estimated at a point on or near the fractal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Outward surface normal. Unit length wherever the underlying gradient
    /// is non-degenerate; a zero gradient propagates as a non-finite normal.
    pub normal: Vec3,
    /// Orbit-trap color of the most recent field evaluation, which is the
    /// z-axis probe below. Shading colors hit points with this value.
    pub trap_color: Vec3,
}

impl DistanceField {
    /// Estimate the outward surface normal at `p` with probe spacing `e`.
    ///
    /// Tangent-plane finite differences: one base distance, reused against a
    /// single one-sided probe per axis. Not central differencing; the
    /// asymmetry is part of the rendered look and must stay.
    pub fn surface_sample(&self, p: Vec3, e: f32) -> SurfaceSample {
        let d = self.sample(p).distance;
        let px = self.sample(p - Vec3::new(e, 0.0, 0.0));
        let py = self.sample(p - Vec3::new(0.0, e, 0.0));
        let pz = self.sample(p - Vec3::new(0.0, 0.0, e));

        SurfaceSample {
            normal: Vec3::new(
                d - px.distance,
                d - py.distance,
                d - pz.distance,
            )
            .normalize(),
            trap_color: pz.trap_color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/surface.rs"]
mod tests;
