use glam::Vec3;

use crate::scene::config::SceneConfig;
use crate::scene::distance::DistanceField;

/// Terminal state of one ray march.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarchOutcome {
    /// The ray got within the hit threshold of the surface.
    Hit {
        /// Point at which the field reported surface proximity. This is the
        /// sample point itself, not a refined intersection.
        point: Vec3,
    },
    /// The ray exceeded its travel budget without reaching the surface.
    Miss,
}

impl MarchOutcome {
    /// `true` for [`MarchOutcome::Hit`].
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Sphere trace `ro + rd * t` through `field` until a hit or a miss.
///
/// `rd` is expected to be unit length; the caller normalizes it once and no
/// step re-normalizes. The travel budget is checked before the hit
/// threshold, so a ray that reaches the surface exactly as its budget runs
/// out is a miss. There is no independent step cap: the field substitutes a
/// large finite sentinel for non-finite estimates, which is what guarantees
/// forward progress over this scene.
pub fn march(field: &DistanceField, ro: Vec3, rd: Vec3, scene: &SceneConfig) -> MarchOutcome {
    let mut traveled = 0.0_f32;

    loop {
        let p = ro + rd * traveled;
        let step = field.sample(p).distance;
        traveled += step;
        if traveled > scene.max_distance {
            return MarchOutcome::Miss;
        }
        if step < scene.hit_epsilon {
            return MarchOutcome::Hit { point: p };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/march.rs"]
mod tests;
