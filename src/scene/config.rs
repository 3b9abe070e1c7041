use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{MarchyteError, MarchyteResult};

/// Constants of the fractal scene and its marcher.
///
/// These are knobs of the one hard-coded scene, not a general scene
/// description: the camera path and light stay fixed in the shader.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Iteration count of the escape-time recurrence.
    pub iterations: u32,
    /// Travel budget after which a ray counts as a miss.
    pub max_distance: f32,
    /// Surface-proximity threshold that terminates a march as a hit.
    pub hit_epsilon: f32,
    /// Finite-difference offset used for normal estimation.
    pub normal_epsilon: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            iterations: 4,
            max_distance: 15.0,
            hit_epsilon: 0.01,
            normal_epsilon: 0.005,
        }
    }
}

impl SceneConfig {
    fn validate(&self) -> MarchyteResult<()> {
        if self.iterations == 0 {
            return Err(MarchyteError::validation("scene iterations must be > 0"));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(MarchyteError::validation(
                "scene max_distance must be finite and > 0",
            ));
        }
        if !self.hit_epsilon.is_finite() || self.hit_epsilon <= 0.0 {
            return Err(MarchyteError::validation(
                "scene hit_epsilon must be finite and > 0",
            ));
        }
        if !self.normal_epsilon.is_finite() || self.normal_epsilon <= 0.0 {
            return Err(MarchyteError::validation(
                "scene normal_epsilon must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Full configuration for a render run.
///
/// Every field has a default (640x360, 30 fps, 6 seconds), so a JSON config
/// only needs to name the fields it overrides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output raster size.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Total animation length in frames.
    pub frames: u64,
    /// Scene and marcher constants.
    pub scene: SceneConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 640,
                height: 360,
            },
            fps: Fps { num: 30, den: 1 },
            frames: 180,
            scene: SceneConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_path(path: &Path) -> MarchyteResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| MarchyteError::serde(format!("invalid render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the config for values the renderer cannot work with.
    pub fn validate(&self) -> MarchyteResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MarchyteError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(MarchyteError::validation("fps must be non-zero"));
        }
        if self.frames == 0 {
            return Err(MarchyteError::validation("frames must be > 0"));
        }
        self.scene.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
