use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera framing parameters used by the camera fit.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 5.0, max = 120.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(title = "Aspect", range(min = 0.01))]
    pub aspect: f32,
    /// Multiplier applied to the fitted distance and ortho extent.
    #[schemars(title = "Padding", range(min = 1.0, max = 3.0))]
    pub padding: f32,
    /// Lower bound for the near clipping plane.
    pub znear_min: f32,
    /// Eye distance of the fallback pose used for empty structures.
    pub default_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            aspect: 1.0,
            padding: 1.05,
            znear_min: 0.1,
            default_distance: 50.0,
        }
    }
}

/// Narrowest and widest usable vertical field of view, in degrees.
const FOVY_RANGE: (f32, f32) = (5.0, 120.0);
/// Smallest usable aspect ratio.
const MIN_ASPECT: f32 = 0.01;

impl CameraOptions {
    /// Copy with `fovy` clamped to 5..=120 degrees and `aspect` to at least
    /// 0.01. Non-finite values fall back to the defaults.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let fovy = if self.fovy.is_finite() {
            self.fovy.clamp(FOVY_RANGE.0, FOVY_RANGE.1)
        } else {
            defaults.fovy
        };
        let aspect = if self.aspect.is_finite() {
            self.aspect.max(MIN_ASPECT)
        } else {
            defaults.aspect
        };
        Self {
            fovy,
            aspect,
            ..self.clone()
        }
    }
}
