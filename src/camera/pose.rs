use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters, plus the half-height to use for an orthographic view of the
/// same framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half-height of the orthographic view volume.
    pub ortho_extent: f32,
}

impl Camera {
    /// Pose used when there is nothing to frame: looking at the origin
    /// down -Z from `default_distance`.
    #[must_use]
    pub fn fallback(options: &CameraOptions) -> Self {
        let options = &options.clamped();
        let distance = options.default_distance.max(options.znear_min * 2.0);
        Self {
            eye: Vec3::Z * distance,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: options.fovy,
            aspect: options.aspect,
            znear: options.znear_min,
            zfar: distance * 2.0,
            ortho_extent: distance * (options.fovy.to_radians() * 0.5).tan(),
        }
    }

    /// World → view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with [0, 1] depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Orthographic projection covering `ortho_extent` vertically.
    #[must_use]
    pub fn orthographic_matrix(&self) -> Mat4 {
        let h = self.ortho_extent;
        let w = h * self.aspect;
        Mat4::orthographic_rh(-w, w, -h, h, self.znear, self.zfar)
    }

    /// Combined perspective view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Whether `point` lies inside the perspective view volume.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return false;
        }
        let ndc = clip.truncate() / clip.w;
        ndc.x.abs() <= 1.0
            && ndc.y.abs() <= 1.0
            && (0.0..=1.0).contains(&ndc.z)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::fallback(&CameraOptions::default())
    }
}
