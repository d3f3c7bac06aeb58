use glam::Vec3;

use super::Camera;
use crate::options::CameraOptions;

/// Smallest framing radius, so a single point still gets a usable distance.
const MIN_RADIUS: f32 = 1.0;

/// Frame `points` (already in view space) with a camera on the +Z side
/// looking down -Z.
///
/// The target is the bounding-box center and the bounding sphere around it
/// must fit inside the narrower of the vertical and horizontal fields of
/// view. Empty input returns [`Camera::fallback`]. Field of view and aspect
/// are clamped first (see [`CameraOptions::clamped`]).
#[must_use]
pub fn fit_camera(points: &[Vec3], options: &CameraOptions) -> Camera {
    let options = &options.clamped();
    let Some(&first) = points.first() else {
        log::debug!("camera fit: no points, using fallback pose");
        return Camera::fallback(options);
    };

    let (lo, hi) = points
        .iter()
        .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    let center = (lo + hi) * 0.5;
    let radius = points
        .iter()
        .map(|p| p.distance(center))
        .fold(0.0_f32, f32::max)
        .max(MIN_RADIUS);

    let half_v = options.fovy.to_radians() * 0.5;
    let half_h = (half_v.tan() * options.aspect).atan();
    let half = half_v.min(half_h);
    let padding = options.padding.max(1.0);
    let distance = padding * radius / half.sin();

    Camera {
        eye: center + Vec3::Z * distance,
        target: center,
        up: Vec3::Y,
        fovy: options.fovy,
        aspect: options.aspect,
        znear: (distance - padding * radius).max(options.znear_min),
        zfar: distance + 2.0 * padding * radius,
        ortho_extent: padding * radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> Vec<Vec3> {
        (0..64)
            .map(|i| {
                let a = i as f32 * 0.7;
                Vec3::new(
                    a.cos() * 12.0 + 30.0,
                    (i as f32 * 0.31).sin() * 5.0 - 8.0,
                    a.sin() * 20.0,
                )
            })
            .collect()
    }

    #[test]
    fn every_point_is_visible() {
        let opts = CameraOptions::default();
        let points = cloud();
        let cam = fit_camera(&points, &opts);
        for p in &points {
            assert!(cam.contains_point(*p), "{p} outside frustum");
        }
    }

    #[test]
    fn wide_and_narrow_viewports_both_fit() {
        let points = cloud();
        for aspect in [0.4, 1.0, 2.5] {
            let opts = CameraOptions {
                aspect,
                ..CameraOptions::default()
            };
            let cam = fit_camera(&points, &opts);
            assert!(points.iter().all(|p| cam.contains_point(*p)));
        }
    }

    #[test]
    fn target_is_bounding_box_center() {
        let points = vec![Vec3::new(-2.0, 0.0, 0.0), Vec3::new(6.0, 4.0, 2.0)];
        let cam = fit_camera(&points, &CameraOptions::default());
        assert_eq!(cam.target, Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(cam.eye.x, 2.0);
        assert_eq!(cam.eye.y, 2.0);
        assert!(cam.eye.z > cam.target.z);
        assert_eq!(cam.up, Vec3::Y);
    }

    #[test]
    fn single_point_gets_positive_distance() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        let cam = fit_camera(&[p], &CameraOptions::default());
        assert!(cam.eye.distance(p) > 1.0);
        assert!(cam.contains_point(p));
        assert!(cam.znear > 0.0);
    }

    #[test]
    fn empty_input_falls_back() {
        let opts = CameraOptions::default();
        assert_eq!(fit_camera(&[], &opts), Camera::fallback(&opts));
    }

    #[test]
    fn degenerate_field_of_view_stays_finite() {
        let points = cloud();
        for (fovy, aspect) in [(0.0, 1.0), (30.0, 0.0), (-10.0, -1.0)] {
            let opts = CameraOptions {
                fovy,
                aspect,
                ..CameraOptions::default()
            };
            let cam = fit_camera(&points, &opts);
            assert!(cam.eye.is_finite());
            assert!(cam.znear.is_finite() && cam.zfar.is_finite());
            assert!(cam.fovy >= 5.0 && cam.aspect > 0.0);
            assert!(points.iter().all(|p| cam.contains_point(*p)));
        }
    }
}
