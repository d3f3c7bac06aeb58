//! Spline math and frame computation for the tube surface.
//!
//! Pure Vec3 → Vec3 transforms with no secondary-structure dependencies.

use glam::Vec3;

/// A point along the spline with position, tangent, and frame vectors.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplinePoint {
    pub pos: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Catmull-Rom spline interpolation (passes through all control points).
///
/// Emits `segments_per_span` points per span plus the final control point,
/// so `n` control points give `(n - 1) * segments_per_span + 1` samples.
pub(crate) fn catmull_rom(
    points: &[Vec3],
    segments_per_span: usize,
) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 || segments_per_span == 0 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity((n - 1) * segments_per_span + 1);
    for i in 0..n - 1 {
        // Phantom end points mirror the neighbor across the boundary.
        let p0 = if i == 0 {
            points[0] * 2.0 - points[1]
        } else {
            points[i - 1]
        };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 >= n {
            points[n - 1] * 2.0 - points[n - 2]
        } else {
            points[i + 2]
        };

        for j in 0..segments_per_span {
            let t = j as f32 / segments_per_span as f32;
            let t2 = t * t;
            let t3 = t2 * t;

            let pos = 0.5
                * ((2.0 * p1)
                    + (-p0 + p2) * t
                    + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                    + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3);
            result.push(pos);
        }
    }

    result.push(points[n - 1]);
    result
}

/// Attach finite-difference tangents to sampled positions. Zero-length
/// steps inherit the previous tangent.
pub(crate) fn with_tangents(positions: &[Vec3]) -> Vec<SplinePoint> {
    let n = positions.len();
    let mut out: Vec<SplinePoint> = Vec::with_capacity(n);
    for i in 0..n {
        let prev = positions[i.saturating_sub(1)];
        let next = positions[(i + 1).min(n - 1)];
        let fallback = out.last().map_or(Vec3::X, |p| p.tangent);
        let tangent = (next - prev).try_normalize().unwrap_or(fallback);
        out.push(SplinePoint {
            pos: positions[i],
            tangent,
            normal: Vec3::ZERO,
            binormal: Vec3::ZERO,
        });
    }
    out
}

/// Squared step length below which two samples count as coincident.
const MIN_STEP_SQ: f32 = 1e-10;

/// A unit vector perpendicular to `tangent`.
fn seed_normal(tangent: Vec3) -> Vec3 {
    let helper = if tangent.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    tangent.cross(helper).normalize_or_zero()
}

/// Mirror `v` in the plane through the origin with normal `axis`. A
/// near-zero `axis` leaves `v` as is.
fn reflect(v: Vec3, axis: Vec3) -> Vec3 {
    let len_sq = axis.length_squared();
    if len_sq < MIN_STEP_SQ {
        v
    } else {
        v - axis * (2.0 * axis.dot(v) / len_sq)
    }
}

/// Fill in normal and binormal along the samples as rotation-minimizing
/// frames, carried forward by double reflection (Wang et al. 2008). The
/// first normal is an arbitrary perpendicular; coincident samples repeat the
/// previous normal.
pub(crate) fn compute_rmf(points: &mut [SplinePoint]) {
    let Some(first) = points.first_mut() else {
        return;
    };
    first.normal = seed_normal(first.tangent);
    first.binormal = first.tangent.cross(first.normal).normalize_or_zero();

    for i in 1..points.len() {
        let prev = points[i - 1];
        let tangent = points[i].tangent;
        let step = points[i].pos - prev.pos;
        let normal = if step.length_squared() < MIN_STEP_SQ {
            prev.normal
        } else {
            let mirrored_tangent = reflect(prev.tangent, step);
            let r = reflect(
                reflect(prev.normal, step),
                tangent - mirrored_tangent,
            );
            (r - tangent * tangent.dot(r)).normalize_or(prev.normal)
        };
        points[i].normal = normal;
        points[i].binormal = tangent.cross(normal).normalize_or(prev.binormal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catmull_rom_passes_through_control_points() {
        let pts = vec![Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)];
        let out = catmull_rom(&pts, 4);
        assert_eq!(out.len(), 9);
        assert!((out[0] - pts[0]).length() < 1e-6);
        assert!((out[4] - pts[1]).length() < 1e-6);
        assert_eq!(out[8], pts[2]);
    }

    #[test]
    fn short_inputs_pass_through() {
        assert!(catmull_rom(&[], 4).is_empty());
        assert_eq!(catmull_rom(&[Vec3::ONE], 4), vec![Vec3::ONE]);
    }

    #[test]
    fn rmf_frames_are_orthonormal() {
        let samples: Vec<Vec3> = (0..40)
            .map(|i| {
                let a = i as f32 * 0.3;
                Vec3::new(a.cos() * 2.3, a.sin() * 2.3, i as f32 * 0.25)
            })
            .collect();
        let mut pts = with_tangents(&samples);
        compute_rmf(&mut pts);
        for p in &pts {
            assert!(p.tangent.dot(p.normal).abs() < 1e-4);
            assert!(p.tangent.dot(p.binormal).abs() < 1e-4);
            assert!(p.normal.dot(p.binormal).abs() < 1e-4);
            assert!((p.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn repeated_points_keep_a_tangent() {
        let pts = with_tangents(&[Vec3::ZERO, Vec3::ZERO, Vec3::X]);
        assert!(pts.iter().all(|p| p.tangent.is_normalized()));
    }

    #[test]
    fn straight_line_keeps_a_fixed_frame() {
        let samples: Vec<Vec3> =
            (0..10).map(|i| Vec3::X * i as f32).collect();
        let mut pts = with_tangents(&samples);
        compute_rmf(&mut pts);
        let n0 = pts[0].normal;
        assert!(pts.iter().all(|p| (p.normal - n0).length() < 1e-5));
    }

    #[test]
    fn coincident_samples_repeat_the_frame() {
        let samples = [Vec3::ZERO, Vec3::X, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let mut pts = with_tangents(&samples);
        compute_rmf(&mut pts);
        assert_eq!(pts[2].normal, pts[1].normal);
        assert!(pts.iter().all(|p| p.normal.is_normalized()));
    }
}
