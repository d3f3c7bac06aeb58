//! Canonical unit primitives shared by every atom sphere and bond cylinder.
//!
//! Templates are built once and never mutated: each instance is a copy
//! transformed into place. [`PrimitiveLibrary::shared`] holds the default
//! resolution for the whole process; composers accept any library so tests
//! can inject a coarse one.

use std::f32::consts::{PI, TAU};
use std::sync::OnceLock;

use glam::{Mat4, Quat, Vec3};

use super::{Mesh, Triangle};
use crate::options::GeometryOptions;

/// Unit sphere (radius 1) and unit open cylinder (radius 1, z ∈ [-0.5,
/// 0.5]) templates with smoothed normals.
#[derive(Debug, Clone)]
pub struct PrimitiveLibrary {
    sphere: Mesh,
    cylinder: Mesh,
}

impl PrimitiveLibrary {
    /// Build templates at the resolution given by `geo`.
    #[must_use]
    pub fn new(geo: &GeometryOptions) -> Self {
        Self::with_resolution(
            geo.sphere_slices,
            geo.sphere_stacks,
            geo.cylinder_segments,
        )
    }

    /// Build templates with explicit subdivision counts. Counts are clamped
    /// to the smallest closed shape (3 slices, 2 stacks, 3 segments).
    #[must_use]
    pub fn with_resolution(
        sphere_slices: u32,
        sphere_stacks: u32,
        cylinder_segments: u32,
    ) -> Self {
        let mut sphere =
            unit_sphere(sphere_slices.max(3), sphere_stacks.max(2));
        sphere.smooth_normals();
        let mut cylinder = unit_cylinder(cylinder_segments.max(3));
        cylinder.smooth_normals();
        log::debug!(
            "primitive library: sphere {} tris, cylinder {} tris",
            sphere.len(),
            cylinder.len()
        );
        Self { sphere, cylinder }
    }

    /// Process-wide library at the default resolution, built on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<PrimitiveLibrary> = OnceLock::new();
        SHARED.get_or_init(|| Self::new(&GeometryOptions::default()))
    }

    /// Read-only unit sphere template.
    #[must_use]
    pub fn unit_sphere(&self) -> &Mesh {
        &self.sphere
    }

    /// Read-only unit cylinder template.
    #[must_use]
    pub fn unit_cylinder(&self) -> &Mesh {
        &self.cylinder
    }

    /// A sphere of `radius` centered at `center`.
    #[must_use]
    pub fn sphere(&self, center: Vec3, radius: f32, color: [f32; 3]) -> Mesh {
        let matrix = Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            Quat::IDENTITY,
            center,
        );
        let mut mesh = self.sphere.transformed(matrix);
        mesh.set_color(color);
        mesh
    }

    /// A cylinder of `radius` whose axis runs exactly from `p0` to `p1`.
    ///
    /// The template is one unit long, so the height scale is the endpoint
    /// distance; consecutive segments sharing an endpoint meet without gap
    /// or overlap. Coincident endpoints produce an empty mesh.
    #[must_use]
    pub fn cylinder(
        &self,
        p0: Vec3,
        p1: Vec3,
        radius: f32,
        color: [f32; 3],
    ) -> Mesh {
        let axis = p1 - p0;
        let height = axis.length();
        let Some(up) = axis.try_normalize() else {
            return Mesh::new();
        };
        let matrix = Mat4::from_scale_rotation_translation(
            Vec3::new(radius, radius, height),
            Quat::from_rotation_arc(Vec3::Z, up),
            (p0 + p1) * 0.5,
        );
        let mut mesh = self.cylinder.transformed(matrix);
        mesh.set_color(color);
        mesh
    }
}

impl Default for PrimitiveLibrary {
    fn default() -> Self {
        Self::new(&GeometryOptions::default())
    }
}

/// Point on the unit sphere at longitude `lon` and polar angle `polar`.
fn sphere_point(lon: f32, polar: f32) -> Vec3 {
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_l, cos_l) = lon.sin_cos();
    Vec3::new(sin_p * cos_l, sin_p * sin_l, cos_p)
}

/// UV sphere; pole rows collapse to single triangles.
fn unit_sphere(slices: u32, stacks: u32) -> Mesh {
    let mut triangles = Vec::with_capacity((slices * stacks * 2) as usize);
    for i in 0..stacks {
        let p0 = PI * i as f32 / stacks as f32;
        let p1 = PI * (i + 1) as f32 / stacks as f32;
        for j in 0..slices {
            let l0 = TAU * j as f32 / slices as f32;
            let l1 = TAU * ((j + 1) % slices) as f32 / slices as f32;
            let v00 = pole_snap(sphere_point(l0, p0), i == 0);
            let v01 = pole_snap(sphere_point(l1, p0), i == 0);
            let v10 = pole_snap(sphere_point(l0, p1), i + 1 == stacks);
            let v11 = pole_snap(sphere_point(l1, p1), i + 1 == stacks);
            if i != 0 {
                triangles.push(Triangle::new(v00, v10, v01));
            }
            if i + 1 != stacks {
                triangles.push(Triangle::new(v01, v10, v11));
            }
        }
    }
    Mesh::from_triangles(triangles)
}

/// Pole vertices computed at different longitudes must be bit-identical for
/// normal smoothing to merge them.
fn pole_snap(p: Vec3, at_pole: bool) -> Vec3 {
    if at_pole {
        Vec3::new(0.0, 0.0, p.z.signum())
    } else {
        p
    }
}

/// Open cylinder along Z, no caps.
fn unit_cylinder(segments: u32) -> Mesh {
    let mut triangles = Vec::with_capacity((segments * 2) as usize);
    for j in 0..segments {
        let a0 = TAU * j as f32 / segments as f32;
        let a1 = TAU * ((j + 1) % segments) as f32 / segments as f32;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        let b0 = Vec3::new(c0, s0, -0.5);
        let b1 = Vec3::new(c1, s1, -0.5);
        let t0 = Vec3::new(c0, s0, 0.5);
        let t1 = Vec3::new(c1, s1, 0.5);
        triangles.push(Triangle::new(b0, b1, t1));
        triangles.push(Triangle::new(b0, t1, t0));
    }
    Mesh::from_triangles(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_triangle_count() {
        let lib = PrimitiveLibrary::with_resolution(15, 15, 24);
        // Two pole rows of single triangles, the rest as quads.
        assert_eq!(lib.unit_sphere().len(), 15 * 2 + 15 * 13 * 2);
        assert_eq!(lib.unit_cylinder().len(), 48);
    }

    #[test]
    fn sphere_vertices_are_on_unit_radius_with_outward_normals() {
        let lib = PrimitiveLibrary::with_resolution(8, 6, 8);
        for t in &lib.unit_sphere().triangles {
            for (p, n) in t.positions.iter().zip(&t.normals) {
                assert!((p.length() - 1.0).abs() < 1e-5);
                assert!(n.dot(*p) > 0.8, "normal {n} at {p}");
            }
            assert!(t.face_normal().dot(t.centroid()) > 0.0);
        }
    }

    #[test]
    fn cylinder_normals_are_radial() {
        let lib = PrimitiveLibrary::with_resolution(4, 2, 12);
        for t in &lib.unit_cylinder().triangles {
            for (p, n) in t.positions.iter().zip(&t.normals) {
                let radial = Vec3::new(p.x, p.y, 0.0).normalize();
                assert!((*n - radial).length() < 1e-4);
            }
        }
    }

    #[test]
    fn instances_do_not_touch_templates() {
        let lib = PrimitiveLibrary::with_resolution(6, 4, 6);
        let before = lib.unit_sphere().clone();
        let _ = lib.sphere(Vec3::new(5.0, 0.0, 0.0), 2.0, [1.0, 0.0, 0.0]);
        let _ = lib.cylinder(Vec3::ZERO, Vec3::X, 0.5, [0.0, 1.0, 0.0]);
        assert_eq!(&before, lib.unit_sphere());
    }

    #[test]
    fn sphere_instance_is_scaled_and_colored() {
        let lib = PrimitiveLibrary::with_resolution(6, 4, 6);
        let center = Vec3::new(1.0, 2.0, 3.0);
        let mesh = lib.sphere(center, 1.5, [0.1, 0.2, 0.3]);
        let (lo, hi) = mesh.bounds().unwrap();
        assert!((hi.z - center.z - 1.5).abs() < 1e-4);
        assert!((center.z - lo.z - 1.5).abs() < 1e-4);
        assert!(mesh.triangles.iter().all(|t| t.color == [0.1, 0.2, 0.3]));
    }

    #[test]
    fn cylinder_spans_its_endpoints() {
        let lib = PrimitiveLibrary::with_resolution(6, 4, 16);
        let p0 = Vec3::new(1.0, 1.0, 1.0);
        let p1 = Vec3::new(1.0, 4.0, 1.0);
        let mesh = lib.cylinder(p0, p1, 0.25, [1.0; 3]);
        let (lo, hi) = mesh.bounds().unwrap();
        assert!((lo.y - 1.0).abs() < 1e-4);
        assert!((hi.y - 4.0).abs() < 1e-4);
        assert!((hi.x - 1.25).abs() < 1e-4);
        for t in &mesh.triangles {
            for p in &t.positions {
                // Distance from the axis equals the radius.
                let d = Vec3::new(p.x - 1.0, 0.0, p.z - 1.0).length();
                assert!((d - 0.25).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn antiparallel_axis_is_oriented() {
        let lib = PrimitiveLibrary::with_resolution(6, 4, 8);
        let mesh = lib.cylinder(Vec3::Z, -Vec3::Z, 0.5, [1.0; 3]);
        let (lo, hi) = mesh.bounds().unwrap();
        assert!((lo.z + 1.0).abs() < 1e-4);
        assert!((hi.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_endpoints_yield_nothing() {
        let lib = PrimitiveLibrary::with_resolution(6, 4, 8);
        assert!(lib.cylinder(Vec3::ONE, Vec3::ONE, 0.5, [1.0; 3]).is_empty());
    }

    #[test]
    fn shared_library_is_a_singleton() {
        let a = PrimitiveLibrary::shared();
        let b = PrimitiveLibrary::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.unit_cylinder().len(), 48);
    }
}
