//! Triangle meshes with per-triangle color.
//!
//! A [`Mesh`] is an ordered list of [`Triangle`]s. Union is append: the
//! triangles of the right-hand mesh follow those of the left-hand mesh, so
//! triangle counts add and index-dependent coloring stays reproducible.

pub mod primitives;

use glam::{Mat3, Mat4, Vec3};
use rustc_hash::FxHashMap;

/// A single triangle with per-vertex normals and one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertex positions, counter-clockwise when viewed from the front.
    pub positions: [Vec3; 3],
    /// Per-vertex normals.
    pub normals: [Vec3; 3],
    /// RGB color in 0..1.
    pub color: [f32; 3],
}

impl Triangle {
    /// Build a triangle whose vertex normals all equal the face normal.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let n = (b - a).cross(c - a).normalize_or_zero();
        Self {
            positions: [a, b, c],
            normals: [n; 3],
            color: [1.0; 3],
        }
    }

    /// Build a triangle with explicit vertex normals.
    #[must_use]
    pub fn with_normals(positions: [Vec3; 3], normals: [Vec3; 3]) -> Self {
        Self {
            positions,
            normals,
            color: [1.0; 3],
        }
    }

    /// Geometric face normal (zero for degenerate triangles).
    #[must_use]
    pub fn face_normal(&self) -> Vec3 {
        let [a, b, c] = self.positions;
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Centroid of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.positions;
        (a + b + c) / 3.0
    }
}

/// Flat vertex layout for handing a mesh to a renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// RGB color of the owning triangle.
    pub color: [f32; 3],
}

/// An ordered collection of colored triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Triangles in emission order.
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// An empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing triangle list.
    #[must_use]
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append `other`'s triangles after this mesh's triangles.
    pub fn add(&mut self, mut other: Mesh) {
        self.triangles.append(&mut other.triangles);
    }

    /// Paint every triangle with one color.
    pub fn set_color(&mut self, color: [f32; 3]) {
        for t in &mut self.triangles {
            t.color = color;
        }
    }

    /// Transform positions by `matrix` and normals by its inverse-transpose.
    pub fn transform(&mut self, matrix: Mat4) {
        let normal_matrix = Mat3::from_mat4(matrix).inverse().transpose();
        for t in &mut self.triangles {
            for p in &mut t.positions {
                *p = matrix.transform_point3(*p);
            }
            for n in &mut t.normals {
                *n = (normal_matrix * *n).normalize_or_zero();
            }
        }
    }

    /// A transformed copy, leaving `self` untouched.
    #[must_use]
    pub fn transformed(&self, matrix: Mat4) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    /// Replace each vertex normal with the average face normal of every
    /// triangle sharing that vertex position, weighted by the corner angle
    /// each triangle makes at the vertex.
    pub fn smooth_normals(&mut self) {
        let mut sums: FxHashMap<[u32; 3], Vec3> = FxHashMap::default();
        for t in &self.triangles {
            let n = t.face_normal();
            for i in 0..3 {
                let p = t.positions[i];
                let angle = (t.positions[(i + 1) % 3] - p)
                    .angle_between(t.positions[(i + 2) % 3] - p);
                let weight = if angle.is_finite() { angle } else { 0.0 };
                *sums.entry(position_key(p)).or_insert(Vec3::ZERO) +=
                    n * weight;
            }
        }
        for t in &mut self.triangles {
            let face = t.face_normal();
            for (p, n) in t.positions.iter().zip(t.normals.iter_mut()) {
                let sum = sums.get(&position_key(*p)).copied().unwrap_or(face);
                *n = sum.try_normalize().unwrap_or(face);
            }
        }
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.triangles.iter().flat_map(|t| t.positions);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Flatten into three vertices per triangle.
    #[must_use]
    pub fn to_vertices(&self) -> Vec<MeshVertex> {
        self.triangles
            .iter()
            .flat_map(|t| {
                (0..3).map(move |i| MeshVertex {
                    position: t.positions[i].to_array(),
                    normal: t.normals[i].to_array(),
                    color: t.color,
                })
            })
            .collect()
    }

    /// Raw vertex bytes for GPU upload or export.
    #[must_use]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }
}

impl FromIterator<Mesh> for Mesh {
    fn from_iter<I: IntoIterator<Item = Mesh>>(iter: I) -> Self {
        let mut mesh = Self::new();
        mesh.extend(iter);
        mesh
    }
}

impl Extend<Mesh> for Mesh {
    fn extend<I: IntoIterator<Item = Mesh>>(&mut self, iter: I) {
        for m in iter {
            self.add(m);
        }
    }
}

/// Hash key for a vertex position. `-0.0` folds into `0.0` so seam vertices
/// computed from opposite sides still match.
fn position_key(p: Vec3) -> [u32; 3] {
    [p.x + 0.0, p.y + 0.0, p.z + 0.0].map(f32::to_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
    }

    fn mesh_of(n: usize, color: [f32; 3]) -> Mesh {
        let mut m = Mesh::from_triangles(vec![unit_triangle(); n]);
        m.set_color(color);
        m
    }

    #[test]
    fn face_normal_follows_winding() {
        assert_eq!(unit_triangle().face_normal(), Vec3::Z);
        let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(flipped.face_normal(), -Vec3::Z);
    }

    #[test]
    fn union_adds_counts_and_preserves_order() {
        let a = mesh_of(3, [1.0, 0.0, 0.0]);
        let b = mesh_of(2, [0.0, 1.0, 0.0]);
        let c = mesh_of(4, [0.0, 0.0, 1.0]);

        let mut left = a.clone();
        left.add(b.clone());
        left.add(c.clone());

        let mut bc = b;
        bc.add(c);
        let mut right = a;
        right.add(bc);

        assert_eq!(left.len(), 9);
        assert_eq!(left, right);
        assert_eq!(left.triangles[2].color, [1.0, 0.0, 0.0]);
        assert_eq!(left.triangles[3].color, [0.0, 1.0, 0.0]);
        assert_eq!(left.triangles[8].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn collect_unions_in_order() {
        let meshes =
            vec![mesh_of(1, [0.2; 3]), Mesh::new(), mesh_of(2, [0.4; 3])];
        let all: Mesh = meshes.into_iter().collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all.triangles[0].color, [0.2; 3]);
        assert_eq!(all.triangles[1].color, [0.4; 3]);
    }

    #[test]
    fn transformed_leaves_source_untouched() {
        let base = mesh_of(1, [1.0; 3]);
        let moved = base.transformed(Mat4::from_translation(Vec3::Z * 5.0));
        assert_eq!(base.triangles[0].positions[0], Vec3::ZERO);
        assert_eq!(moved.triangles[0].positions[0], Vec3::Z * 5.0);
        assert_eq!(moved.triangles[0].normals[0], Vec3::Z);
    }

    #[test]
    fn non_uniform_scale_keeps_normals_perpendicular() {
        let tri = Triangle::new(Vec3::X, Vec3::Y, Vec3::Z);
        let mut mesh = Mesh::from_triangles(vec![tri]);
        mesh.transform(Mat4::from_scale(Vec3::new(3.0, 1.0, 0.5)));
        let t = mesh.triangles[0];
        let n = t.normals[0];
        let edge = t.positions[1] - t.positions[0];
        assert!(n.dot(edge).abs() < 1e-5);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn smooth_normals_average_shared_vertices() {
        // Two faces folded along the X axis at a right angle; both corners at
        // the shared vertices are right angles, so the weights match.
        let a = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let b = Triangle::new(Vec3::X, Vec3::ZERO, -Vec3::Z);
        let mut mesh = Mesh::from_triangles(vec![a, b]);
        mesh.smooth_normals();
        let expected = (a.face_normal() + b.face_normal()).normalize();
        assert!((mesh.triangles[0].normals[0] - expected).length() < 1e-6);
        assert!((mesh.triangles[1].normals[1] - expected).length() < 1e-6);
        // Unshared vertex keeps its face normal.
        assert!((mesh.triangles[0].normals[2] - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn bounds_of_empty_and_filled() {
        assert!(Mesh::new().bounds().is_none());
        let (lo, hi) = mesh_of(1, [1.0; 3]).bounds().unwrap();
        assert_eq!(lo, Vec3::ZERO);
        assert_eq!(hi, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn vertex_bytes_have_flat_layout() {
        let mesh = mesh_of(2, [0.5; 3]);
        let verts = mesh.to_vertices();
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[1].color, [0.5; 3]);
        let stride = size_of::<MeshVertex>();
        assert_eq!(mesh.vertex_bytes().len(), 6 * stride);
    }
}
