//! Per-chain ribbon surfaces.
//!
//! [`ChainSurface`] is the seam between mesh composition and the ribbon
//! geometry algorithm: the composer hands over a chain's residues in order
//! and receives an uncolored triangle mesh. [`TubeSurface`] is the built-in
//! implementation: a Catmull-Rom spline through each residue's reference
//! atom, swept with an elliptical cross-section whose shape follows the
//! residue's secondary structure.

mod spline;

use std::f32::consts::TAU;

use glam::Vec3;

use self::spline::{catmull_rom, compute_rmf, with_tangents, SplinePoint};
use crate::mesh::{Mesh, Triangle};
use crate::options::GeometryOptions;
use crate::structure::{Residue, SecondaryStructure};

/// Produces one triangulated surface for an ordered chain of residues.
pub trait ChainSurface: Send + Sync {
    /// Surface for `residues`, in chain order. Colors are left to the
    /// caller.
    fn surface(&self, residues: &[&Residue]) -> Mesh;
}

/// Half-extents of the cross-section along the frame normal and binormal.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Profile {
    half_width: f32,
    half_thickness: f32,
}

impl Profile {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            half_width: self.half_width
                + (other.half_width - self.half_width) * t,
            half_thickness: self.half_thickness
                + (other.half_thickness - self.half_thickness) * t,
        }
    }
}

/// Swept-ellipse tube along the reference-atom trace.
#[derive(Debug, Clone)]
pub struct TubeSurface {
    geometry: GeometryOptions,
    reference_atom: String,
}

impl TubeSurface {
    /// Tube using `geometry` dimensions, tracing atoms named
    /// `reference_atom`.
    #[must_use]
    pub fn new(geometry: &GeometryOptions, reference_atom: &str) -> Self {
        Self {
            geometry: geometry.clone(),
            reference_atom: reference_atom.to_owned(),
        }
    }

    fn profile(&self, ss: SecondaryStructure) -> Profile {
        let geo = &self.geometry;
        match ss {
            SecondaryStructure::None => Profile {
                half_width: geo.coil_radius,
                half_thickness: geo.coil_radius,
            },
            SecondaryStructure::Helix => Profile {
                half_width: geo.helix_width * 0.5,
                half_thickness: geo.helix_thickness * 0.5,
            },
            SecondaryStructure::Strand => Profile {
                half_width: geo.strand_width * 0.5,
                half_thickness: geo.strand_thickness * 0.5,
            },
        }
    }

    /// Number of triangles produced for a trace of `residue_count` usable
    /// residues.
    #[must_use]
    pub fn triangle_count(&self, residue_count: usize) -> usize {
        if residue_count < 2 {
            return 0;
        }
        let spr = self.segments_per_residue();
        let csv = self.cross_section_verts();
        let samples = (residue_count - 1) * spr + 1;
        (samples - 1) * csv * 2 + csv * 2
    }

    fn segments_per_residue(&self) -> usize {
        self.geometry.segments_per_residue.max(1) as usize
    }

    fn cross_section_verts(&self) -> usize {
        self.geometry.cross_section_verts.max(3) as usize
    }
}

impl Default for TubeSurface {
    fn default() -> Self {
        Self::new(&GeometryOptions::default(), "CA")
    }
}

impl ChainSurface for TubeSurface {
    fn surface(&self, residues: &[&Residue]) -> Mesh {
        let mut positions = Vec::with_capacity(residues.len());
        let mut profiles = Vec::with_capacity(residues.len());
        for residue in residues {
            if let Some(atom) = residue.atom(&self.reference_atom) {
                positions.push(atom.position);
                profiles.push(self.profile(residue.secondary));
            }
        }
        let skipped = residues.len() - positions.len();
        if skipped > 0 {
            log::debug!(
                "tube surface: {skipped} residue(s) without {} skipped",
                self.reference_atom
            );
        }
        if positions.len() < 2 {
            return Mesh::new();
        }

        let spr = self.segments_per_residue();
        let csv = self.cross_section_verts();
        let mut points = with_tangents(&catmull_rom(&positions, spr));
        compute_rmf(&mut points);

        let rings: Vec<(Vec<Vec3>, Vec<Vec3>)> = points
            .iter()
            .enumerate()
            .map(|(k, point)| {
                let i = (k / spr).min(profiles.len() - 1);
                let next = (i + 1).min(profiles.len() - 1);
                let t = (k % spr) as f32 / spr as f32;
                ring(point, profiles[i].lerp(profiles[next], t), csv)
            })
            .collect();

        let (
            Some(first),
            Some(last),
            Some((start_ring, _)),
            Some((end_ring, _)),
        ) = (points.first(), points.last(), rings.first(), rings.last())
        else {
            return Mesh::new();
        };

        // Start cap, side strips in chain order, end cap.
        let mut triangles =
            Vec::with_capacity(self.triangle_count(positions.len()));
        for j in 0..csv {
            let jn = (j + 1) % csv;
            triangles.push(Triangle::new(
                first.pos,
                start_ring[jn],
                start_ring[j],
            ));
        }
        for pair in rings.windows(2) {
            let (ring0, normals0) = &pair[0];
            let (ring1, normals1) = &pair[1];
            for j in 0..csv {
                let jn = (j + 1) % csv;
                triangles.push(Triangle::with_normals(
                    [ring0[j], ring0[jn], ring1[j]],
                    [normals0[j], normals0[jn], normals1[j]],
                ));
                triangles.push(Triangle::with_normals(
                    [ring0[jn], ring1[jn], ring1[j]],
                    [normals0[jn], normals1[jn], normals1[j]],
                ));
            }
        }
        for j in 0..csv {
            let jn = (j + 1) % csv;
            triangles.push(Triangle::new(last.pos, end_ring[j], end_ring[jn]));
        }

        Mesh::from_triangles(triangles)
    }
}

/// Cross-section vertices and outward normals around one spline point.
fn ring(
    point: &SplinePoint,
    profile: Profile,
    verts: usize,
) -> (Vec<Vec3>, Vec<Vec3>) {
    let w = profile.half_width.max(1e-4);
    let h = profile.half_thickness.max(1e-4);
    (0..verts)
        .map(|j| {
            let (s, c) = (TAU * j as f32 / verts as f32).sin_cos();
            let pos =
                point.pos + point.normal * (w * c) + point.binormal * (h * s);
            let normal = (point.normal * (c / w) + point.binormal * (s / h))
                .normalize_or_zero();
            (pos, normal)
        })
        .unzip()
}
