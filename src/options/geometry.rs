use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Geometry detail options for primitives, bonds and the tube surface.
pub struct GeometryOptions {
    /// Longitudinal subdivisions of the unit sphere.
    pub sphere_slices: u32,
    /// Latitudinal subdivisions of the unit sphere.
    pub sphere_stacks: u32,
    /// Angular subdivisions of the unit cylinder.
    pub cylinder_segments: u32,
    /// Bond cylinder radius in angstroms.
    pub bond_radius: f32,
    /// Fraction of the element radius a bond is pulled back from its atom.
    pub bond_inset_scale: f32,
    /// Constant subtracted from the bond inset, leaving a small visual gap.
    pub bond_inset_gap: f32,
    /// Fraction of the element radius used for heteroatom spheres.
    pub het_sphere_scale: f32,
    /// Spline segments between consecutive residues of the tube surface.
    pub segments_per_residue: u32,
    /// Vertices around each tube cross-section.
    pub cross_section_verts: u32,
    /// Coil tube radius in angstroms.
    pub coil_radius: f32,
    /// Helix ribbon full width.
    pub helix_width: f32,
    /// Helix ribbon full thickness.
    pub helix_thickness: f32,
    /// Strand sheet full width.
    pub strand_width: f32,
    /// Strand sheet full thickness.
    pub strand_thickness: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_slices: 15,
            sphere_stacks: 15,
            cylinder_segments: 24,
            bond_radius: 0.25,
            bond_inset_scale: 0.75,
            bond_inset_gap: 0.1,
            het_sphere_scale: 0.75,
            segments_per_residue: 6,
            cross_section_verts: 12,
            coil_radius: 0.35,
            helix_width: 2.0,
            helix_thickness: 0.5,
            strand_width: 2.2,
            strand_thickness: 0.4,
        }
    }
}
