//! Secondary structure assignment from helix/strand annotations.
//!
//! Every residue is tested against every helix range, then every strand
//! range. A match overwrites the label, so a residue covered by both ends up
//! [`SecondaryStructure::Strand`]. Overlaps are logged, not rejected.

use crate::structure::{
    Helix, Residue, ResidueRange, SecondaryStructure, Strand,
};

/// Label each residue in place. Residues outside every range keep
/// [`SecondaryStructure::None`].
pub fn assign_secondary_structure(
    residues: &mut [Residue],
    helices: &[Helix],
    strands: &[Strand],
) {
    let mut overlaps = 0usize;
    for residue in residues.iter_mut() {
        let mut in_helix = false;
        for helix in helices {
            if helix.contains(residue) {
                residue.secondary = SecondaryStructure::Helix;
                in_helix = true;
            }
        }
        for strand in strands {
            if strand.contains(residue) {
                if in_helix {
                    overlaps += 1;
                    in_helix = false;
                }
                residue.secondary = SecondaryStructure::Strand;
            }
        }
    }
    if overlaps > 0 {
        log::warn!(
            "{overlaps} residue(s) covered by both a helix and a strand; \
             labeled as strand"
        );
    }
}

/// Count residues per label as `(none, helix, strand)`.
#[must_use]
pub fn secondary_structure_counts(
    residues: &[Residue],
) -> (usize, usize, usize) {
    residues
        .iter()
        .fold((0, 0, 0), |(n, h, s), r| match r.secondary {
            SecondaryStructure::None => (n + 1, h, s),
            SecondaryStructure::Helix => (n, h + 1, s),
            SecondaryStructure::Strand => (n, h, s + 1),
        })
}
