use super::Residue;

/// Anything that can say whether a residue falls inside it.
pub trait ResidueRange {
    /// Whether `residue` lies inside this range.
    fn contains(&self, residue: &Residue) -> bool;
}

/// An inclusive run of residues on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRange {
    /// Chain identifier.
    pub chain_id: String,
    /// First residue sequence number, inclusive.
    pub start: i32,
    /// Last residue sequence number, inclusive.
    pub end: i32,
}

impl SegmentRange {
    /// Range `start..=end` on `chain_id`.
    #[must_use]
    pub fn new(chain_id: &str, start: i32, end: i32) -> Self {
        Self {
            chain_id: chain_id.to_owned(),
            start,
            end,
        }
    }
}

impl ResidueRange for SegmentRange {
    fn contains(&self, residue: &Residue) -> bool {
        residue.chain_id == self.chain_id
            && residue.res_seq >= self.start
            && residue.res_seq <= self.end
    }
}

/// A helix annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helix {
    /// Residues covered by the helix.
    pub range: SegmentRange,
}

impl Helix {
    /// Helix over `start..=end` on `chain_id`.
    #[must_use]
    pub fn new(chain_id: &str, start: i32, end: i32) -> Self {
        Self {
            range: SegmentRange::new(chain_id, start, end),
        }
    }
}

impl ResidueRange for Helix {
    fn contains(&self, residue: &Residue) -> bool {
        self.range.contains(residue)
    }
}

/// A beta strand annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    /// Residues covered by the strand.
    pub range: SegmentRange,
}

impl Strand {
    /// Strand over `start..=end` on `chain_id`.
    #[must_use]
    pub fn new(chain_id: &str, start: i32, end: i32) -> Self {
        Self {
            range: SegmentRange::new(chain_id, start, end),
        }
    }
}

impl ResidueRange for Strand {
    fn contains(&self, residue: &Residue) -> bool {
        self.range.contains(residue)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::structure::residues_for_atoms;
    use crate::structure::test_support::ca;

    #[test]
    fn bounds_are_inclusive_and_chain_scoped() {
        let residues = residues_for_atoms(&[
            ca(1, "A", 4, Vec3::ZERO),
            ca(2, "A", 5, Vec3::X),
            ca(3, "A", 9, Vec3::Y),
            ca(4, "A", 10, Vec3::Z),
            ca(5, "B", 6, Vec3::ONE),
        ]);
        let helix = Helix::new("A", 5, 9);
        let hits: Vec<bool> =
            residues.iter().map(|r| helix.contains(r)).collect();
        assert_eq!(hits, vec![false, true, true, false, false]);
    }
}
