use rustc_hash::FxHashMap;

use super::Atom;
use crate::error::RibbonError;

/// Secondary structure class of a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondaryStructure {
    /// No helix or strand range covers the residue.
    #[default]
    None,
    /// Inside a helix range.
    Helix,
    /// Inside a strand range.
    Strand,
}

/// A residue: its identity, its atoms keyed by name, and its secondary
/// structure label.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// Chain identifier.
    pub chain_id: String,
    /// Residue sequence number.
    pub res_seq: i32,
    /// Residue name (e.g. `ALA`).
    pub res_name: String,
    /// Atoms keyed by atom name.
    pub atoms: FxHashMap<String, Atom>,
    /// Secondary structure label, `None` until assigned.
    pub secondary: SecondaryStructure,
}

impl Residue {
    /// Atom by name, if present.
    #[must_use]
    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.get(name)
    }

    /// Atom by name, reporting the residue when it is absent.
    pub fn require_atom(&self, name: &str) -> Result<&Atom, RibbonError> {
        self.atom(name)
            .ok_or_else(|| RibbonError::MissingReferenceAtom {
                chain_id: self.chain_id.clone(),
                res_seq: self.res_seq,
                res_name: self.res_name.clone(),
                atom_name: name.to_owned(),
            })
    }
}

/// Group atoms into residues. A new residue starts whenever the
/// `(chain_id, res_seq)` pair changes from the previous atom, so the output
/// follows input order. Duplicate atom names keep the first atom.
#[must_use]
pub fn residues_for_atoms(atoms: &[Atom]) -> Vec<Residue> {
    let mut residues: Vec<Residue> = Vec::new();
    for atom in atoms {
        let starts_new = residues.last().is_none_or(|r| {
            r.chain_id != atom.chain_id || r.res_seq != atom.res_seq
        });
        if starts_new {
            residues.push(Residue {
                chain_id: atom.chain_id.clone(),
                res_seq: atom.res_seq,
                res_name: atom.res_name.clone(),
                atoms: FxHashMap::default(),
                secondary: SecondaryStructure::None,
            });
        }
        if let Some(residue) = residues.last_mut() {
            let _ = residue
                .atoms
                .entry(atom.name.clone())
                .or_insert_with(|| atom.clone());
        }
    }
    residues
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::structure::test_support::{atom, ca};

    #[test]
    fn groups_consecutive_atoms() {
        let atoms = vec![
            atom(1, "N", "ALA", "A", 1, Vec3::ZERO, "N"),
            ca(2, "A", 1, Vec3::X),
            atom(3, "N", "GLY", "A", 2, Vec3::Y, "N"),
            ca(4, "A", 2, Vec3::Z),
            ca(5, "B", 2, Vec3::ONE),
        ];
        let residues = residues_for_atoms(&atoms);
        assert_eq!(residues.len(), 3);
        assert_eq!(residues[0].atoms.len(), 2);
        assert_eq!(residues[1].res_name, "GLY");
        assert_eq!(residues[2].chain_id, "B");
        assert_eq!(residues[1].atom("CA").unwrap().serial, 4);
        assert!(residues
            .iter()
            .all(|r| r.secondary == SecondaryStructure::None));
    }

    #[test]
    fn duplicate_names_keep_first() {
        let atoms = vec![ca(1, "A", 1, Vec3::X), ca(2, "A", 1, Vec3::Y)];
        let residues = residues_for_atoms(&atoms);
        assert_eq!(residues.len(), 1);
        assert_eq!(residues[0].atom("CA").unwrap().serial, 1);
    }

    #[test]
    fn empty_input_has_no_residues() {
        assert!(residues_for_atoms(&[]).is_empty());
    }

    #[test]
    fn missing_atom_reports_residue() {
        let residues = residues_for_atoms(&[atom(
            1, "N", "SER", "C", 9, Vec3::ZERO, "N",
        )]);
        let err = residues[0].require_atom("CA").unwrap_err();
        match err {
            RibbonError::MissingReferenceAtom {
                chain_id,
                res_seq,
                res_name,
                atom_name,
            } => {
                assert_eq!(chain_id, "C");
                assert_eq!(res_seq, 9);
                assert_eq!(res_name, "SER");
                assert_eq!(atom_name, "CA");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
