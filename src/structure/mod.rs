//! Parsed structure records: atoms, explicit bonds, residues, chains and
//! secondary-structure ranges.
//!
//! These are the in-memory shapes a structure parser hands to
//! [`Model::new`](crate::model::Model::new). Atoms are immutable once built;
//! the only state computed later is each residue's secondary-structure label.

mod chain;
mod element;
mod range;
mod residue;

pub use chain::{chains_for_residues, Chain};
pub use element::Element;
use glam::Vec3;
pub use range::{Helix, ResidueRange, SegmentRange, Strand};
pub use residue::{residues_for_atoms, Residue, SecondaryStructure};

use crate::error::RibbonError;

/// One atom record (polymer `ATOM` or `HETATM`).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number assigned by the file, unique within a structure.
    pub serial: i32,
    /// Atom name within its residue (e.g. `CA`).
    pub name: String,
    /// Residue name (e.g. `ALA`, `HOH`).
    pub res_name: String,
    /// Chain identifier.
    pub chain_id: String,
    /// Residue sequence number.
    pub res_seq: i32,
    /// Position in angstroms.
    pub position: Vec3,
    /// Element symbol as written in the record.
    pub element: String,
}

impl Atom {
    /// Resolve this atom's element, failing for symbols outside the table.
    pub fn element(&self) -> Result<Element, RibbonError> {
        Element::from_symbol(&self.element).ok_or_else(|| {
            RibbonError::UnknownElement {
                serial: self.serial,
                atom_name: self.name.clone(),
                symbol: self.element.clone(),
            }
        })
    }
}

/// An explicit bond between two atoms, by serial number. Order carries no
/// meaning beyond which half of the drawn stick each atom colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// First atom serial.
    pub serial1: i32,
    /// Second atom serial.
    pub serial2: i32,
}

impl Connection {
    /// Bond between `serial1` and `serial2`.
    #[must_use]
    pub fn new(serial1: i32, serial2: i32) -> Self {
        Self { serial1, serial2 }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use glam::Vec3;

    use super::Atom;

    /// Build an atom with the fields tests care about.
    pub(crate) fn atom(
        serial: i32,
        name: &str,
        res_name: &str,
        chain_id: &str,
        res_seq: i32,
        position: Vec3,
        element: &str,
    ) -> Atom {
        Atom {
            serial,
            name: name.to_owned(),
            res_name: res_name.to_owned(),
            chain_id: chain_id.to_owned(),
            res_seq,
            position,
            element: element.to_owned(),
        }
    }

    /// A CA atom for residue `res_seq` of `chain_id` at `position`.
    pub(crate) fn ca(
        serial: i32,
        chain_id: &str,
        res_seq: i32,
        position: Vec3,
    ) -> Atom {
        atom(serial, "CA", "ALA", chain_id, res_seq, position, "C")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::atom;
    use super::*;

    #[test]
    fn known_element_resolves() {
        let a = atom(1, "FE", "HEM", "A", 201, Vec3::ZERO, "FE");
        assert_eq!(a.element().unwrap(), Element::Fe);
    }

    #[test]
    fn unknown_element_is_an_error() {
        let a = atom(7, "UNK", "LIG", "A", 300, Vec3::ZERO, "Qq");
        match a.element() {
            Err(RibbonError::UnknownElement {
                serial,
                atom_name,
                symbol,
            }) => {
                assert_eq!(serial, 7);
                assert_eq!(atom_name, "UNK");
                assert_eq!(symbol, "Qq");
            }
            other => panic!("expected UnknownElement, got {other:?}"),
        }
    }
}
