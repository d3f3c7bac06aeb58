//! Crate-level error types.

use std::fmt;

/// Errors produced by the ribbon crate.
#[derive(Debug)]
pub enum RibbonError {
    /// An atom's element symbol has no entry in the element table.
    UnknownElement {
        /// Serial number of the offending atom.
        serial: i32,
        /// Atom name (e.g. `CA`).
        atom_name: String,
        /// Element symbol as parsed.
        symbol: String,
    },
    /// A residue lacks the reference atom needed for camera fitting or
    /// space-filling geometry.
    MissingReferenceAtom {
        /// Chain identifier of the residue.
        chain_id: String,
        /// Residue sequence number.
        res_seq: i32,
        /// Residue name (e.g. `ALA`).
        res_name: String,
        /// Name of the atom that was looked up.
        atom_name: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement {
                serial,
                atom_name,
                symbol,
            } => write!(
                f,
                "unknown element {symbol:?} on atom {serial} ({atom_name})"
            ),
            Self::MissingReferenceAtom {
                chain_id,
                res_seq,
                res_name,
                atom_name,
            } => write!(
                f,
                "residue {res_name} {chain_id}:{res_seq} has no {atom_name} \
                 atom"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RibbonError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
