use super::Residue;

/// An ordered run of residues sharing a chain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Chain identifier.
    pub chain_id: String,
    /// Indices into the owning model's residue list, in sequence order.
    pub residues: Vec<usize>,
}

/// Group residues into chains by chain identifier. Chains appear in order of
/// their first residue; residues keep their input order within a chain.
#[must_use]
pub fn chains_for_residues(residues: &[Residue]) -> Vec<Chain> {
    let mut chains: Vec<Chain> = Vec::new();
    for (i, residue) in residues.iter().enumerate() {
        match chains.iter_mut().find(|c| c.chain_id == residue.chain_id) {
            Some(chain) => chain.residues.push(i),
            None => chains.push(Chain {
                chain_id: residue.chain_id.clone(),
                residues: vec![i],
            }),
        }
    }
    chains
}
