//! The assembled structure model.
//!
//! [`Model::new`] groups atoms into residues, labels their secondary
//! structure and groups residues into chains. The model is immutable after
//! construction; meshes and cameras are derived on demand.

use glam::{Mat4, Vec3};

use crate::camera::{fit_camera, Camera};
use crate::compose::MeshComposer;
use crate::error::RibbonError;
use crate::mesh::Mesh;
use crate::options::{Options, Representation};
use crate::secondary_structure::{
    assign_secondary_structure, secondary_structure_counts,
};
use crate::structure::{
    chains_for_residues, residues_for_atoms, Atom, Chain, Connection, Helix,
    Residue, Strand,
};

/// Parsed records handed to [`Model::new`].
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Polymer atoms in file order.
    pub atoms: Vec<Atom>,
    /// Heteroatoms (ligands, ions, waters) in file order.
    pub het_atoms: Vec<Atom>,
    /// Explicit bonds by atom serial.
    pub connections: Vec<Connection>,
    /// Helix ranges.
    pub helices: Vec<Helix>,
    /// Strand ranges.
    pub strands: Vec<Strand>,
    /// Crystallographic symmetry operators.
    pub symmetry_matrices: Vec<Mat4>,
}

/// Atoms, residues and chains of one structure.
#[derive(Debug, Clone)]
pub struct Model {
    atoms: Vec<Atom>,
    het_atoms: Vec<Atom>,
    connections: Vec<Connection>,
    helices: Vec<Helix>,
    strands: Vec<Strand>,
    residues: Vec<Residue>,
    chains: Vec<Chain>,
    symmetry_matrices: Vec<Mat4>,
}

impl Model {
    /// Build residues, secondary structure labels and chains from parsed
    /// records.
    #[must_use]
    pub fn new(structure: Structure) -> Self {
        let Structure {
            atoms,
            het_atoms,
            connections,
            helices,
            strands,
            symmetry_matrices,
        } = structure;

        let mut residues = residues_for_atoms(&atoms);
        assign_secondary_structure(&mut residues, &helices, &strands);
        let chains = chains_for_residues(&residues);

        let (coil, helix, strand) = secondary_structure_counts(&residues);
        log::info!(
            "model: {} atoms, {} het atoms, {} residues in {} chain(s) \
             (helix {helix}, strand {strand}, coil {coil})",
            atoms.len(),
            het_atoms.len(),
            residues.len(),
            chains.len(),
        );

        Self {
            atoms,
            het_atoms,
            connections,
            helices,
            strands,
            residues,
            chains,
            symmetry_matrices,
        }
    }

    /// Polymer atoms in input order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Heteroatoms in input order.
    #[must_use]
    pub fn het_atoms(&self) -> &[Atom] {
        &self.het_atoms
    }

    /// Explicit bonds.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Helix ranges as given.
    #[must_use]
    pub fn helices(&self) -> &[Helix] {
        &self.helices
    }

    /// Strand ranges as given.
    #[must_use]
    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    /// Residues in input order, with secondary structure assigned.
    #[must_use]
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Chains in order of first appearance.
    #[must_use]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Symmetry operators as given.
    #[must_use]
    pub fn symmetry_matrices(&self) -> &[Mat4] {
        &self.symmetry_matrices
    }

    /// The residues of `chain`, in sequence order.
    #[must_use]
    pub fn chain_residues(&self, chain: &Chain) -> Vec<&Residue> {
        chain
            .residues
            .iter()
            .filter_map(|&i| self.residues.get(i))
            .collect()
    }

    /// Position of every residue's `reference_atom`, in residue order.
    pub fn reference_points(
        &self,
        reference_atom: &str,
    ) -> Result<Vec<Vec3>, RibbonError> {
        self.residues
            .iter()
            .map(|r| r.require_atom(reference_atom).map(|a| a.position))
            .collect()
    }

    /// A composer over this model with `options`.
    #[must_use]
    pub fn composer<'a>(&'a self, options: &'a Options) -> MeshComposer<'a> {
        MeshComposer::new(self, options)
    }

    /// Combined mesh for `representation` with default options.
    pub fn combined_mesh(
        &self,
        representation: Representation,
    ) -> Result<Mesh, RibbonError> {
        self.composer(&Options::default())
            .combined_mesh(representation)
    }

    /// Combined mesh for the representation and settings in `options`.
    pub fn combined_mesh_with(
        &self,
        options: &Options,
    ) -> Result<Mesh, RibbonError> {
        self.composer(options)
            .combined_mesh(options.display.representation)
    }

    /// Camera framing every residue's reference atom after applying `view`,
    /// with default options.
    pub fn fit_camera(&self, view: Mat4) -> Result<Camera, RibbonError> {
        self.fit_camera_with(view, &Options::default())
    }

    /// Camera framing every residue's reference atom after applying `view`.
    /// A residue without the reference atom is an error.
    pub fn fit_camera_with(
        &self,
        view: Mat4,
        options: &Options,
    ) -> Result<Camera, RibbonError> {
        let points: Vec<Vec3> = self
            .reference_points(&options.display.reference_atom)?
            .into_iter()
            .map(|p| view.transform_point3(p))
            .collect();
        Ok(fit_camera(&points, &options.camera))
    }
}
