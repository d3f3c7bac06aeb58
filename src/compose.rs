//! Mesh composition: ribbon, heteroatom and space-filling representations
//! of a [`Model`], and their union.
//!
//! Every method builds a fresh [`Mesh`]; the model is only read. Primitive
//! templates, the chain surface algorithm and the colormap are injected so
//! tests can swap in cheap stand-ins.

use std::borrow::Cow;

use glam::Mat4;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::bond::BondBuilder;
use crate::color::Colormap;
use crate::error::RibbonError;
use crate::mesh::primitives::PrimitiveLibrary;
use crate::mesh::Mesh;
use crate::model::Model;
use crate::options::{GeometryOptions, Options, Representation};
use crate::structure::{Atom, Chain, Residue};
use crate::surface::{ChainSurface, TubeSurface};

/// Tolerance for recognizing identity symmetry operators.
const IDENTITY_EPSILON: f32 = 1e-6;

/// Builds meshes for one model with one set of options.
pub struct MeshComposer<'a> {
    model: &'a Model,
    options: &'a Options,
    primitives: Cow<'a, PrimitiveLibrary>,
    surface: Box<dyn ChainSurface + 'a>,
    colormap: Box<dyn Colormap + 'a>,
}

impl<'a> MeshComposer<'a> {
    /// Composer with the built-in tube surface, the configured colormap and
    /// primitives at the configured resolution. The process-wide library is
    /// reused when the resolution matches the default.
    #[must_use]
    pub fn new(model: &'a Model, options: &'a Options) -> Self {
        let geo = &options.geometry;
        let primitives = if same_resolution(geo, &GeometryOptions::default())
        {
            Cow::Borrowed(PrimitiveLibrary::shared())
        } else {
            Cow::Owned(PrimitiveLibrary::new(geo))
        };
        Self {
            model,
            options,
            primitives,
            surface: Box::new(TubeSurface::new(
                geo,
                &options.display.reference_atom,
            )),
            colormap: Box::new(options.colors.colormap.ramp()),
        }
    }

    /// Use `primitives` for every sphere and cylinder.
    #[must_use]
    pub fn with_primitives(mut self, primitives: &'a PrimitiveLibrary) -> Self {
        self.primitives = Cow::Borrowed(primitives);
        self
    }

    /// Use `surface` to build each chain's ribbon.
    #[must_use]
    pub fn with_surface(mut self, surface: impl ChainSurface + 'a) -> Self {
        self.surface = Box::new(surface);
        self
    }

    /// Use `colormap` for the ribbon sequence gradient.
    #[must_use]
    pub fn with_colormap(mut self, colormap: impl Colormap + 'a) -> Self {
        self.colormap = Box::new(colormap);
        self
    }

    /// Ribbon for every chain, each colored by its own 0 → 1 sequence
    /// gradient, unioned in chain order.
    #[must_use]
    pub fn ribbon_mesh(&self) -> Mesh {
        map_ordered(self.model.chains(), |chain| self.chain_ribbon(chain))
            .into_iter()
            .collect()
    }

    fn chain_ribbon(&self, chain: &Chain) -> Mesh {
        let residues = self.model.chain_residues(chain);
        let mut mesh = self.surface.surface(&residues);
        color_by_sequence(&mut mesh, self.colormap.as_ref());
        mesh
    }

    /// Spheres for every non-water heteroatom plus sticks for every explicit
    /// connection between them. Connections touching a water or an absent
    /// serial contribute nothing.
    pub fn het_mesh(&self) -> Result<Mesh, RibbonError> {
        let display = &self.options.display;
        let het: Vec<&Atom> = self
            .model
            .het_atoms()
            .iter()
            .filter(|a| !display.is_water(&a.res_name))
            .collect();
        let waters = self.model.het_atoms().len() - het.len();
        if waters > 0 {
            log::debug!("het mesh: skipped {waters} water atom(s)");
        }

        let scale = self.options.geometry.het_sphere_scale;
        let spheres = map_ordered(&het, |a| -> Result<Mesh, RibbonError> {
            let e = a.element()?;
            let radius = e.radius() * scale;
            Ok(self.primitives.sphere(a.position, radius, e.color()))
        });
        let mut mesh = spheres.into_iter().collect::<Result<Mesh, _>>()?;

        let atoms_by_serial: FxHashMap<i32, &Atom> =
            het.iter().map(|a| (a.serial, *a)).collect();
        let bonds = BondBuilder::new(&self.primitives, &self.options.geometry);
        let mut dropped = 0usize;
        for c in self.model.connections() {
            let a1 = atoms_by_serial.get(&c.serial1).copied();
            let a2 = atoms_by_serial.get(&c.serial2).copied();
            if a1.is_none() || a2.is_none() {
                dropped += 1;
            }
            mesh.add(bonds.connection(a1, a2)?);
        }
        if dropped > 0 {
            log::debug!(
                "het mesh: {dropped} connection(s) with a missing endpoint"
            );
        }
        Ok(mesh)
    }

    /// Van der Waals sphere on every residue's reference atom. A residue
    /// without the reference atom is an error.
    pub fn space_filling_mesh(&self) -> Result<Mesh, RibbonError> {
        let name = &self.options.display.reference_atom;
        let sphere = |r: &Residue| -> Result<Mesh, RibbonError> {
            let atom = r.require_atom(name)?;
            let e = atom.element()?;
            Ok(self.primitives.sphere(atom.position, e.vdw_radius(), e.color()))
        };
        let spheres = map_ordered(self.model.residues(), sphere);
        spheres.into_iter().collect()
    }

    /// The mesh for `representation`, replicated under the symmetry
    /// operators when enabled. `Cartoon` is the ribbon followed by the
    /// heteroatom mesh; `SpaceFilling` is the reference-atom spheres alone.
    pub fn combined_mesh(
        &self,
        representation: Representation,
    ) -> Result<Mesh, RibbonError> {
        let mut mesh = match representation {
            Representation::Cartoon => {
                let mut mesh = self.ribbon_mesh();
                mesh.add(self.het_mesh()?);
                mesh
            }
            Representation::SpaceFilling => self.space_filling_mesh()?,
        };
        if self.options.display.expand_symmetry {
            mesh = self.expand_symmetry(mesh);
        }
        Ok(mesh)
    }

    /// `base` followed by a copy of `base` under each non-identity symmetry
    /// operator of the model.
    #[must_use]
    pub fn expand_symmetry(&self, base: Mesh) -> Mesh {
        let copies: Vec<Mesh> = self
            .model
            .symmetry_matrices()
            .iter()
            .filter(|m| !m.abs_diff_eq(Mat4::IDENTITY, IDENTITY_EPSILON))
            .map(|m| base.transformed(*m))
            .collect();
        log::debug!("symmetry expansion: {} copies", copies.len());
        let mut mesh = base;
        mesh.extend(copies);
        mesh
    }
}

/// Color triangle `i` of `n` with `colormap(i / (n - 1))`; a single
/// triangle gets `colormap(0)`.
pub fn color_by_sequence(mesh: &mut Mesh, colormap: &dyn Colormap) {
    let denom = mesh.len().saturating_sub(1).max(1) as f32;
    for (i, t) in mesh.triangles.iter_mut().enumerate() {
        t.color = colormap.color(i as f32 / denom);
    }
}

fn same_resolution(a: &GeometryOptions, b: &GeometryOptions) -> bool {
    a.sphere_slices == b.sphere_slices
        && a.sphere_stacks == b.sphere_stacks
        && a.cylinder_segments == b.cylinder_segments
}

/// Map in input order, on the rayon pool when `parallel` is enabled.
#[cfg(feature = "parallel")]
fn map_ordered<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(f).collect()
}

/// Map in input order, on the rayon pool when `parallel` is enabled.
#[cfg(not(feature = "parallel"))]
fn map_ordered<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(f).collect()
}
