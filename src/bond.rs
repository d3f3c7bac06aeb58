//! Two-tone bond sticks between explicitly connected atoms.
//!
//! Each end of a bond is pulled back from its atom center by
//! `inset_scale × element radius − inset_gap`, and the stick is split at the
//! midpoint of the two pulled-back points. Each half carries its own atom's
//! element color.

use glam::Vec3;

use crate::error::RibbonError;
use crate::mesh::primitives::PrimitiveLibrary;
use crate::mesh::Mesh;
use crate::options::GeometryOptions;
use crate::structure::{Atom, Element};

/// Builds bond geometry from a primitive library and bond dimensions.
#[derive(Debug, Clone, Copy)]
pub struct BondBuilder<'a> {
    primitives: &'a PrimitiveLibrary,
    radius: f32,
    inset_scale: f32,
    inset_gap: f32,
}

impl<'a> BondBuilder<'a> {
    /// Builder using the bond parameters from `geo`.
    #[must_use]
    pub fn new(
        primitives: &'a PrimitiveLibrary,
        geo: &GeometryOptions,
    ) -> Self {
        Self {
            primitives,
            radius: geo.bond_radius,
            inset_scale: geo.bond_inset_scale,
            inset_gap: geo.bond_inset_gap,
        }
    }

    /// Where a bond leaving `atom` toward `toward` attaches.
    #[must_use]
    pub fn attachment_point(
        &self,
        atom: &Atom,
        element: Element,
        toward: Vec3,
    ) -> Vec3 {
        let inset = element.radius() * self.inset_scale - self.inset_gap;
        atom.position + (toward - atom.position).normalize_or_zero() * inset
    }

    /// Stick between two atoms, split at the midpoint of the attachment
    /// points. A missing endpoint yields an empty mesh.
    pub fn connection(
        &self,
        a1: Option<&Atom>,
        a2: Option<&Atom>,
    ) -> Result<Mesh, RibbonError> {
        let (Some(a1), Some(a2)) = (a1, a2) else {
            return Ok(Mesh::new());
        };
        let e1 = a1.element()?;
        let e2 = a2.element()?;
        let p1 = self.attachment_point(a1, e1, a2.position);
        let p2 = self.attachment_point(a2, e2, a1.position);
        let mid = p1.lerp(p2, 0.5);

        let mut mesh =
            self.primitives.cylinder(p1, mid, self.radius, e1.color());
        mesh.add(self.primitives.cylinder(mid, p2, self.radius, e2.color()));
        Ok(mesh)
    }
}
