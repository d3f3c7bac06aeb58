// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Triangle meshes and camera framing for macromolecular structures.
//!
//! A [`model::Model`] is built from parsed atom, bond and secondary-structure
//! records. From it the crate derives:
//!
//! - a cartoon ribbon per chain, colored by sequence position
//! - ball-and-stick geometry for heteroatoms and their explicit bonds
//! - a space-filling alternative to the ribbon
//! - a perspective camera that frames the chain trace under a view matrix
//!
//! # Key entry points
//!
//! - [`model::Model`] - residues, chains and the derived meshes/cameras
//! - [`compose::MeshComposer`] - mesh assembly with injectable primitives,
//!   chain surface and colormap
//! - [`options::Options`] - geometry, display, camera and color settings
//!   (TOML load/save)
//!
//! Meshes are plain triangle lists with per-triangle color; rendering is
//! left to the caller. Enable the `parallel` feature to build chains and
//! atom spheres on the rayon pool. Output is identical either way.

pub mod bond;
pub mod camera;
pub mod color;
pub mod compose;
pub mod error;
pub mod mesh;
pub mod model;
pub mod options;
pub mod secondary_structure;
pub mod structure;
pub mod surface;

pub use camera::Camera;
pub use compose::MeshComposer;
pub use error::RibbonError;
pub use mesh::{Mesh, Triangle};
pub use model::{Model, Structure};
pub use options::Options;
