//! Stencil update rules for the settle relaxation engine.
//!
//! A [`Stencil`] is the caller-supplied local update function: given a
//! cell's current value and its four axis-aligned neighbors, it produces
//! the cell's new value. This crate defines the trait, the named
//! [`Neighborhood`] argument struct, the reference stencils
//! ([`Identity`], [`FourPointBlend`]), and the per-cell evaluator
//! ([`evaluate`]) that skips pinned source cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod evaluate;
mod neighborhood;
mod stencil;
mod stencils;

pub use evaluate::evaluate;
pub use neighborhood::{gather, Neighborhood};
pub use stencil::Stencil;
pub use stencils::{FourPointBlend, Identity, StencilError};
