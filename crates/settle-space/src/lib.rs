//! Grid topology for the settle relaxation engine.
//!
//! Defines how the edges of a [`Grid`](settle_core::Grid) behave
//! ([`BoundaryMode`]), names the four stencil directions ([`Direction`]),
//! and provides the neighbor accessor ([`neighbor`]) used by the stencil
//! evaluator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod access;
mod boundary;
mod direction;

pub use access::neighbor;
pub use boundary::{resolve_axis, BoundaryMode};
pub use direction::Direction;
