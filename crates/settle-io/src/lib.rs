//! Problem-file parsing and grid rendering for the settle workspace.
//!
//! The solver core operates on already-validated in-memory structures;
//! this crate is the boundary layer that produces them. [`Problem`]
//! parses the textual problem format (dimensions, pinned sources, run
//! parameters) and builds a seeded grid, rejecting out-of-bounds
//! sources before the solver ever sees them. [`render_grid`] prints a
//! grid in the four-decimal comma-separated row format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod problem;
mod render;

pub use problem::{ParseError, Problem};
pub use render::render_grid;
