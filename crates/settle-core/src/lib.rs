//! Core types for the settle relaxation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! scalar field storage ([`Grid`]), pinned source cells ([`SourcePoint`],
//! [`Sources`]), and the shared error type ([`GridError`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod source;

pub use error::GridError;
pub use grid::Grid;
pub use source::{SourcePoint, Sources};
