//! Iteration driver and convergence controller for the settle workspace.
//!
//! A [`sweep`] visits every cell of the grid once, committing stencil
//! updates in place and returning the post-sweep total. [`run`] repeats
//! sweeps until the change in total falls within tolerance or the
//! iteration cap is reached, reporting the final diff.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod report;
mod run;
mod sweep;

pub use config::{RunConfig, UpdateOrder};
pub use report::RunReport;
pub use run::run;
pub use sweep::{sweep, sweep_buffered};
