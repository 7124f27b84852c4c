//! Settle: steady-state relaxation of 2D scalar fields with pinned sources.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the settle sub-crates. For most users, adding `settle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use settle::prelude::*;
//!
//! // A 3x3 cold grid with a 100-degree source pinned at the center.
//! let mut grid = Grid::new(3, 3).unwrap();
//! let sources: Sources = [SourcePoint::new(1, 1, 100.0)].into_iter().collect();
//! sources.seed(&mut grid).unwrap();
//!
//! // Relax under the four-neighbor average until the total settles.
//! let stencil = FourPointBlend::new(1.0).unwrap();
//! let config = RunConfig::new(0.001, 0, BoundaryMode::Bounded);
//! let report = run(&mut grid, &sources, &stencil, &config);
//!
//! assert!(report.converged);
//! assert_eq!(grid.get(1, 1), 100.0);          // source never moves
//! assert!(grid.get(0, 1) > grid.get(0, 0));   // heat falls off outward
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `settle-core` | Grid storage, source points, errors |
//! | [`space`] | `settle-space` | Boundary modes, directions, neighbor access |
//! | [`stencil`] | `settle-stencil` | Stencil trait, reference stencils, evaluator |
//! | [`engine`] | `settle-engine` | Sweep driver and convergence controller |
//! | [`io`] | `settle-io` | Problem-file parsing and grid rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage, source points, and errors (`settle-core`).
pub use settle_core as types;

/// Boundary modes, directions, and neighbor access (`settle-space`).
pub use settle_space as space;

/// Stencil trait, reference stencils, and the evaluator (`settle-stencil`).
pub use settle_stencil as stencil;

/// Sweep driver and convergence controller (`settle-engine`).
pub use settle_engine as engine;

/// Problem-file parsing and grid rendering (`settle-io`).
pub use settle_io as io;

/// The most commonly used types and entry points.
pub mod prelude {
    pub use settle_core::{Grid, GridError, SourcePoint, Sources};
    pub use settle_engine::{run, sweep, sweep_buffered, RunConfig, RunReport, UpdateOrder};
    pub use settle_io::{render_grid, ParseError, Problem};
    pub use settle_space::{neighbor, BoundaryMode, Direction};
    pub use settle_stencil::{
        evaluate, gather, FourPointBlend, Identity, Neighborhood, Stencil, StencilError,
    };
}
