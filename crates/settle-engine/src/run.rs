//! The convergence controller: repeat sweeps until the total settles.

use crate::config::{RunConfig, UpdateOrder};
use crate::report::RunReport;
use crate::sweep::{sweep, sweep_buffered};
use settle_core::{Grid, Sources};
use settle_stencil::{Identity, Stencil};

/// Relax `grid` under `stencil` until the change in its total is within
/// `config.tolerance` or `config.max_sweeps` sweeps have run.
///
/// The controller first establishes a baseline total with an [`Identity`]
/// pass (a sweep that mutates nothing), then loops: one real sweep,
/// `diff = |total - previous|`, stop when `diff <= tolerance` or the
/// sweep cap is hit. With `max_sweeps > 0` at most that many real sweeps
/// are performed.
///
/// The grid is mutated in place; the caller inspects it after the run.
/// Out-of-bounds sources and malformed configs are caller-contract
/// violations (see [`RunConfig`]); a stencil that never stabilizes the
/// total combined with `max_sweeps == 0` does not return.
///
/// # Examples
///
/// ```
/// use settle_core::{Grid, SourcePoint, Sources};
/// use settle_space::BoundaryMode;
/// use settle_stencil::FourPointBlend;
/// use settle_engine::{run, RunConfig};
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let sources: Sources = [SourcePoint::new(1, 1, 100.0)].into_iter().collect();
/// sources.seed(&mut grid).unwrap();
///
/// let blend = FourPointBlend::new(1.0).unwrap();
/// let config = RunConfig::new(0.001, 0, BoundaryMode::Bounded);
/// let report = run(&mut grid, &sources, &blend, &config);
///
/// assert!(report.converged);
/// assert_eq!(grid.get(1, 1), 100.0);
/// ```
pub fn run<S: Stencil + ?Sized>(
    grid: &mut Grid,
    sources: &Sources,
    stencil: &S,
    config: &RunConfig,
) -> RunReport {
    let mut snapshot = match config.order {
        UpdateOrder::InPlace => None,
        UpdateOrder::Buffered => Some(grid.clone()),
    };

    let mut previous = match snapshot.as_mut() {
        None => sweep(grid, sources, &Identity, config.boundary),
        Some(snapshot) => sweep_buffered(grid, snapshot, sources, &Identity, config.boundary),
    };
    let mut sweeps = 0u32;
    loop {
        let total = match snapshot.as_mut() {
            None => sweep(grid, sources, stencil, config.boundary),
            Some(snapshot) => sweep_buffered(grid, snapshot, sources, stencil, config.boundary),
        };
        sweeps += 1;
        let diff = (total - previous).abs();
        if diff <= config.tolerance {
            return RunReport {
                final_diff: diff,
                sweeps,
                converged: true,
            };
        }
        if config.max_sweeps > 0 && sweeps >= config.max_sweeps {
            return RunReport {
                final_diff: diff,
                sweeps,
                converged: false,
            };
        }
        previous = total;
    }
}
