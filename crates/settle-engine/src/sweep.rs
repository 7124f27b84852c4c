//! One full pass of the grid: the iteration driver.

use settle_core::{Grid, Sources};
use settle_space::BoundaryMode;
use settle_stencil::{evaluate, Stencil};

/// Perform one in-place sweep and return the post-sweep grid total.
///
/// Visits every cell exactly once in row-major order (row ascending,
/// then column ascending), committing each update before moving on.
/// Neighbor reads therefore see the grid's *current* state, including
/// same-sweep updates to cells visited earlier (Gauss–Seidel). Source
/// cells are skipped but still contribute to the returned total.
///
/// No allocation: pure mutation of the grid plus a scalar accumulator.
pub fn sweep<S: Stencil + ?Sized>(
    grid: &mut Grid,
    sources: &Sources,
    stencil: &S,
    mode: BoundaryMode,
) -> f64 {
    let mut total = 0.0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let value = evaluate(grid, sources, stencil, mode, row, col);
            grid.set(row, col, value);
            total += value;
        }
    }
    total
}

/// Perform one buffered (Jacobi) sweep and return the post-sweep total.
///
/// Copies the grid into `snapshot` first; every neighbor read comes
/// from that frozen pre-sweep state, so traversal order cannot affect
/// the result. `snapshot` is caller-provided scratch so repeated sweeps
/// reuse one allocation.
///
/// # Panics
///
/// Panics if `snapshot` has different dimensions from `grid`.
pub fn sweep_buffered<S: Stencil + ?Sized>(
    grid: &mut Grid,
    snapshot: &mut Grid,
    sources: &Sources,
    stencil: &S,
    mode: BoundaryMode,
) -> f64 {
    snapshot.copy_from(grid);
    let mut total = 0.0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let value = evaluate(snapshot, sources, stencil, mode, row, col);
            grid.set(row, col, value);
            total += value;
        }
    }
    total
}
