//! Per-cell stencil evaluation with source pinning.

use crate::neighborhood::gather;
use crate::stencil::Stencil;
use settle_core::{Grid, Sources};
use settle_space::BoundaryMode;

/// Compute the new value for the cell at `(row, col)`.
///
/// If the cell is a pinned source, the result is the grid's current
/// value there, unchanged — source cells are invariant under every
/// stencil. Otherwise the four neighbors are gathered under `mode` and
/// the stencil is applied.
///
/// This function has no side effects; the iteration driver is
/// responsible for committing the returned value.
///
/// # Examples
///
/// ```
/// use settle_core::{Grid, SourcePoint, Sources};
/// use settle_space::BoundaryMode;
/// use settle_stencil::{evaluate, FourPointBlend};
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let sources: Sources = [SourcePoint::new(1, 1, 100.0)].into_iter().collect();
/// sources.seed(&mut grid).unwrap();
/// let blend = FourPointBlend::new(1.0).unwrap();
///
/// // Source cell: invariant.
/// assert_eq!(evaluate(&grid, &sources, &blend, BoundaryMode::Bounded, 1, 1), 100.0);
/// // Neighbor of the source: picks up a quarter of its value.
/// assert_eq!(evaluate(&grid, &sources, &blend, BoundaryMode::Bounded, 0, 1), 25.0);
/// ```
pub fn evaluate<S: Stencil + ?Sized>(
    grid: &Grid,
    sources: &Sources,
    stencil: &S,
    mode: BoundaryMode,
    row: u32,
    col: u32,
) -> f64 {
    if sources.contains(row, col) {
        return grid.get(row, col);
    }
    let neighbors = gather(grid, mode, row, col);
    stencil.apply(grid.get(row, col), &neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencils::{FourPointBlend, Identity};
    use crate::Neighborhood;
    use settle_core::SourcePoint;

    #[test]
    fn source_cell_is_invariant_under_any_stencil() {
        let mut grid = Grid::new(2, 2).unwrap();
        let sources: Sources = [SourcePoint::new(0, 0, 7.0)].into_iter().collect();
        sources.seed(&mut grid).unwrap();

        let explode = |_: f64, _: &Neighborhood| f64::MAX;
        for mode in [BoundaryMode::Bounded, BoundaryMode::Cyclic] {
            assert_eq!(evaluate(&grid, &sources, &explode, mode, 0, 0), 7.0);
        }
    }

    #[test]
    fn source_pinning_reads_grid_not_configured_value() {
        // Pinning keeps whatever the grid currently holds at the source
        // coordinate; seeding is the caller's job.
        let grid = Grid::new(2, 2).unwrap(); // deliberately not seeded
        let sources: Sources = [SourcePoint::new(0, 0, 7.0)].into_iter().collect();
        assert_eq!(
            evaluate(&grid, &sources, &Identity, BoundaryMode::Bounded, 0, 0),
            0.0
        );
    }

    #[test]
    fn non_source_cell_applies_stencil() {
        let grid = Grid::from_rows(&[vec![0.0, 4.0], vec![8.0, 0.0]]).unwrap();
        let sources = Sources::new();
        let blend = FourPointBlend::new(1.0).unwrap();
        // Bounded (0,0): right=4, down=8, up=left=0 -> mean 3.
        assert_eq!(
            evaluate(&grid, &sources, &blend, BoundaryMode::Bounded, 0, 0),
            3.0
        );
        // Cyclic (0,0): right=4, left=4, up=8, down=8 -> mean 6.
        assert_eq!(
            evaluate(&grid, &sources, &blend, BoundaryMode::Cyclic, 0, 0),
            6.0
        );
    }

    #[test]
    fn identity_evaluation_matches_cell() {
        let grid = Grid::from_rows(&[vec![1.5, -2.0]]).unwrap();
        let sources = Sources::new();
        assert_eq!(
            evaluate(&grid, &sources, &Identity, BoundaryMode::Bounded, 0, 1),
            -2.0
        );
    }
}
