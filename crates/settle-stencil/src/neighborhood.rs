//! The named four-neighbor argument struct and its gatherer.

use settle_core::Grid;
use settle_space::{neighbor, BoundaryMode, Direction};

/// The four axis-aligned neighbor values of a cell, by name.
///
/// Field order is right, up, left, down; the names remove any
/// positional ambiguity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighborhood {
    /// Value of the neighbor at `(row, col + 1)`.
    pub right: f64,
    /// Value of the neighbor at `(row - 1, col)`.
    pub up: f64,
    /// Value of the neighbor at `(row, col - 1)`.
    pub left: f64,
    /// Value of the neighbor at `(row + 1, col)`.
    pub down: f64,
}

impl Neighborhood {
    /// The four values in stencil argument order.
    pub fn values(&self) -> [f64; 4] {
        [self.right, self.up, self.left, self.down]
    }

    /// Arithmetic mean of the four neighbor values.
    ///
    /// Bounded off-grid neighbors have already been zero-filled by
    /// [`gather`], so the divisor is always 4.
    pub fn mean(&self) -> f64 {
        (self.right + self.up + self.left + self.down) / 4.0
    }
}

/// Gather the four neighbor values of `(row, col)` under `mode`.
///
/// # Examples
///
/// ```
/// use settle_core::Grid;
/// use settle_space::BoundaryMode;
/// use settle_stencil::gather;
///
/// let grid = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let nbs = gather(&grid, BoundaryMode::Bounded, 0, 0);
/// assert_eq!(nbs.right, 2.0);
/// assert_eq!(nbs.down, 3.0);
/// assert_eq!(nbs.up, 0.0);
/// assert_eq!(nbs.left, 0.0);
/// ```
pub fn gather(grid: &Grid, mode: BoundaryMode, row: u32, col: u32) -> Neighborhood {
    Neighborhood {
        right: neighbor(grid, mode, row, col, Direction::Right),
        up: neighbor(grid, mode, row, col, Direction::Up),
        left: neighbor(grid, mode, row, col, Direction::Left),
        down: neighbor(grid, mode, row, col, Direction::Down),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_interior() {
        let g = Grid::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0],
        ])
        .unwrap();
        let nbs = gather(&g, BoundaryMode::Bounded, 1, 1);
        assert_eq!(
            nbs,
            Neighborhood {
                right: 5.0,
                up: 1.0,
                left: 3.0,
                down: 7.0
            }
        );
        assert_eq!(nbs.values(), [5.0, 1.0, 3.0, 7.0]);
        assert_eq!(nbs.mean(), 4.0);
    }

    #[test]
    fn gather_cyclic_corner() {
        let g = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let nbs = gather(&g, BoundaryMode::Cyclic, 0, 0);
        assert_eq!(
            nbs,
            Neighborhood {
                right: 2.0,
                up: 3.0,
                left: 2.0,
                down: 3.0
            }
        );
    }

    #[test]
    fn mean_of_zero_filled_edges_divides_by_four() {
        let g = Grid::from_rows(&[vec![8.0]]).unwrap();
        let nbs = gather(&g, BoundaryMode::Bounded, 0, 0);
        assert_eq!(nbs.mean(), 0.0);
    }
}
