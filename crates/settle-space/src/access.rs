//! The neighbor accessor: read one axis-aligned neighbor of a cell.

use crate::boundary::{resolve_axis, BoundaryMode};
use crate::direction::Direction;
use settle_core::Grid;

/// Read the value of the neighbor of `(row, col)` in direction `dir`.
///
/// In `Cyclic` mode the neighbor index wraps modulo the axis length and
/// is always defined. In `Bounded` mode a neighbor that would fall off
/// the grid contributes a hard `0.0` — not an error and not a clamp to
/// the edge value.
///
/// Reads only; never mutates the grid.
///
/// # Examples
///
/// ```
/// use settle_core::Grid;
/// use settle_space::{neighbor, BoundaryMode, Direction};
///
/// let grid = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
///
/// // Interior lookup is mode-independent.
/// assert_eq!(neighbor(&grid, BoundaryMode::Bounded, 0, 0, Direction::Right), 2.0);
///
/// // Off the top edge: zero-fill when bounded, wrap when cyclic.
/// assert_eq!(neighbor(&grid, BoundaryMode::Bounded, 0, 0, Direction::Up), 0.0);
/// assert_eq!(neighbor(&grid, BoundaryMode::Cyclic, 0, 0, Direction::Up), 3.0);
/// ```
pub fn neighbor(grid: &Grid, mode: BoundaryMode, row: u32, col: u32, dir: Direction) -> f64 {
    let (dr, dc) = dir.offset();
    let nr = resolve_axis(row as i32 + dr, grid.rows(), mode);
    let nc = resolve_axis(col as i32 + dc, grid.cols(), mode);
    match (nr, nc) {
        (Some(r), Some(c)) => grid.get(r, c),
        _ => 0.0,
    }
}
