//! Grid rendering in the four-decimal comma-separated row format.

use settle_core::Grid;
use std::fmt::Write;

/// Render a grid, one row per line, each cell as `%.4f` followed by a
/// comma.
///
/// # Examples
///
/// ```
/// use settle_core::Grid;
/// use settle_io::render_grid;
///
/// let grid = Grid::from_rows(&[vec![0.0, 1.5], vec![2.25, -1.0]]).unwrap();
/// assert_eq!(render_grid(&grid), "0.0000,1.5000,\n2.2500,-1.0000,\n");
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for &value in grid.row(row) {
            // Infallible: writing to a String cannot fail.
            let _ = write!(out, "{value:.4},");
        }
        out.push('\n');
    }
    out
}
