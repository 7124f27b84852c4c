//! Pinned source cells: coordinates whose value is externally imposed.

use crate::error::GridError;
use crate::grid::Grid;
use indexmap::IndexMap;

/// A cell whose value is externally fixed and exempt from stencil updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePoint {
    /// Row index of the pinned cell.
    pub row: u32,
    /// Column index of the pinned cell.
    pub col: u32,
    /// The imposed value.
    pub value: f64,
}

impl SourcePoint {
    /// Create a source point at `(row, col)` holding `value`.
    pub fn new(row: u32, col: u32, value: f64) -> Self {
        Self { row, col, value }
    }
}

/// The set of pinned source cells for a solver run.
///
/// Membership is by exact coordinate equality, independent of insertion
/// order. Inserting a second source at the same coordinate replaces the
/// first. Iteration order is insertion order (deterministic).
///
/// During a run the set is read-only; the solver only queries
/// [`contains`](Sources::contains).
///
/// # Examples
///
/// ```
/// use settle_core::{Grid, SourcePoint, Sources};
///
/// let sources: Sources = [SourcePoint::new(1, 1, 100.0)].into_iter().collect();
/// let mut grid = Grid::new(3, 3).unwrap();
/// sources.seed(&mut grid).unwrap();
/// assert_eq!(grid.get(1, 1), 100.0);
/// assert!(sources.contains(1, 1));
/// assert!(!sources.contains(0, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sources {
    pinned: IndexMap<(u32, u32), f64>,
}

impl Sources {
    /// Create an empty source set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a source point, replacing any earlier source at the same cell.
    pub fn insert(&mut self, point: SourcePoint) {
        self.pinned.insert((point.row, point.col), point.value);
    }

    /// Whether `(row, col)` is a pinned source cell.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.pinned.contains_key(&(row, col))
    }

    /// The imposed value at `(row, col)`, if it is a source cell.
    pub fn value_at(&self, row: u32, col: u32) -> Option<f64> {
        self.pinned.get(&(row, col)).copied()
    }

    /// Number of distinct source cells.
    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    /// Whether the set holds no sources.
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }

    /// Iterate the sources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = SourcePoint> + '_ {
        self.pinned
            .iter()
            .map(|(&(row, col), &value)| SourcePoint { row, col, value })
    }

    /// Write every source value into `grid` at its coordinate.
    ///
    /// This is the boundary-layer validation point: a source outside the
    /// grid is rejected here, before any solver entry point sees it.
    pub fn seed(&self, grid: &mut Grid) -> Result<(), GridError> {
        for point in self.iter() {
            if point.row >= grid.rows() || point.col >= grid.cols() {
                return Err(GridError::SourceOutOfBounds {
                    row: point.row,
                    col: point.col,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
            grid.set(point.row, point.col, point.value);
        }
        Ok(())
    }
}

impl FromIterator<SourcePoint> for Sources {
    fn from_iter<I: IntoIterator<Item = SourcePoint>>(iter: I) -> Self {
        let mut sources = Self::new();
        for point in iter {
            sources.insert(point);
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact_coordinate() {
        let sources: Sources = [SourcePoint::new(2, 3, 1.0)].into_iter().collect();
        assert!(sources.contains(2, 3));
        assert!(!sources.contains(3, 2));
        assert_eq!(sources.value_at(2, 3), Some(1.0));
        assert_eq!(sources.value_at(0, 0), None);
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut sources = Sources::new();
        sources.insert(SourcePoint::new(1, 1, 10.0));
        sources.insert(SourcePoint::new(1, 1, 20.0));
        assert_eq!(sources.len(), 1);
        assert_eq!(sources.value_at(1, 1), Some(20.0));
    }

    #[test]
    fn iteration_is_insertion_order() {
        let mut sources = Sources::new();
        sources.insert(SourcePoint::new(2, 2, 1.0));
        sources.insert(SourcePoint::new(0, 0, 2.0));
        let coords: Vec<(u32, u32)> = sources.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(coords, vec![(2, 2), (0, 0)]);
    }

    #[test]
    fn seed_writes_values() {
        let sources: Sources = [SourcePoint::new(0, 0, 5.0), SourcePoint::new(1, 2, -3.0)]
            .into_iter()
            .collect();
        let mut grid = Grid::new(2, 3).unwrap();
        sources.seed(&mut grid).unwrap();
        assert_eq!(grid.get(0, 0), 5.0);
        assert_eq!(grid.get(1, 2), -3.0);
    }

    #[test]
    fn seed_rejects_out_of_bounds() {
        let sources: Sources = [SourcePoint::new(2, 0, 1.0)].into_iter().collect();
        let mut grid = Grid::new(2, 2).unwrap();
        let err = sources.seed(&mut grid).unwrap_err();
        assert_eq!(
            err,
            GridError::SourceOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn empty_set() {
        let sources = Sources::new();
        assert!(sources.is_empty());
        assert_eq!(sources.len(), 0);
        let mut grid = Grid::new(1, 1).unwrap();
        sources.seed(&mut grid).unwrap();
        assert_eq!(grid.total(), 0.0);
    }
}
