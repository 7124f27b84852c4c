//! Row-major 2D scalar field storage.

use crate::error::GridError;

/// A rectangular 2D field of `f64` cell values in row-major storage.
///
/// The grid is owned by the caller for the whole life of a solver run;
/// the solver mutates it in place and never reallocates it. Coordinates
/// are `(row, col)` with `0 <= row < rows` and `0 <= col < cols`.
///
/// # Examples
///
/// ```
/// use settle_core::Grid;
///
/// let mut grid = Grid::new(3, 4).unwrap();
/// assert_eq!(grid.cell_count(), 12);
/// grid.set(1, 2, 5.0);
/// assert_eq!(grid.get(1, 2), 5.0);
/// assert_eq!(grid.total(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<f64>,
}

impl Grid {
    /// Maximum dimension size: neighbor arithmetic uses `i32` offsets,
    /// so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a zero-filled grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Grid::MAX_DIM`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows as usize,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols as usize,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0.0; rows as usize * cols as usize],
        })
    }

    /// Build a grid from explicit rows of values.
    ///
    /// All rows must have the same, non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use settle_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(grid.get(1, 0), 3.0);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 || rows[0].is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if n > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: n,
                max: Self::MAX_DIM,
            });
        }
        let m = rows[0].len();
        if m > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: m,
                max: Self::MAX_DIM,
            });
        }
        let mut cells = Vec::with_capacity(n * m);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != m {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: m,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: n as u32,
            cols: m as u32,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row as usize * self.cols as usize + col as usize
    }

    /// Read the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn get(&self, row: u32, col: u32) -> f64 {
        self.cells[self.index(row, col)]
    }

    /// Write `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: u32, col: u32, value: f64) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// The cells of one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: u32) -> &[f64] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols as usize]
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Sum of all cell values.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Copy every cell from `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the two grids have different dimensions.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "grid dimensions must match"
        );
        self.cells.copy_from_slice(&other.cells);
    }
}
