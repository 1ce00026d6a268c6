//! Toroidal row-major grid of `f64` cells.

use crate::torus::wrap_axis;
use tessel_core::{CellReader, GridError};

/// A `rows x cols` grid of cell values with periodic boundaries.
///
/// Dimensions are fixed for the grid's lifetime. Every accessor that
/// takes `(row, col)` wraps both indices modulo the dimensions, so
/// negative and out-of-range coordinates never error: `get(-1, 0)` is
/// `get(rows - 1, 0)` and `get(rows, 0)` is `get(0, 0)`.
///
/// `Clone` yields an independent copy, which is what double buffering
/// relies on. Equality is cell-wise.
///
/// # Examples
///
/// ```
/// use tessel_space::Grid;
///
/// let mut g = Grid::new(3, 4, 0.0).unwrap();
/// g.set(-1, 5, 1.0);
/// assert_eq!(g.get(2, 1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is
    /// zero or the cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; len],
        })
    }

    /// Create a grid from a row-major buffer.
    ///
    /// Returns `Err(GridError::ShapeMismatch)` if `cells.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<f64>) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        if cells.len() != len {
            return Err(GridError::ShapeMismatch {
                expected: len,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from literal rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = Self::checked_len(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::ShapeMismatch {
                    expected: len,
                    actual: cells.len() + row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// A grid with the same shape as `self`, all cells zero.
    ///
    /// Used as the write buffer of a step; every cell is recomputed.
    pub fn zeroed_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![0.0; self.cells.len()],
        }
    }

    fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(GridError::InvalidDimensions { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat row-major index of the wrapped coordinate.
    #[inline]
    pub fn index(&self, row: i64, col: i64) -> usize {
        wrap_axis(row, self.rows) * self.cols + wrap_axis(col, self.cols)
    }

    /// Value at the wrapped coordinate.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> f64 {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at the wrapped coordinate.
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, value: f64) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// Value at `(row, col)` without wrapping.
    ///
    /// Returns `Err(GridError::InvalidCoordinate)` outside
    /// `[0, rows) x [0, cols)`.
    pub fn get_strict(&self, row: i64, col: i64) -> Result<f64, GridError> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Err(GridError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row as usize * self.cols + col as usize])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    pub fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Sum of all cell values.
    pub fn sum(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Smallest and largest cell value.
    pub fn min_max(&self) -> (f64, f64) {
        self.cells
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Number of cells satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(f64) -> bool) -> usize {
        self.cells.iter().filter(|&&v| pred(v)).count()
    }

    /// Number of cells whose value differs from the same cell in `other`.
    ///
    /// Grids of different shape differ everywhere.
    pub fn diff_count(&self, other: &Grid) -> usize {
        if self.rows != other.rows || self.cols != other.cols {
            return self.len().max(other.len());
        }
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl CellReader for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cells(&self) -> &[f64] {
        &self.cells
    }

    fn get(&self, row: i64, col: i64) -> f64 {
        Grid::get(self, row, col)
    }
}
