use std::ops::{Add, Index, IndexMut, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::tuple::Tuple;

/// Dense 2D grid of `f64` stored flat in row-major order.
///
/// `rows * cols == data.len()` holds from construction on; a matrix is
/// never resized, only mutated through element assignment. Row and column
/// views are recomputed from the flat storage on every call, so they can
/// never drift from the grid contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-filled matrix of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Matrix from nested row data.
    ///
    /// Returns `None` when the outer sequence is empty or the rows are
    /// jagged. Malformed nested input is the one construction path where
    /// bad data is expected and handled gracefully rather than panicking.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let count = rows.len();
        let data = rows.into_iter().flatten().collect();
        Some(Self {
            data,
            rows: count,
            cols,
        })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Flat row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
    }

    /// Borrow row `row` as a contiguous slice of the flat storage.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Materialize column `col` in row order.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    /// All rows, split out of the flat storage. Recomputed per call.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// All columns, gathered in row order. Recomputed per call.
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.cols).map(|j| self.column(j)).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        self.check_bounds(row, col);
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        self.check_bounds(row, col);
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        assert_eq!(self.shape(), rhs.shape(), "unbalanced matrices");
        let mut out = Matrix::zeros(rhs.rows, rhs.cols);
        for i in 0..rhs.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
        out
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        assert_eq!(self.shape(), rhs.shape(), "unbalanced matrices");
        let mut out = Matrix::zeros(rhs.rows, rhs.cols);
        for i in 0..rhs.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
        out
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    /// Matrix product: cell (i, j) is the tuple dot product of the left
    /// operand's row i with the right operand's column j.
    ///
    /// The result is sized `self.nrows() × rhs.ncols()`. The fill loops run
    /// over `rhs.nrows()` and `self.ncols()`; no separate shape check is
    /// performed. Incompatible operands abort inside row/column extraction
    /// or the unbalanced-tuples dot check.
    fn mul(self, rhs: &'b Matrix) -> Matrix {
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..rhs.nrows() {
            for j in 0..self.ncols() {
                let row = Tuple::new(self.row(i).to_vec());
                let col = Tuple::new(rhs.column(j));
                out[(i, j)] = row.dot(&col);
            }
        }
        out
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        rhs * self
    }
}
