use std::fmt::{self, Display, Formatter, Write};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::Chunks;

use crate::tensors::vector::Vector;

/// Errors that can occur when performing matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    NotSquare,
    ShapeMismatch,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::ShapeMismatch => write!(f, "The shape of the matrix is not compatible"),
        }
    }
}

/// A dense row-major matrix of `f64` entries.
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize) -> Matrix {
        Matrix {
            data: vec![0.; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a new matrix with every entry set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: f64) -> Matrix {
        Matrix {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a new square matrix with ones on the main diagonal and zeroes
    /// elsewhere.
    pub fn identity(nrows: usize) -> Matrix {
        Matrix {
            data: (0..nrows * nrows)
                .map(|i| {
                    if i % nrows == i / nrows {
                        1.
                    } else {
                        0.
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    ///
    /// The column count is the length of the longest row; shorter rows are
    /// zero-padded on the right.
    pub fn from_nested(rows: Vec<Vec<f64>>) -> Matrix {
        let nrows = rows.len();
        let ncols = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        let mut data = Vec::with_capacity(nrows * ncols);
        for r in rows {
            let pad = ncols - r.len();
            data.extend(r);
            data.extend(std::iter::repeat(0.).take(pad));
        }

        Matrix { data, nrows, ncols }
    }

    /// Convert a linear row-major representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix, MatrixError> {
        if data.len() == nrows * ncols {
            Ok(Matrix { data, nrows, ncols })
        } else {
            Err(MatrixError::ShapeMismatch)
        }
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, f64> {
        self.data.chunks(self.ncols)
    }

    /// Extract the `r`th row.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of bounds.
    pub fn row(&self, r: usize) -> Vector {
        assert!(
            r < self.nrows,
            "Row index {} out of bounds for {} rows",
            r,
            self.nrows
        );
        Vector::new(self.data[r * self.ncols..(r + 1) * self.ncols].to_vec())
    }

    /// Extract the `c`th column.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of bounds.
    pub fn column(&self, c: usize) -> Vector {
        assert!(
            c < self.ncols,
            "Column index {} out of bounds for {} columns",
            c,
            self.ncols
        );
        Vector::new((0..self.nrows).map(|r| self.data[r * self.ncols + c]).collect())
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix {
        let mut m = Matrix::new(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)];
            }
        }
        m
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|ee| ee * e).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Add two matrices, or report the dimension mismatch.
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols);
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = a + b;
        }
        Ok(m)
    }

    /// Subtract two matrices, or report the dimension mismatch.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols);
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = a - b;
        }
        Ok(m)
    }

    /// Multiply two matrices, or report the dimension mismatch.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = 0.;
                for k in 0..self.ncols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                m[(i, j)] = sum;
            }
        }
        Ok(m)
    }

    /// Compute the determinant of the matrix.
    ///
    /// The 1x1, 2x2, and 3x3 cases use their closed diagonal-product forms;
    /// larger matrices go through a fraction-free Bareiss elimination on a
    /// scratch copy, so `det` of an integer-valued matrix stays exact.
    pub fn det(&self) -> Result<f64, MatrixError> {
        if self.nrows != self.ncols {
            Err(MatrixError::NotSquare)?;
        }

        let d = &self.data;
        match self.nrows {
            // the empty product
            0 => Ok(1.),
            1 => Ok(d[0]),
            2 => Ok(d[0] * d[3] - d[1] * d[2]),
            3 => Ok(d[0] * d[4] * d[8] + d[1] * d[5] * d[6] + d[2] * d[3] * d[7]
                - d[2] * d[4] * d[6]
                - d[0] * d[5] * d[7]
                - d[1] * d[3] * d[8]),
            _ => Ok(self.det_bareiss()),
        }
    }

    /// Bareiss elimination with row-swap pivoting. Every intermediate
    /// division is exact, and the last pivot is the determinant.
    fn det_bareiss(&self) -> f64 {
        let n = self.nrows;
        let mut m = self.data.clone();
        let mut sign = 1.;
        let mut prev = 1.;

        for k in 0..n - 1 {
            if m[k * n + k] == 0. {
                let mut swap = None;
                for r in k + 1..n {
                    if m[r * n + k] != 0. {
                        swap = Some(r);
                        break;
                    }
                }

                match swap {
                    // no pivot left in this column
                    None => return 0.,
                    Some(r) => {
                        for c in k..n {
                            m.swap(k * n + c, r * n + c);
                        }
                        sign = -sign;
                    }
                }
            }

            for i in k + 1..n {
                for j in k + 1..n {
                    m[i * n + j] = (m[i * n + j] * m[k * n + k] - m[i * n + k] * m[k * n + j]) / prev;
                }
                m[i * n + k] = 0.;
            }

            prev = m[k * n + k];
        }

        sign * m[n * n - 1]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index.0 * self.ncols + index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index.0 * self.ncols + index.1]
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Add two matrices.
    fn add(self, rhs: &Matrix) -> Matrix {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix) -> Matrix {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Multiply two matrices.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.checked_mul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.mul_scalar(rhs)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Matrix {
        for e in &mut self.data {
            *e = -*e;
        }
        self
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            f.write_char('{')?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(',')?;
                }
                Display::fmt(e, f)?;
            }
            f.write_char('}')?;
        }
        f.write_char('}')
    }
}
