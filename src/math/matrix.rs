//! Dense row-major matrix with the handful of operations the evaluators
//! and the scene-graph propagator actually use: multiply, assign, zero,
//! get/set. No inversion, no decompositions.

/// A dense `rows x cols` matrix of `f64`, stored row-major in one
/// contiguous buffer.
///
/// Geometric transforms are always 4x4 (homogeneous) or 4x1 (homogeneous
/// point). Row/column indices are checked by slice indexing and panic when
/// out of range.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    elems: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            elems: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from a row-major array.
    ///
    /// # Panics
    /// Panics if `array.len() != rows * cols`.
    pub fn from_array(rows: usize, cols: usize, array: &[f64]) -> Self {
        assert_eq!(array.len(), rows * cols);
        Self {
            elems: array.to_vec(),
            rows,
            cols,
        }
    }

    /// Creates a 4x4 identity matrix.
    pub fn identity4() -> Self {
        Self::from_array(
            4,
            4,
            &[
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elems[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.elems[row * self.cols + col] = val;
    }

    /// Copies the values of `src` into `self`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn assign(&mut self, src: &Matrix) {
        assert_eq!(self.rows, src.rows);
        assert_eq!(self.cols, src.cols);
        self.elems.copy_from_slice(&src.elems);
    }

    /// Overwrites the contents from a row-major array without reallocating.
    ///
    /// # Panics
    /// Panics if `array.len() != rows * cols`.
    pub fn assign_from_array(&mut self, array: &[f64]) {
        self.elems.copy_from_slice(array);
    }

    /// Zeros the matrix out.
    pub fn zero(&mut self) {
        self.elems.fill(0.0);
    }

    /// Accumulates the product `a * b` into `self`.
    ///
    /// Note that `self` is *not* zeroed first: callers wanting a fresh
    /// product must zero the destination themselves (or use
    /// [`Matrix::multiply_alias`], which always produces a from-scratch
    /// result). Borrowing rules already forbid `self` aliasing `a` or `b`,
    /// which the accumulation depends on.
    ///
    /// # Panics
    /// Panics if `a.cols != b.rows`, `self.rows != a.rows`, or
    /// `self.cols != b.cols`.
    pub fn multiply(&mut self, a: &Matrix, b: &Matrix) {
        assert_eq!(a.cols, b.rows);
        assert_eq!(self.rows, a.rows);
        assert_eq!(self.cols, b.cols);

        for i in 0..a.rows {
            for k in 0..a.cols {
                for j in 0..b.cols {
                    self.elems[i * b.cols + j] +=
                        a.elems[i * a.cols + k] * b.elems[k * b.cols + j];
                }
            }
        }
    }

    /// Computes `a * b` into `self`, safe when `self` is also `a` or `b`.
    ///
    /// The product goes into a scratch matrix first and is assigned over
    /// `self` afterwards, so the result never reads half-written output.
    pub fn multiply_alias(&mut self, a: &Matrix, b: &Matrix) {
        let mut scratch = Matrix::new(a.rows, b.cols);
        scratch.multiply(a, b);
        self.assign(&scratch);
    }
}
