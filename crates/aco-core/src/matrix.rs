//! Flat square matrix with mirrored writes.
//!
//! # Data layout
//!
//! Row-major `Vec<f64>` of `n * n` cells; cell `(i, j)` lives at
//! `i * n + j`.  Every write through [`SymmetricMatrix::set`] updates both
//! `(i, j)` and `(j, i)`, so the two halves never diverge.  Rows are
//! contiguous slices, which keeps the selector scans over one row cache
//! friendly.

use crate::error::check_index;
use crate::AcoResult;

/// Symmetric `n × n` matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetricMatrix {
    n:     usize,
    cells: Vec<f64>,
}

impl SymmetricMatrix {
    /// An `n × n` matrix with every cell (diagonal included) set to `value`.
    pub fn filled(n: usize, value: f64) -> Self {
        Self { n, cells: vec![value; n * n] }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Bounds-checked read.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> AcoResult<f64> {
        check_index(i, self.n)?;
        check_index(j, self.n)?;
        Ok(self.cells[i * self.n + j])
    }

    /// Bounds-checked symmetric write of `(i, j)` and `(j, i)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> AcoResult<()> {
        check_index(i, self.n)?;
        check_index(j, self.n)?;
        self.cells[i * self.n + j] = value;
        self.cells[j * self.n + i] = value;
        Ok(())
    }

    /// Unchecked read for hot loops whose indices are already validated.
    ///
    /// # Panics
    /// Panics if `i * n + j` falls outside the cell buffer.
    #[inline(always)]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> AcoResult<&[f64]> {
        check_index(i, self.n)?;
        Ok(&self.cells[i * self.n..(i + 1) * self.n])
    }

    /// Set every cell, diagonal included, to `value`.
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }

    /// Apply `f(i, j, current)` to every cell of the upper triangle
    /// (`i < j`) and mirror the result into the lower triangle.
    pub fn update_off_diagonal<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        let n = self.n;
        for i in 0..n {
            for j in (i + 1)..n {
                let v = f(i, j, self.cells[i * n + j]);
                self.cells[i * n + j] = v;
                self.cells[j * n + i] = v;
            }
        }
    }

    /// Set the diagonal to `value`.
    pub fn set_diagonal(&mut self, value: f64) {
        let n = self.n;
        for i in 0..n {
            self.cells[i * n + i] = value;
        }
    }
}
