//! Constant-coefficient tridiagonal operator.
//!
//! Stored as three coefficients plus a size, so both memory and one
//! matrix-vector product are O(n).

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use rh_core::Real;

/// Interior sizes at or above this use the rayon path in [`Tridiagonal::apply_auto_into`].
pub const PAR_THRESHOLD: usize = 4096;

/// Square `size × size` matrix with `lower` on the sub-diagonal, `diag` on the
/// main diagonal and `upper` on the super-diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tridiagonal {
    size: usize,
    lower: Real,
    diag: Real,
    upper: Real,
}

impl Tridiagonal {
    pub fn new(size: usize, lower: Real, diag: Real, upper: Real) -> Self {
        Self {
            size,
            lower,
            diag,
            upper,
        }
    }

    /// Forward-Euler heat operator: `α` off the diagonal, `1 - 2α` on it.
    pub fn explicit_heat(size: usize, alpha: Real) -> Self {
        Self::new(size, alpha, 1.0 - 2.0 * alpha, alpha)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn lower(&self) -> Real {
        self.lower
    }

    pub fn diag(&self) -> Real {
        self.diag
    }

    pub fn upper(&self) -> Real {
        self.upper
    }

    /// Entry `(row, col)`; zero outside the band.
    pub fn get(&self, row: usize, col: usize) -> Real {
        if row >= self.size || col >= self.size {
            return 0.0;
        }
        match col as isize - row as isize {
            -1 => self.lower,
            0 => self.diag,
            1 => self.upper,
            _ => 0.0,
        }
    }

    /// `(A·u)[k]`, accumulated sub-diagonal first.
    #[inline]
    fn row_product(&self, u: &[Real], k: usize) -> Real {
        let mut acc = 0.0;
        if k > 0 {
            acc += self.lower * u[k - 1];
        }
        acc += self.diag * u[k];
        if k + 1 < self.size {
            acc += self.upper * u[k + 1];
        }
        acc
    }

    /// `out = A·u`, sequential.
    ///
    /// # Panics
    /// If `u` or `out` is not exactly `size` long.
    pub fn apply_into(&self, u: &[Real], out: &mut [Real]) {
        assert_eq!(u.len(), self.size, "operand length");
        assert_eq!(out.len(), self.size, "output length");
        for (k, o) in out.iter_mut().enumerate() {
            *o = self.row_product(u, k);
        }
    }

    /// `out = A·u` with rows split across the rayon pool.
    ///
    /// Every row is computed by the same expression as [`Self::apply_into`],
    /// so the two results are bitwise identical.
    pub fn apply_par_into(&self, u: &[Real], out: &mut [Real]) {
        assert_eq!(u.len(), self.size, "operand length");
        assert_eq!(out.len(), self.size, "output length");
        out.par_iter_mut()
            .enumerate()
            .for_each(|(k, o)| *o = self.row_product(u, k));
    }

    /// Picks the parallel path once the system reaches [`PAR_THRESHOLD`].
    pub fn apply_auto_into(&self, u: &[Real], out: &mut [Real]) {
        if self.size >= PAR_THRESHOLD {
            self.apply_par_into(u, out);
        } else {
            self.apply_into(u, out);
        }
    }

    /// Allocating `A·u`.
    pub fn apply(&self, u: &DVector<Real>) -> DVector<Real> {
        let mut out = DVector::zeros(self.size);
        self.apply_into(u.as_slice(), out.as_mut_slice());
        out
    }

    /// Dense copy, for inspection and small-system checks.
    pub fn to_dense(&self) -> DMatrix<Real> {
        DMatrix::from_fn(self.size, self.size, |r, c| self.get(r, c))
    }
}
