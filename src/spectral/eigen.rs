//! Real symmetric eigendecomposition as a pluggable capability.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1};

/// Eigenvalues and eigenvectors of a real symmetric matrix.
///
/// `vectors.column(k)` is the eigenvector for `values[k]`. The order of the
/// pairs is whatever the producing solver returns; it is the "natural
/// ordering" used when breaking eigenvalue ties.
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    /// Eigenvalues.
    pub values: Array1<f64>,
    /// Eigenvectors, one per column.
    pub vectors: Array2<f64>,
}

impl EigenDecomposition {
    /// The leading eigenpair.
    ///
    /// When several eigenvalues share the maximum exactly, the first one in
    /// the natural ordering wins. Returns `None` for an empty decomposition.
    pub fn leading(&self) -> Option<(f64, ArrayView1<'_, f64>)> {
        let mut best: Option<usize> = None;
        for (k, &value) in self.values.iter().enumerate() {
            match best {
                Some(b) if value <= self.values[b] => {}
                _ => best = Some(k),
            }
        }
        best.map(|k| (self.values[k], self.vectors.column(k)))
    }
}

/// Given a symmetric matrix, return its eigenvalues and eigenvectors.
///
/// Implementations may be dense, sparse or iterative; the bisector only
/// relies on [`EigenDecomposition::leading`].
pub trait EigenSolver: Send + Sync {
    /// Decompose `matrix`, which the caller guarantees to be square and symmetric.
    fn decompose(&self, matrix: &Array2<f64>) -> Result<EigenDecomposition>;
}

/// Dense self-adjoint eigensolver backed by `faer`.
///
/// Eigenvalues come back in nondecreasing order, so ties at the maximum
/// resolve to the lowest-index pair of the tied block.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerEigenSolver;

impl EigenSolver for FaerEigenSolver {
    fn decompose(&self, matrix: &Array2<f64>) -> Result<EigenDecomposition> {
        let n = matrix.nrows();
        if matrix.ncols() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: matrix.ncols(),
            });
        }
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(Error::Eigendecomposition(
                "matrix contains non-finite entries".to_string(),
            ));
        }
        if n == 0 {
            return Ok(EigenDecomposition {
                values: Array1::zeros(0),
                vectors: Array2::zeros((0, 0)),
            });
        }

        let mat = faer::Mat::<f64>::from_fn(n, n, |i, j| matrix[[i, j]]);
        let evd = mat.selfadjoint_eigendecomposition(faer::Side::Lower);
        let s = evd.s().column_vector();
        let u = evd.u();

        let values = Array1::from_shape_fn(n, |k| s[k]);
        let vectors = Array2::from_shape_fn((n, n), |(i, k)| u[(i, k)]);
        Ok(EigenDecomposition { values, vectors })
    }
}
