//! Modularity matrices.
//!
//! ## The Modularity Matrix
//!
//! For an unweighted graph with adjacency `A`, degrees `k` and `m = Σ k_i`
//! (twice the edge count), Newman's modularity matrix is
//!
//! ```text
//! B[i,j] = A[i,j] - k_i × k_j / m
//! ```
//!
//! Every row of `B` sums to zero: `Σ_j k_i k_j / m = k_i = Σ_j A[i,j]`.
//!
//! ## The Generalized Modularity Matrix
//!
//! Splitting a subset `S` of an existing partition changes modularity by
//! `ΔQ ∝ sᵀ B_g s` where `s ∈ {±1}^|S|` and
//!
//! ```text
//! B_g[i,j] = B[i,j] - δ_ij × Σ_{l ∈ S} B[i,l]
//! ```
//!
//! For `S` = all nodes the correction vanishes, so `B_g = B`.
//!
//! ## Storage
//!
//! Both matrices come in a dense (`ndarray`) or sparse (`sprs`, CSR) flavor.
//! The numbers are the same either way; the eigen solver always works on a
//! dense copy.
//!
//! ## References
//!
//! Newman (2006). "Modularity and community structure in networks." PNAS 103(23).

mod matrix;
mod submatrix;

pub use matrix::modularity_matrix;
pub use submatrix::submodularity_matrix;

use ndarray::Array2;
#[cfg(feature = "sparse")]
use sprs::CsMat;

/// Storage container for modularity matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixStorage {
    /// Dense `ndarray::Array2`.
    #[default]
    Dense,
    /// Compressed sparse rows (`sprs::CsMat`).
    #[cfg(feature = "sparse")]
    Sparse,
}

/// A square, symmetric modularity matrix (`B` or `B_g`).
#[derive(Debug, Clone)]
pub enum ModularityMatrix {
    /// Dense storage.
    Dense(Array2<f64>),
    /// Sparse CSR storage.
    #[cfg(feature = "sparse")]
    Sparse(CsMat<f64>),
}

impl ModularityMatrix {
    /// Side length.
    pub fn dim(&self) -> usize {
        match self {
            ModularityMatrix::Dense(b) => b.nrows(),
            #[cfg(feature = "sparse")]
            ModularityMatrix::Sparse(b) => b.rows(),
        }
    }

    /// Storage container in use.
    pub fn storage(&self) -> MatrixStorage {
        match self {
            ModularityMatrix::Dense(_) => MatrixStorage::Dense,
            #[cfg(feature = "sparse")]
            ModularityMatrix::Sparse(_) => MatrixStorage::Sparse,
        }
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self {
            ModularityMatrix::Dense(b) => b[[i, j]],
            #[cfg(feature = "sparse")]
            ModularityMatrix::Sparse(b) => b.get(i, j).copied().unwrap_or(0.0),
        }
    }

    /// Iterate over the stored entries of row `i` as `(column, value)`.
    ///
    /// Dense storage yields every column.
    pub fn row_iter(&self, i: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        match self {
            ModularityMatrix::Dense(b) => Box::new(b.row(i).into_iter().copied().enumerate()),
            #[cfg(feature = "sparse")]
            ModularityMatrix::Sparse(b) => {
                let indptr = b.indptr();
                let start = indptr.index(i);
                let end = indptr.index(i + 1);
                let indices = &b.indices()[start..end];
                let data = &b.data()[start..end];
                Box::new(indices.iter().zip(data.iter()).map(|(&j, &v)| (j, v)))
            }
        }
    }

    /// Sum of row `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row_iter(i).map(|(_, v)| v).sum()
    }

    /// Dense copy of the matrix.
    pub fn to_dense(&self) -> Array2<f64> {
        match self {
            ModularityMatrix::Dense(b) => b.clone(),
            #[cfg(feature = "sparse")]
            ModularityMatrix::Sparse(_) => {
                let n = self.dim();
                let mut dense = Array2::zeros((n, n));
                for i in 0..n {
                    for (j, v) in self.row_iter(i) {
                        dense[[i, j]] = v;
                    }
                }
                dense
            }
        }
    }

    /// Quadratic form `sᵀ · M · s`.
    ///
    /// `s` must have length `dim()`.
    pub fn quadratic_form(&self, s: &[f64]) -> f64 {
        let mut total = 0.0;
        for (i, &si) in s.iter().enumerate() {
            if si == 0.0 {
                continue;
            }
            let row: f64 = self.row_iter(i).map(|(j, v)| v * s[j]).sum();
            total += si * row;
        }
        total
    }

    /// Whether the matrix equals its transpose within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.dim();
        (0..n).all(|i| (i + 1..n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }
}
