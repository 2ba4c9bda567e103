//! Generalized modularity matrix for a node subset.

use super::ModularityMatrix;
use crate::error::{Error, Result};
use ndarray::Axis;
#[cfg(feature = "sparse")]
use sprs::TriMat;
use std::borrow::Cow;

/// Restrict `b` to `subset` and apply the diagonal correction.
///
/// Rows and columns of the result follow the order of `subset`. The
/// restriction is gathered into a fresh matrix, then each diagonal entry
/// becomes `B_sub[i,i] - Σ_j B_sub[i,j]`, with the row sum taken before the
/// correction.
///
/// `None` means the whole graph; `b` is returned unchanged because its rows
/// already sum to zero.
///
/// # Errors
///
/// [`Error::UnknownNode`] if any index in `subset` is outside `0..b.dim()`,
/// [`Error::DuplicateNode`] if an index appears twice.
pub fn submodularity_matrix<'a>(
    b: &'a ModularityMatrix,
    subset: Option<&[usize]>,
) -> Result<Cow<'a, ModularityMatrix>> {
    let Some(subset) = subset else {
        return Ok(Cow::Borrowed(b));
    };

    let n = b.dim();
    let mut seen = vec![false; n];
    for &index in subset {
        if index >= n {
            return Err(Error::UnknownNode { index, n_nodes: n });
        }
        if std::mem::replace(&mut seen[index], true) {
            return Err(Error::DuplicateNode { index });
        }
    }
    let g = subset.len();

    let b_g = match b {
        ModularityMatrix::Dense(full) => {
            let mut restricted = full.select(Axis(0), subset).select(Axis(1), subset);
            let row_sums = restricted.sum_axis(Axis(1));
            for (i, s) in row_sums.iter().enumerate() {
                restricted[[i, i]] -= s;
            }
            ModularityMatrix::Dense(restricted)
        }
        #[cfg(feature = "sparse")]
        ModularityMatrix::Sparse(_) => {
            // position of each full-graph index inside the subset
            let mut position = vec![None; n];
            for (r, &node) in subset.iter().enumerate() {
                position[node] = Some(r);
            }

            let mut triplets = TriMat::new((g, g));
            for (r, &node) in subset.iter().enumerate() {
                let mut row_sum = 0.0;
                for (j, v) in b.row_iter(node) {
                    if let Some(c) = position[j] {
                        triplets.add_triplet(r, c, v);
                        row_sum += v;
                    }
                }
                // duplicates are summed when converting to CSR
                if row_sum != 0.0 {
                    triplets.add_triplet(r, r, -row_sum);
                }
            }
            ModularityMatrix::Sparse(triplets.to_csr())
        }
    };

    tracing::trace!(subset = g, of = n, "built generalized modularity matrix");
    Ok(Cow::Owned(b_g))
}
