//! Whole-graph modularity matrix.

use super::{MatrixStorage, ModularityMatrix};
use crate::error::{Error, Result};
use crate::graph::GraphHandle;
use ndarray::Array2;
#[cfg(feature = "sparse")]
use sprs::TriMat;

/// Build `B[i,j] = A[i,j] - k_i k_j / m` for the whole graph.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if the graph has no nodes.
/// - [`Error::NoEdges`] if `m = Σ k_i` is zero.
pub fn modularity_matrix(graph: &GraphHandle, storage: MatrixStorage) -> Result<ModularityMatrix> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    // m is already twice the edge count
    let m = graph.total_degree() as f64;
    if m == 0.0 {
        return Err(Error::NoEdges);
    }

    let k = graph.degrees();
    tracing::trace!(nodes = n, m, ?storage, "building modularity matrix");

    let b = match storage {
        MatrixStorage::Dense => ModularityMatrix::Dense(Array2::from_shape_fn((n, n), |(i, j)| {
            graph.adjacency(i, j) - k[i] * k[j] / m
        })),
        #[cfg(feature = "sparse")]
        MatrixStorage::Sparse => {
            let mut triplets = TriMat::new((n, n));
            for i in 0..n {
                for j in 0..n {
                    let v = graph.adjacency(i, j) - k[i] * k[j] / m;
                    if v != 0.0 {
                        triplets.add_triplet(i, j, v);
                    }
                }
            }
            ModularityMatrix::Sparse(triplets.to_csr())
        }
    };
    Ok(b)
}
