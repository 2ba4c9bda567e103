//! Modularity of a finished partition.

use crate::error::{Error, Result};
use crate::graph::GraphHandle;
use petgraph::graph::UnGraph;
use std::collections::HashMap;

/// Modularity `Q = (1/m) Σ_ij B[i,j] δ(c_i, c_j)` of `labels` on `graph`.
///
/// `labels[i]` is the community of node index `i`. Edge weights are ignored,
/// as everywhere else in this crate.
pub fn modularity<N, E>(graph: &UnGraph<N, E>, labels: &[usize]) -> Result<f64> {
    modularity_of(&GraphHandle::from_graph(graph), labels)
}

pub(crate) fn modularity_of(graph: &GraphHandle, labels: &[usize]) -> Result<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if labels.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: labels.len(),
        });
    }
    let m = graph.total_degree() as f64;
    if m == 0.0 {
        return Err(Error::NoEdges);
    }

    // Σ A_ij over same-community pairs, both orientations
    let mut internal = 0.0;
    // total degree per community
    let mut community_degree: HashMap<usize, f64> = HashMap::new();
    for i in graph.nodes() {
        for &j in graph.neighbors(i) {
            if labels[i] == labels[j] {
                internal += 1.0;
            }
        }
        internal += graph.adjacency(i, i);
        *community_degree.entry(labels[i]).or_insert(0.0) += graph.degree(i) as f64;
    }

    let expected: f64 = community_degree.values().map(|k| k * k).sum::<f64>() / m;
    Ok((internal - expected) / m)
}
