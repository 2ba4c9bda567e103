//! Community detection traits.

use crate::error::Result;
use petgraph::graph::UnGraph;
use std::collections::BTreeSet;

/// Trait for community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in a graph.
    ///
    /// Returns the community label of each node, indexed by node index.
    /// Labels need not be consecutive.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;

    /// Number of communities `detect` finds.
    fn count<N, E>(&self, graph: &UnGraph<N, E>) -> Result<usize> {
        Ok(self.detect(graph)?.into_iter().collect::<BTreeSet<_>>().len())
    }

    /// Resolution parameter of the modularity objective.
    fn resolution(&self) -> f64 {
        1.0
    }
}
