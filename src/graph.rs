//! Dense, unweighted view of an input graph.
//!
//! The partitioner never works on a `petgraph` graph directly. It first
//! relabels the nodes to a contiguous range and drops every edge weight, so
//! the modularity builders only see `A[i,j] ∈ {0, 1, 2}` and integer degrees.
//!
//! Conventions:
//! - Parallel edges collapse into one edge.
//! - A self-loop sets `A[i,i] = 2` and adds 2 to the degree, which keeps the
//!   null-model rows of the modularity matrix summing to zero.
//! - Dense index `i` (0-based, used for matrix rows) corresponds to the
//!   1-based label `i + 1`.

use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Read-only, relabeled adjacency structure consumed by the modularity builders.
#[derive(Debug, Clone)]
pub struct GraphHandle {
    /// Dense index -> original node index.
    original: Vec<NodeIndex>,
    /// Sorted, deduplicated neighbor lists (self-loops excluded).
    neighbors: Vec<Vec<usize>>,
    /// Whether node `i` carries a self-loop.
    self_loop: Vec<bool>,
}

impl GraphHandle {
    /// Relabel `graph` to a dense range, discarding node and edge weights.
    pub fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        let original: Vec<NodeIndex> = graph.node_indices().collect();
        let n = original.len();

        let mut neighbors = vec![Vec::new(); n];
        let mut self_loop = vec![false; n];
        for edge in graph.edge_references() {
            let i = edge.source().index();
            let j = edge.target().index();
            if i == j {
                self_loop[i] = true;
            } else {
                neighbors[i].push(j);
                neighbors[j].push(i);
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        tracing::trace!(nodes = n, "relabeled graph to dense range");

        Self {
            original,
            neighbors,
            self_loop,
        }
    }

    /// Build directly from an edge list over `0..n`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if an endpoint lies outside `0..n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = UnGraph::<(), ()>::with_capacity(n, edges.len());
        for _ in 0..n {
            let _ = graph.add_node(());
        }
        for &(i, j) in edges {
            if let Some(index) = [i, j].into_iter().find(|&v| v >= n) {
                return Err(Error::UnknownNode { index, n_nodes: n });
            }
            let _ = graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
        Ok(Self::from_graph(&graph))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.original.len()
    }

    /// Number of distinct undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        let plain: usize = self.neighbors.iter().map(Vec::len).sum::<usize>() / 2;
        plain + self.self_loop.iter().filter(|&&s| s).count()
    }

    /// Dense indices in their stable enumeration order.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count()
    }

    /// Degree of dense node `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors[i].len() + if self.self_loop[i] { 2 } else { 0 }
    }

    /// Degree sequence in dense order.
    pub fn degrees(&self) -> Vec<f64> {
        self.nodes().map(|i| self.degree(i) as f64).collect()
    }

    /// Sum of all degrees (twice the edge count).
    pub fn total_degree(&self) -> usize {
        self.nodes().map(|i| self.degree(i)).sum()
    }

    /// Neighbors of dense node `i`, ascending, without `i` itself.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Whether `i` and `j` share an edge.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        if i == j {
            self.self_loop[i]
        } else {
            self.neighbors[i].binary_search(&j).is_ok()
        }
    }

    /// Adjacency matrix entry `A[i,j]`.
    pub fn adjacency(&self, i: usize, j: usize) -> f64 {
        match (i == j, self.is_adjacent(i, j)) {
            (_, false) => 0.0,
            (true, true) => 2.0,
            (false, true) => 1.0,
        }
    }

    /// 1-based contiguous label of dense node `i`.
    pub fn label(&self, i: usize) -> usize {
        i + 1
    }

    /// Original node index behind dense node `i`.
    pub fn original(&self, i: usize) -> NodeIndex {
        self.original[i]
    }

    /// Original node index behind a 1-based label.
    pub fn original_of_label(&self, label: usize) -> Option<NodeIndex> {
        label
            .checked_sub(1)
            .and_then(|i| self.original.get(i).copied())
    }
}
