//! Final node → community mapping.

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// Community label of every node, keyed by the original node index.
///
/// Labels are the ones allocated during bisection: `0` for a graph that
/// never split, otherwise the labels of the terminal communities. They are
/// not renumbered, so gaps are expected.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityAssignment {
    /// Original node index per dense position, ascending.
    nodes: Vec<NodeIndex>,
    /// Label per dense position.
    labels: Vec<usize>,
    /// Accepted bisections.
    splits: usize,
    /// Modularity of the final partition.
    modularity: f64,
}

impl CommunityAssignment {
    pub(crate) fn new(
        nodes: Vec<NodeIndex>,
        labels: Vec<usize>,
        splits: usize,
        modularity: f64,
    ) -> Self {
        Self {
            nodes,
            labels,
            splits,
            modularity,
        }
    }

    /// Number of assigned nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no node is assigned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of `node`, if it belongs to the partitioned graph.
    pub fn label(&self, node: NodeIndex) -> Option<usize> {
        self.nodes
            .binary_search(&node)
            .ok()
            .map(|pos| self.labels[pos])
    }

    /// Labels in node-index order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// `(node, label)` pairs in node-index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, usize)> + '_ {
        self.nodes.iter().copied().zip(self.labels.iter().copied())
    }

    /// Number of distinct labels.
    pub fn num_communities(&self) -> usize {
        self.labels.iter().collect::<BTreeSet<_>>().len()
    }

    /// Members of each community, by ascending label.
    pub fn communities(&self) -> BTreeMap<usize, Vec<NodeIndex>> {
        let mut groups: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
        for (node, label) in self.iter() {
            groups.entry(label).or_default().push(node);
        }
        groups
    }

    /// Re-key the assignment by node weight.
    ///
    /// Nodes sharing a weight collapse; the last one in index order wins.
    pub fn keyed_by_weight<N, E>(&self, graph: &UnGraph<N, E>) -> HashMap<N, usize>
    where
        N: Clone + Eq + Hash,
    {
        self.iter()
            .filter_map(|(node, label)| graph.node_weight(node).map(|w| (w.clone(), label)))
            .collect()
    }

    /// Number of accepted bisections.
    pub fn splits(&self) -> usize {
        self.splits
    }

    /// Modularity `Q` of the final partition.
    pub fn modularity(&self) -> f64 {
        self.modularity
    }
}
