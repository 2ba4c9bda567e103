//! Newman's leading-eigenvector method.
//!
//! ## The Algorithm (Newman 2006)
//!
//! 1. Build the modularity matrix `B` once.
//! 2. Keep a FIFO of communities that may still split, starting with one
//!    community holding every node.
//! 3. For the front community, build `B_g` and split it by the sign of the
//!    leading eigenvector if that raises modularity. Push both halves.
//! 4. Stop when the queue is empty.
//!
//! The number of communities falls out of the procedure; it is never a
//! parameter.
//!
//! ## Complexity
//!
//! - Time: O(n³) per bisection (dense eigendecomposition), at most n - 1 splits
//! - Space: O(n²) for `B`
//!
//! ## References
//!
//! Newman (2006). "Modularity and community structure in networks."
//! PNAS 103(23), 8577-8582.

use super::assignment::CommunityAssignment;
use super::partitioner::RecursivePartitioner;
use super::quality::modularity_of;
use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use crate::graph::GraphHandle;
use crate::modularity::{modularity_matrix, MatrixStorage};
use crate::spectral::{EigenSolver, FaerEigenSolver, SpectralBisector};
use petgraph::graph::UnGraph;

/// Leading-eigenvector community detection.
#[derive(Debug, Clone)]
pub struct LeadingEigenvector {
    /// Container for `B` and every `B_g`.
    storage: MatrixStorage,
    /// Threshold for the eigenvalue and gain tests.
    tolerance: f64,
    /// Bisect each queue generation in parallel.
    #[cfg(feature = "parallel")]
    parallel: bool,
}

impl LeadingEigenvector {
    /// Create a detector with dense storage and tolerance `1e-10`.
    pub fn new() -> Self {
        Self {
            storage: MatrixStorage::Dense,
            tolerance: 1e-10,
            #[cfg(feature = "parallel")]
            parallel: false,
        }
    }

    /// Set the matrix storage container.
    pub fn with_storage(mut self, storage: MatrixStorage) -> Self {
        self.storage = storage;
        self
    }

    /// Set the numerical tolerance.
    ///
    /// A bisection is accepted only when both the leading eigenvalue and the
    /// discrete gain exceed it.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Bisect independent communities in parallel.
    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Storage container in use.
    pub fn storage(&self) -> MatrixStorage {
        self.storage
    }

    /// Partition `graph` with the default eigen solver.
    pub fn partition<N, E>(&self, graph: &UnGraph<N, E>) -> Result<CommunityAssignment> {
        self.partition_with_solver(graph, FaerEigenSolver)
    }

    /// Partition `graph` using `solver` for every eigendecomposition.
    pub fn partition_with_solver<N, E, S: EigenSolver>(
        &self,
        graph: &UnGraph<N, E>,
        solver: S,
    ) -> Result<CommunityAssignment> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be finite and non-negative",
            });
        }

        let handle = GraphHandle::from_graph(graph);
        let b = modularity_matrix(&handle, self.storage)?;
        let bisector = SpectralBisector::new()
            .with_solver(solver)
            .with_tolerance(self.tolerance);

        let partitioner = RecursivePartitioner::new(&b, &bisector);
        #[cfg(feature = "parallel")]
        let (labels, splits) = if self.parallel {
            partitioner.run_parallel()?
        } else {
            partitioner.run()?
        };
        #[cfg(not(feature = "parallel"))]
        let (labels, splits) = partitioner.run()?;

        let q = modularity_of(&handle, &labels)?;
        let nodes = handle.nodes().map(|i| handle.original(i)).collect();
        let assignment = CommunityAssignment::new(nodes, labels, splits, q);

        tracing::info!(
            nodes = handle.node_count(),
            edges = handle.edge_count(),
            communities = assignment.num_communities(),
            splits,
            modularity = q,
            "leading-eigenvector partition complete"
        );
        Ok(assignment)
    }
}

impl Default for LeadingEigenvector {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for LeadingEigenvector {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        Ok(self.partition(graph)?.labels().to_vec())
    }
}

/// Partition `graph` with default settings.
///
/// Shorthand for `LeadingEigenvector::new().partition(graph)`.
pub fn partition<N, E>(graph: &UnGraph<N, E>) -> Result<CommunityAssignment> {
    LeadingEigenvector::new().partition(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let n: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for (i, j) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
            let _ = graph.add_edge(n[i], n[j], ());
        }
        graph
    }

    #[test]
    fn test_two_triangles() {
        let a = LeadingEigenvector::new().partition(&two_triangles()).unwrap();
        assert_eq!(a.len(), 6);
        assert_eq!(a.num_communities(), 2);
        assert_eq!(a.splits(), 1);

        let labels = a.labels();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
        // Q = 2 × (3/7 - (7/14)²) = 5/14
        assert!((a.modularity() - 5.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_detect_matches_partition() {
        let graph = two_triangles();
        let detector = LeadingEigenvector::new();
        let labels = detector.detect(&graph).unwrap();
        assert_eq!(labels, detector.partition(&graph).unwrap().labels());
        assert_eq!(detector.resolution(), 1.0);
    }

    #[test]
    fn test_empty_graph_error() {
        let graph = UnGraph::<(), ()>::new_undirected();
        assert_eq!(partition(&graph).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_invalid_tolerance() {
        let detector = LeadingEigenvector::new().with_tolerance(f64::NAN);
        assert!(matches!(
            detector.partition(&two_triangles()),
            Err(Error::InvalidParameter { name: "tolerance", .. })
        ));
    }

    #[cfg(feature = "sparse")]
    #[test]
    fn test_sparse_storage_same_partition() {
        let graph = two_triangles();
        let dense = LeadingEigenvector::new().partition(&graph).unwrap();
        let sparse = LeadingEigenvector::new()
            .with_storage(MatrixStorage::Sparse)
            .partition(&graph)
            .unwrap();
        assert_eq!(dense.communities().len(), sparse.communities().len());
        let same = |a: &CommunityAssignment| {
            (0..6)
                .map(|i| (0..6).map(|j| a.labels()[i] == a.labels()[j]).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };
        assert_eq!(same(&dense), same(&sparse));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_flag_same_labels() {
        let graph = two_triangles();
        let sequential = LeadingEigenvector::new().partition(&graph).unwrap();
        let parallel = LeadingEigenvector::new()
            .with_parallel(true)
            .partition(&graph)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
