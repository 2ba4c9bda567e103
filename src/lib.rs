//! # eigensplit
//!
//! Community detection by recursive leading-eigenvector bisection of the
//! modularity matrix (Newman 2006).
//!
//! **Default build** uses dense matrices. Sparse storage (`sparse`), the
//! stochastic block model generator (`sbm`) and generation-parallel
//! bisection (`parallel`) are feature flags.
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//!
//! let mut graph = UnGraph::<&str, ()>::new_undirected();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//! graph.add_edge(a, c, ());
//!
//! let assignment = eigensplit::partition(&graph).unwrap();
//! assert_eq!(assignment.num_communities(), 1);
//! ```

pub mod community;
/// Error types used across `eigensplit`.
pub mod error;
pub mod graph;
pub mod modularity;
#[cfg(feature = "sbm")]
pub mod sbm;
pub mod spectral;

#[cfg(test)]
mod partition_tests;

pub use community::{
    modularity as modularity_score, partition, CommunityAssignment, CommunityDetection,
    LeadingEigenvector, RecursivePartitioner,
};
pub use error::{Error, Result};
pub use graph::GraphHandle;
pub use modularity::{modularity_matrix, submodularity_matrix, MatrixStorage, ModularityMatrix};
pub use spectral::{Bisection, EigenDecomposition, EigenSolver, FaerEigenSolver, SpectralBisector};

#[cfg(feature = "sbm")]
pub use sbm::StochasticBlockModel;
