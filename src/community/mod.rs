//! Community detection by recursive spectral bisection.
//!
//! Given a graph, find groups of nodes that are densely connected inside and
//! sparsely connected to each other, without fixing the number of groups.
//!
//! ## The Modularity Objective
//!
//! Modularity Q compares the edges inside communities with the number
//! expected in a random graph with the same degree sequence:
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij - (k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = number of edges
//! - A_ij = 1 if i and j are adjacent
//! - k_i = degree of node i
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! ## Leading Eigenvector
//!
//! Rather than moving nodes greedily, the leading-eigenvector method splits
//! communities in two, one at a time, using the sign pattern of the top
//! eigenvector of the (generalized) modularity matrix. A community whose best
//! split would not increase Q is left alone. The process is deterministic:
//! running it twice on the same graph yields the same labels.
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use eigensplit::community::{CommunityDetection, LeadingEigenvector};
//!
//! // Two triangles joined by one edge
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let n: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! for (i, j) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
//!     graph.add_edge(n[i], n[j], ());
//! }
//!
//! let communities = LeadingEigenvector::new().detect(&graph).unwrap();
//! assert_eq!(communities[0], communities[2]);
//! assert_ne!(communities[0], communities[3]);
//! ```
//!
//! ## References
//!
//! - Newman (2006). "Modularity and community structure in networks."
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."

mod assignment;
mod leading_eigenvector;
mod partitioner;
mod quality;
mod traits;

pub use assignment::CommunityAssignment;
pub use leading_eigenvector::{partition, LeadingEigenvector};
pub use partitioner::{RecursivePartitioner, ROOT_LABEL};
pub use quality::modularity;
pub use traits::CommunityDetection;
