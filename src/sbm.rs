//! Stochastic block model graphs with planted communities.
//!
//! `n` nodes are cut into `k` equal, contiguous blocks. Each unordered pair
//! becomes an edge with probability `p_in` inside a block and `p_out` across
//! blocks. With `p_in ≫ p_out` the planted blocks are the communities a good
//! detector should recover.
//!
//! ```rust
//! use eigensplit::sbm::StochasticBlockModel;
//!
//! let (graph, blocks) = StochasticBlockModel::new(40, 2)
//!     .with_probabilities(0.6, 0.02)
//!     .with_seed(7)
//!     .generate()
//!     .unwrap();
//! assert_eq!(graph.node_count(), 40);
//! assert_eq!(blocks[0], 0);
//! assert_eq!(blocks[39], 1);
//! ```

use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::prelude::*;

/// Stochastic block model generator.
#[derive(Debug, Clone)]
pub struct StochasticBlockModel {
    /// Number of nodes.
    n: usize,
    /// Number of blocks.
    k: usize,
    /// Edge probability inside a block.
    p_in: f64,
    /// Edge probability between blocks.
    p_out: f64,
    /// Random seed; `None` draws from the thread RNG.
    seed: Option<u64>,
}

impl StochasticBlockModel {
    /// `n` nodes in `k` blocks, `p_in = 0.5`, `p_out = 0.01`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            p_in: 0.5,
            p_out: 0.01,
            seed: None,
        }
    }

    /// Set the within-block and between-block edge probabilities.
    pub fn with_probabilities(mut self, p_in: f64, p_out: f64) -> Self {
        self.p_in = p_in;
        self.p_out = p_out;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Block of node `i`.
    ///
    /// Blocks hold `n / k` nodes each; the `n % k` leftover nodes join the
    /// last block.
    pub fn block_of(&self, i: usize) -> usize {
        if self.k == 0 {
            return 0;
        }
        let size = (self.n / self.k).max(1);
        (i / size).min(self.k - 1)
    }

    /// Sample a graph.
    ///
    /// Node weights are node ids `0..n`. Also returns the planted block of
    /// every node.
    pub fn generate(&self) -> Result<(UnGraph<usize, ()>, Vec<usize>)> {
        if self.n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > self.n {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be between 1 and the number of nodes",
            });
        }
        for (name, p) in [("p_in", self.p_in), ("p_out", self.p_out)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidParameter {
                    name,
                    message: "must be a probability in [0, 1]",
                });
            }
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let blocks: Vec<usize> = (0..self.n).map(|i| self.block_of(i)).collect();
        let mut graph = UnGraph::with_capacity(self.n, 0);
        for i in 0..self.n {
            let _ = graph.add_node(i);
        }
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let p = if blocks[i] == blocks[j] {
                    self.p_in
                } else {
                    self.p_out
                };
                if rng.random_bool(p) {
                    let _ = graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }

        tracing::debug!(
            nodes = self.n,
            blocks = self.k,
            edges = graph.edge_count(),
            "sampled stochastic block model"
        );
        Ok((graph, blocks))
    }
}
