//! Queue-driven recursive bisection.
//!
//! ```text
//! queue = [0], every node labeled 0
//! while let Some(L) = queue.pop_front():
//!     S = nodes labeled L
//!     match bisect(B_g(S)):
//!         Indivisible   -> L is final
//!         Split(g1, g2) -> g1 := next, g2 := next + 1; push both
//! ```
//!
//! Every split leaves two strictly smaller, non-empty communities, so at most
//! `n - 1` splits happen and the loop always terminates.

use crate::error::Result;
use crate::modularity::{submodularity_matrix, ModularityMatrix};
use crate::spectral::{Bisection, EigenSolver, SpectralBisector};
use std::collections::VecDeque;

/// Label of the community holding every node before the first split.
pub const ROOT_LABEL: usize = 0;

/// Owns the assignment state and the work queue of one partition run.
#[derive(Debug)]
pub struct RecursivePartitioner<'a, S> {
    b: &'a ModularityMatrix,
    bisector: &'a SpectralBisector<S>,
    /// Label per dense node.
    labels: Vec<usize>,
    /// Labels still considered divisible, oldest first.
    queue: VecDeque<usize>,
    next_label: usize,
    splits: usize,
}

impl<'a, S: EigenSolver> RecursivePartitioner<'a, S> {
    /// Start with a single community holding all `b.dim()` nodes.
    pub fn new(b: &'a ModularityMatrix, bisector: &'a SpectralBisector<S>) -> Self {
        Self {
            b,
            bisector,
            labels: vec![ROOT_LABEL; b.dim()],
            queue: VecDeque::from([ROOT_LABEL]),
            next_label: ROOT_LABEL + 1,
            splits: 0,
        }
    }

    /// Current label of every node.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Pending labels, front first.
    pub fn queue(&self) -> &VecDeque<usize> {
        &self.queue
    }

    /// Accepted splits so far.
    pub fn splits(&self) -> usize {
        self.splits
    }

    /// Nodes currently labeled `label`, ascending.
    pub fn members(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Process the front of the queue.
    ///
    /// Returns `None` once the queue is empty.
    pub fn step(&mut self) -> Result<Option<Bisection>> {
        let Some(label) = self.queue.pop_front() else {
            return Ok(None);
        };
        let subset = self.members(label);
        let outcome = self.attempt(&subset)?;
        self.apply(label, &outcome);
        Ok(Some(outcome))
    }

    /// Drain the queue. Returns the final labels and the split count.
    pub fn run(mut self) -> Result<(Vec<usize>, usize)> {
        while self.step()?.is_some() {}
        Ok((self.labels, self.splits))
    }

    /// Drain the queue one generation at a time, bisecting each generation
    /// in parallel.
    ///
    /// Labels are allocated afterwards in queue order, so the result equals
    /// [`run`](Self::run).
    #[cfg(feature = "parallel")]
    pub fn run_parallel(mut self) -> Result<(Vec<usize>, usize)> {
        use rayon::prelude::*;

        while !self.queue.is_empty() {
            let generation: Vec<usize> = self.queue.drain(..).collect();
            let subsets: Vec<Vec<usize>> = generation.iter().map(|&l| self.members(l)).collect();
            let outcomes: Vec<Result<Bisection>> =
                subsets.par_iter().map(|subset| self.attempt(subset)).collect();
            for (label, outcome) in generation.into_iter().zip(outcomes) {
                self.apply(label, &outcome?);
            }
        }
        Ok((self.labels, self.splits))
    }

    fn attempt(&self, subset: &[usize]) -> Result<Bisection> {
        // the whole graph needs no restriction
        let restriction = (subset.len() != self.b.dim()).then_some(subset);
        let b_g = submodularity_matrix(self.b, restriction)?;
        self.bisector.bisect(&b_g, subset)
    }

    fn apply(&mut self, label: usize, outcome: &Bisection) {
        match outcome {
            Bisection::Indivisible => {
                tracing::debug!(label, "community is indivisible");
            }
            Bisection::Split {
                first,
                second,
                gain,
                eigenvalue,
            } => {
                let first_label = self.next_label;
                let second_label = self.next_label + 1;
                self.next_label += 2;

                for &node in first {
                    self.labels[node] = first_label;
                }
                for &node in second {
                    self.labels[node] = second_label;
                }
                self.queue.push_back(first_label);
                self.queue.push_back(second_label);
                self.splits += 1;

                tracing::debug!(
                    label,
                    first_label,
                    first_size = first.len(),
                    second_label,
                    second_size = second.len(),
                    eigenvalue,
                    gain,
                    "split community"
                );
            }
        }
    }
}
