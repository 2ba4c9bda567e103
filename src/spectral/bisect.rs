//! Leading-eigenvector bisection of a single community.

use super::eigen::{EigenSolver, FaerEigenSolver};
use crate::error::{Error, Result};
use crate::modularity::ModularityMatrix;

/// Outcome of one bisection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Bisection {
    /// No split of the subset improves modularity.
    Indivisible,
    /// The subset splits into two non-empty, disjoint halves.
    Split {
        /// Nodes on the positive side of the leading eigenvector.
        first: Vec<usize>,
        /// The remaining nodes.
        second: Vec<usize>,
        /// `sᵀ B_g s` for the accepted sign vector; always positive.
        gain: f64,
        /// Leading eigenvalue of `B_g`.
        eigenvalue: f64,
    },
}

impl Bisection {
    /// Whether this is a split.
    pub fn is_split(&self) -> bool {
        matches!(self, Bisection::Split { .. })
    }
}

/// Bisects a node subset by the sign pattern of the leading eigenvector of
/// its generalized modularity matrix.
///
/// A split is accepted only if
/// 1. the leading eigenvalue exceeds `tolerance`,
/// 2. both sides of the sign pattern are non-empty, and
/// 3. the discrete gain `sᵀ B_g s` exceeds `tolerance`.
///
/// Components that are exactly zero go to the negative side.
#[derive(Debug, Clone)]
pub struct SpectralBisector<S = FaerEigenSolver> {
    solver: S,
    tolerance: f64,
}

impl SpectralBisector<FaerEigenSolver> {
    /// Bisector with the default dense solver and tolerance `1e-10`.
    pub fn new() -> Self {
        Self {
            solver: FaerEigenSolver,
            tolerance: 1e-10,
        }
    }
}

impl Default for SpectralBisector<FaerEigenSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EigenSolver> SpectralBisector<S> {
    /// Swap in another eigen solver.
    pub fn with_solver<T: EigenSolver>(self, solver: T) -> SpectralBisector<T> {
        SpectralBisector {
            solver,
            tolerance: self.tolerance,
        }
    }

    /// Set the numerical threshold for the eigenvalue and gain tests.
    ///
    /// Negative values act as `0.0`, so an accepted split never loses
    /// modularity. A NaN tolerance makes [`bisect`](Self::bisect) fail.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Current tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Attempt to split `subset`, whose generalized modularity matrix is `b_g`.
    ///
    /// Row `i` of `b_g` must describe `subset[i]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the tolerance is NaN,
    /// [`Error::DimensionMismatch`] if `b_g` and `subset` disagree in size.
    pub fn bisect(&self, b_g: &ModularityMatrix, subset: &[usize]) -> Result<Bisection> {
        if self.tolerance.is_nan() {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must not be NaN",
            });
        }
        let tol = self.tolerance.max(0.0);

        let g = subset.len();
        if b_g.dim() != g {
            return Err(Error::DimensionMismatch {
                expected: g,
                found: b_g.dim(),
            });
        }
        // a single node has nothing to split off
        if g < 2 {
            return Ok(Bisection::Indivisible);
        }

        let evd = self.solver.decompose(&b_g.to_dense())?;
        let Some((eigenvalue, vector)) = evd.leading() else {
            return Ok(Bisection::Indivisible);
        };
        if vector.len() != g {
            return Err(Error::DimensionMismatch {
                expected: g,
                found: vector.len(),
            });
        }

        if eigenvalue <= tol {
            return Ok(Bisection::Indivisible);
        }

        let signs: Vec<f64> = vector
            .iter()
            .map(|&v| if v > 0.0 { 1.0 } else { -1.0 })
            .collect();

        let mut first = Vec::new();
        let mut second = Vec::new();
        for (&node, &s) in subset.iter().zip(&signs) {
            if s > 0.0 {
                first.push(node);
            } else {
                second.push(node);
            }
        }
        if first.is_empty() || second.is_empty() {
            return Ok(Bisection::Indivisible);
        }

        let gain = b_g.quadratic_form(&signs);
        if gain <= tol {
            return Ok(Bisection::Indivisible);
        }

        Ok(Bisection::Split {
            first,
            second,
            gain,
            eigenvalue,
        })
    }
}
