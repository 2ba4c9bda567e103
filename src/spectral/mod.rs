//! Spectral bisection with the leading eigenvector of `B_g`.
//!
//! Maximizing `sᵀ B_g s` over `s ∈ {±1}^n` is NP-hard. Relaxing `s` to a real
//! vector of fixed norm turns it into an eigenproblem: the optimum is the
//! eigenvector of the largest eigenvalue. Rounding that vector by sign gives
//! the candidate split, which is then re-checked on the discrete assignment,
//! since relaxed and rounded optima can disagree near the indivisibility
//! boundary.
//!
//! ```text
//! λ_max ≤ 0            -> indivisible
//! s_i = sign(v_i)      (0 -> -1)
//! all s_i equal        -> indivisible
//! ΔQ = sᵀ B_g s ≤ 0    -> indivisible
//! otherwise            -> split
//! ```

mod bisect;
mod eigen;

pub use bisect::{Bisection, SpectralBisector};
pub use eigen::{EigenDecomposition, EigenSolver, FaerEigenSolver};
