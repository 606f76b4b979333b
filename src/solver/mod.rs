//! Downstream solver contract.
//!
//! The solve algorithm lives outside this crate; this module pins down
//! the fixed interface it is reached through:
//! - [`ProblemData`]: the fully marshaled input for one solve
//! - [`Solution`]: the outputs, built whole by the solver and committed
//!   into caller-owned storage only afterwards
//! - [`GraphFormSolver`]: the trait a solver implementation plugs into

use crate::marshal::{FunctionObj, Settings};
use crate::real::Real;

/// Fully marshaled input for one graph-form solve.
///
/// The matrix is row-major with `f.len() == m` descriptors for the rows
/// and `g.len() == n` for the columns; the orchestrator owns the matrix
/// storage for the duration of the call.
#[derive(Debug)]
pub struct ProblemData<'a, T> {
    /// Row-major `m x n` coefficient matrix.
    pub a: &'a [T],
    /// Row count.
    pub m: usize,
    /// Column count.
    pub n: usize,
    /// Loss terms, one per row.
    pub f: Vec<FunctionObj<T>>,
    /// Regularizer terms, one per column.
    pub g: Vec<FunctionObj<T>>,
    /// Solver configuration.
    pub settings: Settings<T>,
}

/// Solution status reported by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Converged to the requested tolerances.
    Optimal,
    /// Iteration cap reached; values are the best iterate.
    MaxIterations,
    /// Numerical difficulties; values are not usable.
    NumericalError,
    /// Unknown outcome.
    Unknown,
}

impl SolveStatus {
    /// Whether the solution buffers hold usable values.
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::MaxIterations)
    }
}

/// Solution of one solve call.
///
/// Built entirely by the solver before anything reaches the caller, so a
/// failed call never leaves partially written outputs behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Solve outcome.
    pub status: SolveStatus,
    /// Primal solution, length `n`.
    pub x: Vec<T>,
    /// Dual solution, length `m`.
    pub y: Vec<T>,
    /// Optimal objective value.
    pub optval: T,
    /// Iterations performed.
    pub iterations: u32,
}

impl<T: Real> Solution<T> {
    /// Write this solution into caller-owned output buffers.
    ///
    /// Nothing is written unless the status indicates usable values.
    /// The `y` and `optval` destinations are optional, mirroring hosts
    /// that request fewer outputs.
    ///
    /// # Panics
    ///
    /// Panics if a provided buffer's length does not match the solution
    /// vector it receives.
    pub fn commit_into(
        &self,
        x_out: &mut [T],
        y_out: Option<&mut [T]>,
        optval_out: Option<&mut T>,
    ) {
        if !self.status.has_solution() {
            return;
        }
        x_out.copy_from_slice(&self.x);
        if let Some(y_out) = y_out {
            y_out.copy_from_slice(&self.y);
        }
        if let Some(optval_out) = optval_out {
            *optval_out = self.optval;
        }
    }
}

/// A graph-form solver implementation.
///
/// Invoked exactly once per marshaled request; runs to completion and
/// reports its outcome through the returned [`Solution`]'s status. The
/// marshaling error taxonomy is reserved for boundary failures, which
/// all abort before this trait is reached.
pub trait GraphFormSolver<T: Real> {
    /// Run one solve over the assembled input.
    fn solve(&mut self, data: &ProblemData<'_, T>) -> Solution<T>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(status: SolveStatus) -> Solution<f64> {
        Solution {
            status,
            x: vec![1.0, 2.0],
            y: vec![3.0],
            optval: 4.0,
            iterations: 5,
        }
    }

    #[test]
    fn test_commit_writes_on_success() {
        let mut x = [0.0; 2];
        let mut y = [0.0; 1];
        let mut optval = 0.0;
        solution(SolveStatus::Optimal).commit_into(&mut x, Some(&mut y), Some(&mut optval));
        assert_eq!(x, [1.0, 2.0]);
        assert_eq!(y, [3.0]);
        assert_eq!(optval, 4.0);
    }

    #[test]
    fn test_commit_skips_optional_outputs() {
        let mut x = [0.0; 2];
        solution(SolveStatus::MaxIterations).commit_into(&mut x, None, None);
        assert_eq!(x, [1.0, 2.0]);
    }

    #[test]
    fn test_commit_writes_nothing_on_failure() {
        let mut x = [0.0; 2];
        let mut optval = -1.0;
        solution(SolveStatus::NumericalError).commit_into(&mut x, None, Some(&mut optval));
        assert_eq!(x, [0.0, 0.0]);
        assert_eq!(optval, -1.0);
    }
}
