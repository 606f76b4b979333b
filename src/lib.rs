//! # graphform
//!
//! Marshaling layer between a dynamically-typed, column-major host
//! environment and a graph-form convex solver.
//!
//! A graph-form problem is
//!
//! ```text
//! minimize    f(y) + g(x)
//! subject to  y = A x
//! ```
//!
//! with separable `f` and `g`: one additive term per row of `A` and one
//! per column. Hosts hand this layer a dense column-major coefficient
//! matrix, two struct-like records describing the `f` and `g` terms, and
//! an optional settings record. The crate validates those inputs,
//! converts them into the solver's strongly-typed, row-major contract,
//! invokes the solver behind the [`solver::GraphFormSolver`] trait, and
//! hands the results back at the precision the matrix arrived in.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphform::prelude::*;
//!
//! // 2x3 coefficient matrix, column-major as the host stores it.
//! let a = HostArray::matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! // f: squared loss on every row; g: absolute value, scaled by 0.5.
//! let f = HostRecord::new().with("kind", HostArray::scalar(14.0));
//! let g = HostRecord::new()
//!     .with("kind", HostArray::scalar(0.0))
//!     .with("e", HostArray::scalar(0.5));
//!
//! let result = solve_request(&mut my_solver, &a, &f, &g, None)?;
//! ```
//!
//! ## Validation
//!
//! Every malformed input aborts the call before the solver runs, with a
//! closed error taxonomy ([`BridgeError`]) whose variants carry stable
//! machine-readable codes and name the offending field. No partial
//! outputs are ever produced: solutions are built whole and only then
//! committed into caller-owned storage.
//!
//! ## Architecture
//!
//! - **Host model** ([`host`]): tagged arrays as a sum type over the
//!   host's element representations, plus struct-like records
//! - **Marshaling** ([`marshal`]): layout conversion, function-descriptor
//!   population with scalar-broadcast semantics, settings extraction
//! - **Solver seam** ([`solver`]): the fixed downstream input/output
//!   contract behind a trait; this crate ships no solve algorithm
//! - **Orchestration** ([`bridge`]): precision dispatch and the
//!   marshal-then-solve call sequence

pub mod bridge;
pub mod error;
pub mod host;
pub mod marshal;
pub mod real;
pub mod solver;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use graphform::prelude::*;
/// ```
pub mod prelude {
    // Host-side data model
    pub use crate::host::{ClassId, HostArray, HostData, HostRecord};

    // Marshaling
    pub use crate::marshal::{
        col_to_row_major, extract_settings, populate, FunctionKind, FunctionObj, Settings,
    };

    // Solver contract
    pub use crate::solver::{GraphFormSolver, ProblemData, Solution, SolveStatus};

    // Orchestration
    pub use crate::bridge::{solve, solve_request, HostSolution};

    // Working precision
    pub use crate::real::Real;

    // Errors
    pub use crate::error::{BridgeError, Result};
}

// Re-export main types at crate root
pub use bridge::{solve, solve_request, HostSolution};
pub use error::{BridgeError, Result};
