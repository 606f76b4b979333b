//! Solve orchestration: the host-facing entry points.
//!
//! [`solve_request`] is the boundary gate. It checks the coefficient
//! matrix's precision tag and dispatches to the typed orchestrator
//! [`solve`], so the returned vectors carry the same precision the
//! matrix arrived in. The orchestrator marshals in a fixed order —
//! matrix layout, settings, `f` terms, `g` terms — and the first failure
//! aborts the whole call before the solver is invoked.

use log::debug;

use crate::error::{BridgeError, Result};
use crate::host::{ClassId, HostArray, HostRecord};
use crate::marshal::{col_to_row_major, extract_settings, populate, Settings};
use crate::real::Real;
use crate::solver::{GraphFormSolver, ProblemData, Solution};

/// Solution tagged with the precision of the request's matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum HostSolution {
    /// Solved at double precision.
    Double(Solution<f64>),
    /// Solved at single precision.
    Single(Solution<f32>),
}

/// Marshal one host request and run the solver at the matrix's
/// precision.
///
/// The coefficient matrix must be double- or single-class; anything else
/// fails with `UnsupportedType` naming `A`, before any marshaling
/// begins. An absent or empty parameter record means "all defaults".
pub fn solve_request<S>(
    solver: &mut S,
    a: &HostArray,
    f: &HostRecord,
    g: &HostRecord,
    params: Option<&HostRecord>,
) -> Result<HostSolution>
where
    S: GraphFormSolver<f64> + GraphFormSolver<f32>,
{
    // An empty parameter record downgrades to "no parameters".
    let params = params.filter(|rec| !rec.is_empty());
    match a.class_id() {
        ClassId::Double => solve(solver, a, f, g, params).map(HostSolution::Double),
        ClassId::Single => solve(solver, a, f, g, params).map(HostSolution::Single),
        class => Err(BridgeError::UnsupportedType {
            field: "A".into(),
            class,
        }),
    }
}

/// Typed orchestrator: assemble the solver input at precision `T` and
/// run one solve.
///
/// Sequence: decode the matrix at working precision and flip it from the
/// host's column-major layout into the solver's row-major contract, then
/// extract settings, then populate the `f` terms (one per row) and the
/// `g` terms (one per column), then invoke the solver. Any marshaling
/// error aborts before the solver runs and produces no outputs; the
/// row-major working storage is dropped on every exit path.
pub fn solve<T, S>(
    solver: &mut S,
    a: &HostArray,
    f: &HostRecord,
    g: &HostRecord,
    params: Option<&HostRecord>,
) -> Result<Solution<T>>
where
    T: Real,
    S: GraphFormSolver<T>,
{
    let (m, n) = a.dims();

    let col_major: Vec<T> = (0..m * n).map(|idx| a.data().project(idx)).collect();
    let a_row_major = col_to_row_major(&col_major, m, n);

    let mut settings = Settings::<T>::default();
    if let Some(rec) = params {
        extract_settings(rec, &mut settings)?;
    }

    let f_objs = populate("f", f, m)?;
    let g_objs = populate("g", g, n)?;

    debug!(
        "solving {m}x{n} graph-form problem (rho {}, max_iter {})",
        settings.rho, settings.max_iter
    );

    let data = ProblemData {
        a: &a_row_major,
        m,
        n,
        f: f_objs,
        g: g_objs,
        settings,
    };
    Ok(solver.solve(&data))
}
