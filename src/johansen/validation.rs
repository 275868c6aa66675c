//! johansen::validation — shared input guards for the cointegration test.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the Johansen test so the engine,
//! the result assembly, and the Python bindings all enforce the same
//! preconditions on the observation matrix and the run specification before
//! any matrix is built.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions (non-empty system, minimum row count
//!   relative to the lag order, finiteness of every observation, admissible
//!   tolerance) before expensive computation is performed.
//! - Map invalid inputs into structured [`CointError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The observation matrix has `k ≥ 1` columns.
//! - Row count is at least `k + lag_order + 1`, otherwise the lagged
//!   regression system is undefined.
//! - All observations are finite (no NaN, no ±∞).
//! - The spec's eigenvalue tolerance is finite and in `[0, 1)`.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no I/O and no
//!   allocations beyond error construction.
//! - Supported-case checking is NOT done here: the entry point rejects
//!   unsupported deterministic-trend cases before calling
//!   [`validate_input`], so the `NotImplemented` failure takes precedence
//!   over data problems.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch of [`validate_input`] and a simple
//!   success path.

use crate::johansen::cases::JohansenSpec;
use crate::johansen::errors::{CointError, CointResult};
use ndarray::ArrayView2;

/// Validate basic input constraints for one Johansen test invocation.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Observation matrix of shape `T_raw × k` (rows = time steps, columns =
///   series). Must have at least one column, at least
///   `k + lag_order + 1` rows, and only finite values.
/// - `spec`: `&JohansenSpec`
///   Per-run specification; its eigenvalue tolerance must be finite and in
///   `[0, 1)`.
///
/// Returns
/// -------
/// `CointResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(CointError)` otherwise, with a variant encoding which
///     constraint failed and the offending value or position.
///
/// Errors
/// ------
/// - `CointError::EmptySystem` when `k == 0`.
/// - `CointError::InsufficientData { required, actual }` when
///   `T_raw < k + lag_order + 1`.
/// - `CointError::NonFiniteValue { row, col, value }` for the first
///   non-finite observation encountered (row-major scan).
/// - `CointError::InvalidTolerance(tol)` when the spec's tolerance is
///   inadmissible.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `CointError`.
///
/// Notes
/// -----
/// - A successful return guarantees the regression builder can form the
///   lagged system with a strictly positive effective sample size.
/// - Rank problems (collinear series) cannot be caught by a cheap scan and
///   surface later as `NumericalDegeneracy`-kind errors in the engine.
pub fn validate_input(x: ArrayView2<'_, f64>, spec: &JohansenSpec) -> CointResult<()> {
    let (rows, cols) = x.dim();

    if cols == 0 {
        return Err(CointError::EmptySystem);
    }

    let required = cols + spec.lag_order + 1;
    if rows < required {
        return Err(CointError::InsufficientData { required, actual: rows });
    }

    for ((row, col), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(CointError::NonFiniteValue { row, col, value });
        }
    }

    if !spec.eigen_tol.is_finite() || !(0.0..1.0).contains(&spec.eigen_tol) {
        return Err(CointError::InvalidTolerance(spec.eigen_tol));
    }

    Ok(())
}
