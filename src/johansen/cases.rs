//! johansen::cases — deterministic-trend cases and the per-run specification.
//!
//! Purpose
//! -------
//! Model the five deterministic-trend specifications of MacKinnon, Haug &
//! Michelis (1996) / Osterwald-Lenum (1992) as a closed enum, and bundle the
//! immutable per-run choices (lag order, case, eigenvalue tolerance) into
//! [`JohansenSpec`]. Keeping the cases a tagged enumeration — rather than a
//! trait hierarchy — lets the regression builder stay a single pure function
//! dispatching on the variant.
//!
//! Key behaviors
//! -------------
//! - [`TrendCase`] enumerates all five cases in ascending richness of
//!   deterministic terms and answers which regressors each case injects
//!   into the difference regression ([`TrendCase::includes_intercept`],
//!   [`TrendCase::includes_trend`]).
//! - The two restricted cases the engine does not approximate (no
//!   deterministic term, restricted constant) are kept in the enum so the
//!   match stays exhaustive, but [`TrendCase::ensure_supported`] rejects
//!   them with an explicit `UnsupportedCase` error instead of silently
//!   falling through.
//! - [`JohansenSpec`] validates its eigenvalue tolerance at construction and
//!   provides a documented default of [`DEFAULT_EIGEN_TOL`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Case numbering follows ascending richness: 1 = no deterministic term,
//!   2 = restricted constant, 3 = unrestricted constant, 4 = restricted
//!   trend, 5 = unrestricted trend.
//! - A `JohansenSpec` is immutable once constructed; a test run never
//!   mutates its specification.
//! - `eigen_tol` is finite and lies in `[0, 1)`.
//!
//! Conventions
//! -----------
//! - "Restricted" means the deterministic term enters the cointegrating
//!   relation; "unrestricted" means it enters the short-run (difference)
//!   equation. The engine currently supports the unrestricted-constant,
//!   restricted-trend, and unrestricted-trend cases, all of which carry an
//!   intercept in the difference regression, with a linear trend added for
//!   the two trend cases.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the case-number round trip, the regressor flags per
//!   case, `ensure_supported` for both rejected and accepted cases, and
//!   tolerance validation in `JohansenSpec::new`.

use crate::johansen::errors::{CointError, CointResult};

/// Default eigenvalue-validity tolerance used by [`JohansenSpec::with_defaults`].
///
/// Eigenvalues are accepted iff `-tol ≤ λ ≤ 1 − tol`; the bound is explicit
/// so callers working with nearly collinear systems can widen or tighten it.
pub const DEFAULT_EIGEN_TOL: f64 = 1e-9;

/// TrendCase — the five deterministic-trend specifications.
///
/// Purpose
/// -------
/// Identify which deterministic terms (constant, linear trend) are included
/// in the test and whether they are restricted to the cointegrating relation
/// or enter the short-run dynamics unrestricted, following the enumeration
/// of MacKinnon (1996).
///
/// Variants
/// --------
/// - `NoDeterministicTerm` (case 1): series have zero mean and no trend.
///   Not implemented; see [`TrendCase::ensure_supported`].
/// - `RestrictedConstant` (case 2): a constant inside the cointegrating
///   relation only. Not implemented.
/// - `UnrestrictedConstant` (case 3): a constant in the difference
///   regression; series may have linear trends.
/// - `RestrictedTrend` (case 4): series and cointegrating relations may
///   have linear trends, no quadratic trends.
/// - `UnrestrictedTrend` (case 5): series may have quadratic trends,
///   cointegrating relations linear trends.
///
/// Invariants
/// ----------
/// - The enum is closed and `Copy`; dispatch on it is exhaustive everywhere
///   so adding a case later is a compile-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendCase {
    NoDeterministicTerm,
    RestrictedConstant,
    UnrestrictedConstant,
    RestrictedTrend,
    UnrestrictedTrend,
}

impl TrendCase {
    /// The 1-based case number in ascending richness of deterministic terms.
    pub fn case_number(&self) -> usize {
        match self {
            TrendCase::NoDeterministicTerm => 1,
            TrendCase::RestrictedConstant => 2,
            TrendCase::UnrestrictedConstant => 3,
            TrendCase::RestrictedTrend => 4,
            TrendCase::UnrestrictedTrend => 5,
        }
    }

    /// Look up a case from its 1-based number; `None` outside 1..=5.
    pub fn from_case_number(number: usize) -> Option<TrendCase> {
        match number {
            1 => Some(TrendCase::NoDeterministicTerm),
            2 => Some(TrendCase::RestrictedConstant),
            3 => Some(TrendCase::UnrestrictedConstant),
            4 => Some(TrendCase::RestrictedTrend),
            5 => Some(TrendCase::UnrestrictedTrend),
            _ => None,
        }
    }

    /// Whether the difference regression carries an intercept column.
    ///
    /// Every case richer than "no deterministic term" does; for the
    /// restricted-constant case the constant would belong inside the level
    /// relation instead, which is one of the reasons that case is rejected
    /// by [`TrendCase::ensure_supported`].
    pub fn includes_intercept(&self) -> bool {
        !matches!(self, TrendCase::NoDeterministicTerm)
    }

    /// Whether the difference regression carries a linear-trend column.
    pub fn includes_trend(&self) -> bool {
        matches!(self, TrendCase::RestrictedTrend | TrendCase::UnrestrictedTrend)
    }

    /// Reject the two deterministic-trend cases the engine does not support.
    ///
    /// Returns
    /// -------
    /// `CointResult<()>`
    ///   - `Ok(())` for the unrestricted-constant, restricted-trend, and
    ///     unrestricted-trend cases.
    ///   - `Err(CointError::UnsupportedCase)` for the no-deterministic-term
    ///     and restricted-constant cases. These require the level equation
    ///     to be augmented with restricted deterministic regressors, which
    ///     this engine deliberately refuses to approximate rather than
    ///     returning a silently wrong answer.
    ///
    /// Notes
    /// -----
    /// - Checked before input validation and before any matrix is built, so
    ///   an unsupported case fails identically regardless of the data.
    pub fn ensure_supported(&self) -> CointResult<()> {
        match self {
            TrendCase::NoDeterministicTerm | TrendCase::RestrictedConstant => {
                Err(CointError::UnsupportedCase(*self))
            }
            TrendCase::UnrestrictedConstant
            | TrendCase::RestrictedTrend
            | TrendCase::UnrestrictedTrend => Ok(()),
        }
    }
}

impl std::fmt::Display for TrendCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TrendCase::NoDeterministicTerm => "1 (no deterministic term)",
            TrendCase::RestrictedConstant => "2 (restricted constant)",
            TrendCase::UnrestrictedConstant => "3 (unrestricted constant)",
            TrendCase::RestrictedTrend => "4 (restricted trend)",
            TrendCase::UnrestrictedTrend => "5 (unrestricted trend)",
        };
        write!(f, "{label}")
    }
}

/// JohansenSpec — immutable per-run specification for one test invocation.
///
/// Purpose
/// -------
/// Bundle the lag order, deterministic-trend case, and the eigenvalue
/// validity tolerance chosen once per test run. Construction validates the
/// tolerance; the case is checked against the supported set by the entry
/// point so that the `NotImplemented` failure takes precedence over data
/// validation.
///
/// Fields
/// ------
/// - `lag_order`: `usize`
///   Number of lagged-difference regressors `p ≥ 0`.
/// - `case`: [`TrendCase`]
///   Deterministic-trend specification.
/// - `eigen_tol`: `f64`
///   Validity tolerance for eigenvalues; a computed eigenvalue λ is
///   accepted iff `-eigen_tol ≤ λ ≤ 1 − eigen_tol`.
///
/// Invariants
/// ----------
/// - `eigen_tol` is finite and in `[0, 1)`.
/// - Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JohansenSpec {
    /// Number of lagged-difference regressors (p ≥ 0).
    pub lag_order: usize,
    /// Deterministic-trend specification.
    pub case: TrendCase,
    /// Eigenvalue validity tolerance; accepted range is [-tol, 1 - tol].
    pub eigen_tol: f64,
}

impl JohansenSpec {
    /// Construct a specification with an explicit eigenvalue tolerance.
    ///
    /// Parameters
    /// ----------
    /// - `lag_order`: number of lagged-difference regressors, `p ≥ 0`.
    /// - `case`: deterministic-trend specification.
    /// - `eigen_tol`: eigenvalue validity tolerance; must be finite and in
    ///   `[0, 1)`.
    ///
    /// Returns
    /// -------
    /// `CointResult<JohansenSpec>`
    ///   - `Ok` when the tolerance is admissible.
    ///   - `Err(CointError::InvalidTolerance)` otherwise.
    pub fn new(lag_order: usize, case: TrendCase, eigen_tol: f64) -> CointResult<Self> {
        if !eigen_tol.is_finite() || !(0.0..1.0).contains(&eigen_tol) {
            return Err(CointError::InvalidTolerance(eigen_tol));
        }
        Ok(JohansenSpec { lag_order, case, eigen_tol })
    }

    /// Construct a specification with the default tolerance
    /// [`DEFAULT_EIGEN_TOL`].
    pub fn with_defaults(lag_order: usize, case: TrendCase) -> Self {
        JohansenSpec { lag_order, case, eigen_tol: DEFAULT_EIGEN_TOL }
    }
}
