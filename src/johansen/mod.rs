//! johansen — the Johansen cointegration test and its infrastructure.
//!
//! Purpose
//! -------
//! Implement the Johansen maximum-likelihood procedure for detecting
//! cointegration in a multivariate time series: the reduced-rank regression,
//! the trace and max-eigenvalue likelihood-ratio statistics, and their
//! comparison against tabulated asymptotic critical values. This subtree
//! collects the test itself together with shared input validation, error
//! handling, and Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the full test via [`JohansenOutcome`] and its constructor
//!   [`JohansenOutcome::johansen`](report::JohansenOutcome::johansen),
//!   which validates the input, runs the eigen-statistics engine, computes
//!   both statistic families, and annotates every rank hypothesis with its
//!   critical values in one deterministic pass.
//! - Model the five deterministic-trend cases as the closed enum
//!   [`TrendCase`] and the per-run choices (lag order, case, eigenvalue
//!   tolerance) as [`JohansenSpec`].
//! - Centralize input guards in [`validate_input`] and failures in the
//!   single error surface [`CointError`] / [`CointResult`], with a
//!   conversion to Python exceptions when `python-bindings` is enabled.
//! - Resolve asymptotic critical values from embedded tables via
//!   [`critical_values::critical_values`]; dimensions beyond the tables
//!   fail loudly instead of extrapolating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Observation matrices are `T_raw × k` with finite values and at least
//!   `k + lag_order + 1` rows; all entry points check this before any
//!   matrix is built.
//! - The test is a pure function of its inputs: identical data and spec
//!   produce bit-identical outcomes.
//! - Numerical degeneracies (singular moment matrices, eigenvalues outside
//!   `[0, 1)`) are reported as errors, never regularized or clamped.
//!
//! Conventions
//! -----------
//! - Public data enters and leaves as `ndarray` types; `nalgebra` is used
//!   internally for the Cholesky and symmetric-eigen work.
//! - Case numbering follows ascending richness of deterministic terms
//!   (1 = no deterministic term … 5 = unrestricted trend); cases 1 and 2
//!   are deliberately not implemented and rejected up front.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_cointegration::johansen::{JohansenOutcome, JohansenSpec, TrendCase};
//!
//!   # let x = ndarray::Array2::from_shape_fn((40, 2), |(i, j)| {
//!   #     (i as f64 * 0.7 + j as f64).sin() + (i as f64) * 0.3 * (j as f64 + 1.0)
//!   # });
//!   let spec = JohansenSpec::with_defaults(1, TrendCase::UnrestrictedConstant);
//!   let outcome = JohansenOutcome::johansen(x.view(), &spec)?;
//!   # Ok::<(), rust_cointegration::johansen::CointError>(())
//!   ```
//!
//!   and only refers to the inner modules directly when matching on
//!   [`CointError`] or resolving critical values standalone.
//! - Python bindings expose a thin wrapper around the same entry point and
//!   rely on `From<CointError> for PyErr` to raise `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module: error display and classification
//!   in [`errors`], case flags in [`cases`], guard branches in
//!   [`validation`], regression/eigen numerics in [`engine`], statistic
//!   arithmetic in [`statistics`], table contents in [`critical_values`],
//!   and pipeline assembly in [`report`].
//! - End-to-end behavior on seeded synthetic series is exercised by the
//!   crate's integration tests.

pub mod cases;
pub mod critical_values;
pub mod engine;
pub mod errors;
pub mod report;
pub mod statistics;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cases::{DEFAULT_EIGEN_TOL, JohansenSpec, TrendCase};
pub use self::critical_values::{SignificanceLevel, Statistic};
pub use self::errors::{CointError, CointErrorKind, CointResult};
pub use self::report::{JohansenOutcome, RankDecision};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_cointegration::johansen::prelude::*;
//
// to import the main testing surface in a single line.

pub mod prelude {
    pub use super::cases::{JohansenSpec, TrendCase};
    pub use super::critical_values::{SignificanceLevel, Statistic};
    pub use super::errors::{CointError, CointErrorKind, CointResult};
    pub use super::report::{JohansenOutcome, RankDecision};
}
