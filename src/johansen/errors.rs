//! johansen::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the Johansen cointegration
//! test, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. Validation failures, unsupported deterministic-trend
//! cases, numerical degeneracies, and critical-value table misses all flow
//! through a single [`CointError`] surface.
//!
//! Key behaviors
//! -------------
//! - Define [`CointResult`] and [`CointError`] as the canonical result and
//!   error types for the engine, the statistic computation, and the
//!   critical-value resolver.
//! - Classify every variant into one of four coarse [`CointErrorKind`]s
//!   (invalid input, not implemented, numerical degeneracy, out of table
//!   range) so callers can branch on failure class without matching every
//!   variant.
//! - Attach human-readable `Display` messages that embed the offending
//!   payload (value, index, matrix name, case) so diagnostics are meaningful
//!   without additional context.
//! - Implement `From<CointError> for PyErr` to surface Rust-side failures as
//!   `ValueError` to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules using this error type validate their inputs and return
//!   [`CointResult<T>`] instead of panicking; panics indicate programming
//!   errors, not malformed user input.
//! - `CointError` values are small, cheap to clone, and carry just enough
//!   payload to diagnose the failure (never large matrices).
//! - Computation never retries on error: the test is deterministic, so a
//!   failed invocation reproduces identically on the same input.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints
//!   ("need at least k + lag_order + 1 rows", "eigenvalue outside [0, 1)")
//!   rather than low-level linear-algebra details.
//! - PyO3 conversion always uses `PyValueError`, preserving the Rust
//!   `Display` message verbatim.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload and that [`CointError::kind`] maps every variant to the
//!   documented kind.

use crate::johansen::cases::TrendCase;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type CointResult<T> = Result<T, CointError>;

/// Coarse classification of [`CointError`] variants.
///
/// Purpose
/// -------
/// Expose the four failure classes of the Johansen test so callers can
/// decide how to react (reject the input, pick another case, reduce the
/// system dimension) without matching on every concrete variant.
///
/// Variants
/// --------
/// - `InvalidInput`: malformed observation matrix or options, detected
///   before any computation begins.
/// - `NotImplemented`: a deterministic-trend case the engine deliberately
///   refuses to approximate.
/// - `NumericalDegeneracy`: singular moment matrices or eigenvalues outside
///   `[0, 1)` during the generalized eigen-decomposition.
/// - `OutOfTableRange`: requested dimension absent from the critical-value
///   tables; no extrapolation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CointErrorKind {
    InvalidInput,
    NotImplemented,
    NumericalDegeneracy,
    OutOfTableRange,
}

/// CointError — error conditions for the Johansen cointegration test.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur when
/// running the Johansen test: malformed observation matrices, unsupported
/// deterministic-trend cases, singular moment matrices, out-of-range
/// eigenvalues, and critical-value lookups beyond the tabulated dimensions.
///
/// Variants
/// --------
/// - `EmptySystem`
///   The observation matrix has zero columns, so there is no system to test.
/// - `InsufficientData { required, actual }`
///   Fewer than `k + lag_order + 1` rows, so the lagged regression system
///   cannot be formed.
/// - `NonFiniteValue { row, col, value }`
///   An observation is NaN or ±∞; `(row, col)` points at the first
///   offending element.
/// - `ShapeMismatch { expected, actual }`
///   Nested-row input is ragged: a row's length (`actual`) deviates from
///   the leading row's (`expected`). Raised by the Python-facing
///   constructors before any computation.
/// - `InvalidTolerance(f64)`
///   The eigenvalue-validity tolerance is not in `[0, 1)` or not finite.
/// - `UnsupportedCase(TrendCase)`
///   The requested deterministic-trend case is one of the two the engine
///   deliberately does not approximate (no deterministic term, restricted
///   constant).
/// - `SingularMatrix { matrix }`
///   A Cholesky factorization failed for the named matrix (`"Z'Z"`,
///   `"S00"`, or `"S11"`), typically because of collinear series.
/// - `EigenvalueOutOfRange { index, value }`
///   A squared canonical correlation fell outside `[-tol, 1 - tol]`,
///   indicating a numerically degenerate input.
/// - `OutOfTableRange { dimension, max }`
///   The critical-value tables do not cover `n - r = dimension` for the
///   requested case; `max` is the largest tabulated dimension.
///
/// Invariants
/// ----------
/// - Each variant carries just enough payload (offending value, index, or
///   name) for downstream logging; no large data structures are embedded.
/// - [`CointError::kind`] is total: every variant maps to exactly one
///   [`CointErrorKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum CointError {
    //------ Input validation errors ------
    EmptySystem,
    InsufficientData { required: usize, actual: usize },
    NonFiniteValue { row: usize, col: usize, value: f64 },
    ShapeMismatch { expected: usize, actual: usize },
    InvalidTolerance(f64),
    //------ Deliberate scope limits ------
    UnsupportedCase(TrendCase),
    //------ Numerical degeneracies ------
    SingularMatrix { matrix: &'static str },
    EigenvalueOutOfRange { index: usize, value: f64 },
    //------ Critical-value lookup ------
    OutOfTableRange { dimension: usize, max: usize },
}

impl CointError {
    /// Map this error to its coarse [`CointErrorKind`].
    pub fn kind(&self) -> CointErrorKind {
        match self {
            CointError::EmptySystem
            | CointError::InsufficientData { .. }
            | CointError::NonFiniteValue { .. }
            | CointError::ShapeMismatch { .. }
            | CointError::InvalidTolerance(_) => CointErrorKind::InvalidInput,
            CointError::UnsupportedCase(_) => CointErrorKind::NotImplemented,
            CointError::SingularMatrix { .. } | CointError::EigenvalueOutOfRange { .. } => {
                CointErrorKind::NumericalDegeneracy
            }
            CointError::OutOfTableRange { .. } => CointErrorKind::OutOfTableRange,
        }
    }
}

impl std::error::Error for CointError {}

impl std::fmt::Display for CointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CointError::EmptySystem => {
                write!(f, "Observation matrix has no columns; nothing to test.")
            }
            CointError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "Insufficient observations: need at least {required} rows \
                     (k + lag_order + 1), got {actual}."
                )
            }
            CointError::NonFiniteValue { row, col, value } => {
                write!(
                    f,
                    "Non-finite observation {value} at row {row}, column {col}. \
                     All values must be finite."
                )
            }
            CointError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Ragged input: a row has {actual} values where {expected} were expected."
                )
            }
            CointError::InvalidTolerance(tol) => {
                write!(f, "Invalid eigenvalue tolerance: {tol}. Must be finite and in [0, 1).")
            }
            CointError::UnsupportedCase(case) => {
                write!(
                    f,
                    "Deterministic-trend case {case} is not implemented: restricted \
                     deterministic terms require augmenting the level equation, which \
                     this engine does not approximate. Use the unrestricted-constant, \
                     restricted-trend, or unrestricted-trend case."
                )
            }
            CointError::SingularMatrix { matrix } => {
                write!(
                    f,
                    "Matrix {matrix} is singular or not positive definite; the input \
                     series are likely collinear."
                )
            }
            CointError::EigenvalueOutOfRange { index, value } => {
                write!(
                    f,
                    "Eigenvalue {value} at position {index} lies outside [0, 1); the \
                     input is numerically degenerate."
                )
            }
            CointError::OutOfTableRange { dimension, max } => {
                write!(
                    f,
                    "No tabulated critical values for dimension {dimension} \
                     (largest tabulated: {max}); refusing to extrapolate."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CointError> for PyErr {
    fn from(err: CointError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
