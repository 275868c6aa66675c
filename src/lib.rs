//! rust_cointegration — the Johansen cointegration test with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Johansen cointegration test to Python via the
//! `_rust_cointegration` extension module. When the `python-bindings`
//! feature is enabled, this module defines the Python-facing classes and
//! submodules used by the `rust_cointegration` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`johansen`) as the public crate
//!   surface.
//! - Define the `#[pyclass]` wrapper [`JohansenTest`] and the `#[pymodule]`
//!   initializer for the `_rust_cointegration` Python extension.
//! - Create and register the `cointegration` Python submodule under
//!   `rust_cointegration` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible type mirrors the
//!   invariants and signatures of its Rust counterpart
//!   ([`JohansenOutcome`]).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_cointegration.cointegration`
//!   and are typically wrapped by thin pure-Python facades in the top-level
//!   `rust_cointegration` package.
//! - Indexing and statistical conventions follow the documentation of the
//!   underlying `johansen` modules; errors from core Rust code are
//!   converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the `johansen` module and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_cointegration` module
//!   defined here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the crate's integration tests; smoke tests for the PyO3
//!   bindings verify that classes can be constructed and queried from
//!   Python.

pub mod johansen;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    johansen::{cases::JohansenSpec, report::JohansenOutcome},
    utils::{
        extract_f64_matrix, extract_significance_level, extract_statistic, extract_trend_case,
    },
};

/// JohansenTest — Python-facing wrapper for the Johansen cointegration test.
///
/// Purpose
/// -------
/// Represent the result of the Johansen cointegration test when called from
/// Python and forward all computation to [`JohansenOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into an owned `f64` matrix.
/// - Run the test via [`JohansenOutcome::johansen`] and store the outcome
///   internally.
/// - Expose the eigenvalues, cointegrating vectors, statistics, critical
///   values, and rank decisions as Python properties and methods.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `JohansenTest(data, lag_order=1, case=3, eigen_tol=None)`:
/// - `data`: `&PyAny`
///   Two-dimensional array-like of `f64` values, rows = time steps,
///   columns = series.
/// - `lag_order`: `Option<usize>`
///   Number of lagged differences; defaults to 1.
/// - `case`: `Option<usize>`
///   Deterministic-trend case number in 1..=5; defaults to 3
///   (unrestricted constant). Cases 1 and 2 raise `ValueError`.
/// - `eigen_tol`: `Option<f64>`
///   Eigenvalue validity tolerance; defaults to the crate's documented
///   default when `None`.
///
/// Fields
/// ------
/// - `inner`: [`JohansenOutcome`]
///   Rust-side container holding the full test outcome used by the
///   accessors.
///
/// Invariants
/// ----------
/// - `inner` always describes a completed run; construction fails with
///   `ValueError` otherwise.
///
/// Performance
/// -----------
/// - One allocation copies the Python data into a Rust matrix; property
///   access clones only the requested piece.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`JohansenOutcome::johansen`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_cointegration.cointegration")]
pub struct JohansenTest {
    /// The Johansen test result struct.
    inner: JohansenOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl JohansenTest {
    /// Result of the Johansen cointegration test.
    ///
    /// Eigenvalues are sorted descending; entry `r` of each statistic
    /// array tests the rank hypothesis `r`.
    #[new]
    #[pyo3(
        text_signature = "(data, /, lag_order=1, case=3, eigen_tol=None)",
        signature = (raw_data, lag_order = 1, case = 3, eigen_tol = None)
    )]
    pub fn johansen<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, lag_order: Option<usize>,
        case: Option<usize>, eigen_tol: Option<f64>,
    ) -> PyResult<JohansenTest> {
        let trend_case = extract_trend_case(case.unwrap_or(3))?;
        let lag = lag_order.unwrap_or(1);
        let spec = match eigen_tol {
            Some(tol) => JohansenSpec::new(lag, trend_case, tol)?,
            None => JohansenSpec::with_defaults(lag, trend_case),
        };

        let data = extract_f64_matrix(py, raw_data)?;
        let outcome = JohansenOutcome::johansen(data.view(), &spec)?;
        Ok(JohansenTest { inner: outcome })
    }

    /// The squared canonical correlations, sorted descending.
    #[getter]
    pub fn eigenvalues(&self) -> Vec<f64> {
        self.inner.eigenvalues.to_vec()
    }

    /// The cointegrating vectors as rows of a nested list; row `r` pairs
    /// with `eigenvalues[r]` and is normalized against `S11`.
    #[getter]
    pub fn eigenvectors(&self) -> Vec<Vec<f64>> {
        // Columns of the Rust matrix become rows for Python consumption.
        (0..self.inner.vectors.ncols()).map(|c| self.inner.vectors.column(c).to_vec()).collect()
    }

    /// Trace statistics indexed by the null-hypothesis rank.
    #[getter]
    pub fn trace_statistics(&self) -> Vec<f64> {
        self.inner.statistics.trace.to_vec()
    }

    /// Max-eigenvalue statistics indexed by the null-hypothesis rank.
    #[getter]
    pub fn max_eigen_statistics(&self) -> Vec<f64> {
        self.inner.statistics.max_eigen.to_vec()
    }

    /// Tabulated `[90%, 95%, 99%]` trace critical values per rank.
    #[getter]
    pub fn trace_critical_values(&self) -> Vec<Vec<f64>> {
        self.inner.decisions.iter().map(|d| d.trace_critical.to_vec()).collect()
    }

    /// Tabulated `[90%, 95%, 99%]` max-eigenvalue critical values per rank.
    #[getter]
    pub fn max_eigen_critical_values(&self) -> Vec<Vec<f64>> {
        self.inner.decisions.iter().map(|d| d.max_eigen_critical.to_vec()).collect()
    }

    /// Effective sample size after differencing and lagging.
    #[getter]
    pub fn sample_size(&self) -> usize {
        self.inner.sample_size
    }

    /// The deterministic-trend case number the test ran under.
    #[getter]
    pub fn case(&self) -> usize {
        self.inner.spec.case.case_number()
    }

    /// The lag order the test ran under.
    #[getter]
    pub fn lag_order(&self) -> usize {
        self.inner.spec.lag_order
    }

    /// Estimated cointegration rank from the sequential trace procedure.
    #[pyo3(text_signature = "(self, /, level=0.95)", signature = (level = 0.95))]
    pub fn rank(&self, level: Option<f64>) -> PyResult<usize> {
        let level = extract_significance_level(level.unwrap_or(0.95))?;
        Ok(self.inner.rank_at(level))
    }

    /// Ranks rejected by the given statistic at the given level.
    #[pyo3(
        text_signature = "(self, /, statistic='trace', level=0.95)",
        signature = (statistic = "trace", level = 0.95)
    )]
    pub fn rejected_ranks(&self, statistic: Option<&str>, level: Option<f64>) -> PyResult<Vec<usize>> {
        let statistic = extract_statistic(statistic.unwrap_or("trace"))?;
        let level = extract_significance_level(level.unwrap_or(0.95))?;
        Ok(self.inner.rejected_ranks(statistic, level))
    }
}

/// _rust_cointegration — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_cointegration` Python module and register the
/// `cointegration` submodule used by the public `rust_cointegration`
/// package.
///
/// Key behaviors
/// -------------
/// - Create the `cointegration` submodule and attach it to the parent
///   `_rust_cointegration` module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_cointegration`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_cointegration<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let cointegration_mod = PyModule::new(_py, "cointegration")?;
    cointegration(_py, m, &cointegration_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_cointegration.cointegration", cointegration_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn cointegration<'py>(
    _py: Python, rust_cointegration: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<JohansenTest>()?;
    rust_cointegration.add_submodule(m)?;
    Ok(())
}
