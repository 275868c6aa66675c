use ndarray::Array2;

use crate::johansen::errors::{CointError, CointResult};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::johansen::{
    cases::TrendCase,
    critical_values::{SignificanceLevel, Statistic},
};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

/// Assemble an owned matrix from nested rows, rejecting ragged input.
///
/// Every row must have the same length as the first; the first offending
/// row fails with `ShapeMismatch { expected, actual }` carrying the two
/// lengths. A length check per row (rather than on the flattened total)
/// means compensating-length ragged input cannot slip through.
pub fn matrix_from_rows(rows: Vec<Vec<f64>>) -> CointResult<Array2<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    for row in &rows {
        if row.len() != ncols {
            return Err(CointError::ShapeMismatch { expected: ncols, actual: row.len() });
        }
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let actual = flat.len();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|_| CointError::ShapeMismatch { expected: nrows * ncols, actual })
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    // pandas.DataFrame and friends expose to_numpy().
    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(arr_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(arr_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    Ok(matrix_from_rows(rows)?)
}

#[cfg(feature = "python-bindings")]
pub fn extract_trend_case(case: usize) -> PyResult<TrendCase> {
    TrendCase::from_case_number(case).ok_or_else(|| {
        PyValueError::new_err(format!(
            "invalid deterministic-trend case {case} (expected an integer in 1..=5)"
        ))
    })
}

#[cfg(feature = "python-bindings")]
pub fn extract_significance_level(level: f64) -> PyResult<SignificanceLevel> {
    match level {
        l if (l - 0.90).abs() < 1e-12 => Ok(SignificanceLevel::Ninety),
        l if (l - 0.95).abs() < 1e-12 => Ok(SignificanceLevel::NinetyFive),
        l if (l - 0.99).abs() < 1e-12 => Ok(SignificanceLevel::NinetyNine),
        other => Err(PyValueError::new_err(format!(
            "invalid significance level {other:?} (expected 0.90, 0.95, or 0.99)"
        ))),
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_statistic(name: &str) -> PyResult<Statistic> {
    match name.to_lowercase().as_str() {
        "trace" => Ok(Statistic::Trace),
        "max_eigen" | "maxeig" | "max_eigenvalue" => Ok(Statistic::MaxEigen),
        other => Err(PyValueError::new_err(format!(
            "invalid statistic {other:?} (expected 'trace' or 'max_eigen')"
        ))),
    }
}
