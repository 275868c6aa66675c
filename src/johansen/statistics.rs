//! johansen::statistics — trace and max-eigenvalue statistics.
//!
//! Purpose
//! -------
//! Turn the engine's ordered eigenvalues into the two likelihood-ratio
//! statistic families of the Johansen procedure: the trace statistic for
//! each candidate rank `r` and the max-eigenvalue statistic for each
//! incremental hypothesis `r` vs `r + 1`.
//!
//! Key behaviors
//! -------------
//! - `trace(r) = −T · Σ_{i > r} ln(1 − λ_i)` over the eigenvalues beyond
//!   rank `r`.
//! - `max_eigen(r) = −T · ln(1 − λ_{r+1})` using only the next eigenvalue.
//! - Both families are computed for `r = 0, …, k − 1` in one pass; the
//!   trailing trace statistic equals the trailing max-eigenvalue statistic
//!   by construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Eigenvalues arrive sorted descending and strictly below 1; the engine
//!   guarantees this, and this module re-checks `λ < 1` before taking the
//!   logarithm rather than producing ±∞.
//! - `T` is the effective sample size after differencing and lagging.
//!
//! Conventions
//! -----------
//! - Statistics are indexed by the null-hypothesis rank `r`, so entry `r`
//!   of each array tests "rank ≤ r" (trace) or "rank = r vs r + 1"
//!   (max-eigenvalue).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the closed-form values for hand-picked eigenvalues,
//!   monotonicity of the trace family, equality of the two trailing
//!   statistics, and the out-of-range eigenvalue guard.

use crate::johansen::errors::{CointError, CointResult};
use ndarray::{Array1, ArrayView1};

/// The two statistic families of one Johansen run, indexed by the
/// null-hypothesis rank.
///
/// Fields
/// ------
/// - `trace`: `Array1<f64>`
///   `trace[r]` tests the null "cointegration rank ≤ r" against the
///   unrestricted alternative.
/// - `max_eigen`: `Array1<f64>`
///   `max_eigen[r]` tests "rank = r" against "rank = r + 1".
///
/// Invariants
/// ----------
/// - Both arrays have length `k`.
/// - `trace` is non-increasing in `r`, every entry is non-negative up to
///   the eigenvalue tolerance, and `trace[k − 1] == max_eigen[k − 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TestStatistics {
    /// Trace statistics for ranks `0, …, k − 1`.
    pub trace: Array1<f64>,
    /// Max-eigenvalue statistics for ranks `0, …, k − 1`.
    pub max_eigen: Array1<f64>,
}

/// Compute both statistic families from ordered eigenvalues.
///
/// Parameters
/// ----------
/// - `eigenvalues`: `ArrayView1<f64>`
///   The `k` eigenvalues sorted descending, each strictly below 1.
/// - `sample_size`: `usize`
///   Effective sample size `T` used to scale both families.
///
/// Returns
/// -------
/// `CointResult<TestStatistics>`
///   Trace and max-eigenvalue statistics for every candidate rank.
///
/// Errors
/// ------
/// - `CointError::EigenvalueOutOfRange` when any eigenvalue is non-finite
///   or at least 1, which would make `ln(1 − λ)` undefined or infinite.
///   The offending value is reported as-is, never clamped.
///
/// Notes
/// -----
/// - Slightly negative eigenvalues within the engine's tolerance produce
///   small negative log terms; they pass through unchanged so callers see
///   the raw likelihood-ratio arithmetic.
pub fn compute_statistics(
    eigenvalues: ArrayView1<'_, f64>, sample_size: usize,
) -> CointResult<TestStatistics> {
    let k = eigenvalues.len();
    let t = sample_size as f64;

    let mut log_terms = Vec::with_capacity(k);
    for (index, &lambda) in eigenvalues.iter().enumerate() {
        if !lambda.is_finite() || lambda >= 1.0 {
            return Err(CointError::EigenvalueOutOfRange { index, value: lambda });
        }
        log_terms.push((1.0 - lambda).ln());
    }

    let mut trace = Array1::zeros(k);
    let mut max_eigen = Array1::zeros(k);
    // Accumulate tail sums from the smallest eigenvalue upward.
    let mut tail = 0.0;
    for r in (0..k).rev() {
        tail += log_terms[r];
        trace[r] = -t * tail;
        max_eigen[r] = -t * log_terms[r];
    }

    Ok(TestStatistics { trace, max_eigen })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form trace and max-eigenvalue values for hand-picked
    //   eigenvalues.
    // - Monotonicity of the trace family and equality of the trailing
    //   statistics.
    // - The out-of-range eigenvalue guard.
    //
    // They intentionally DO NOT cover:
    // - Eigenvalue computation itself, which lives in `engine`.
    // - Critical-value comparison, which lives in `critical_values` and
    //   `report`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the closed-form statistic values for two hand-picked
    // eigenvalues and a round sample size.
    //
    // Given
    // -----
    // - Eigenvalues [0.3, 0.1] and T = 100.
    //
    // Expect
    // ------
    // - trace[0] = −100·(ln 0.7 + ln 0.9), trace[1] = −100·ln 0.9.
    // - max_eigen[0] = −100·ln 0.7, max_eigen[1] = −100·ln 0.9.
    fn compute_statistics_matches_closed_form() {
        // Arrange
        let eigenvalues = array![0.3, 0.1];

        // Act
        let stats = compute_statistics(eigenvalues.view(), 100).expect("valid eigenvalues");

        // Assert
        let ln07 = (0.7_f64).ln();
        let ln09 = (0.9_f64).ln();
        assert!((stats.trace[0] - (-100.0 * (ln07 + ln09))).abs() < 1e-10);
        assert!((stats.trace[1] - (-100.0 * ln09)).abs() < 1e-10);
        assert!((stats.max_eigen[0] - (-100.0 * ln07)).abs() < 1e-10);
        assert!((stats.max_eigen[1] - (-100.0 * ln09)).abs() < 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Check the structural properties that hold for any admissible
    // eigenvalue sequence: trace is non-increasing in the rank and the
    // trailing trace equals the trailing max-eigenvalue statistic.
    //
    // Given
    // -----
    // - Eigenvalues [0.6, 0.25, 0.05] and T = 250.
    //
    // Expect
    // ------
    // - trace[0] ≥ trace[1] ≥ trace[2] and trace[2] == max_eigen[2].
    fn compute_statistics_trace_is_monotone_and_tails_agree() {
        // Arrange
        let eigenvalues = array![0.6, 0.25, 0.05];

        // Act
        let stats = compute_statistics(eigenvalues.view(), 250).expect("valid eigenvalues");

        // Assert
        assert!(stats.trace[0] >= stats.trace[1]);
        assert!(stats.trace[1] >= stats.trace[2]);
        assert!((stats.trace[2] - stats.max_eigen[2]).abs() < 1e-12);
        for &value in stats.trace.iter() {
            assert!(value >= 0.0, "trace statistics should be non-negative, got {value}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure an eigenvalue at or above 1 is rejected instead of producing
    // an infinite statistic.
    //
    // Given
    // -----
    // - Eigenvalues [0.5, 1.0] and T = 80.
    //
    // Expect
    // ------
    // - `Err(EigenvalueOutOfRange { index: 1, value: 1.0 })`.
    fn compute_statistics_unit_eigenvalue_is_rejected() {
        // Arrange
        let eigenvalues = array![0.5, 1.0];

        // Act
        let result = compute_statistics(eigenvalues.view(), 80);

        // Assert
        match result {
            Err(CointError::EigenvalueOutOfRange { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, 1.0);
            }
            other => panic!("expected EigenvalueOutOfRange, got {other:?}"),
        }
    }
}
