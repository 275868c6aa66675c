//! Integration tests for the Johansen cointegration test pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: from a raw multivariate series, through
//!   the lagged-difference regressions and the generalized eigen-solve, to
//!   trace and max-eigenvalue statistics annotated with tabulated critical
//!   values and rank decisions.
//! - Exercise realistic configurations (all supported deterministic-trend
//!   cases, several lag orders, bivariate and trivariate systems) rather
//!   than toy edge cases only.
//!
//! Coverage
//! --------
//! - `johansen::report::JohansenOutcome`:
//!   - End-to-end construction across cases 3–5 and lag orders 1–2.
//!   - Sequential rank estimation and rejected-rank listing.
//! - `johansen::cases` / `johansen::validation`:
//!   - Unsupported-case and invalid-input rejection through the public
//!     entry point.
//! - `johansen::statistics` / `johansen::critical_values`:
//!   - Structural relations between the two statistic families and their
//!     tabulated quantiles on the assembled outcome.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (regression
//!   layout, moment matrices, table contents) — these are covered by unit
//!   tests.
//! - Python bindings — those are expected to be tested at a higher
//!   integration or system level.
//! - Statistical power over seed grids — that belongs in targeted
//!   simulation studies.
use ndarray::Array2;
use rust_cointegration::johansen::{
    CointErrorKind, JohansenOutcome, JohansenSpec, SignificanceLevel, Statistic, TrendCase,
};

/// Purpose
/// -------
/// Provide a deterministic pseudo-random draw in `[-0.5, 0.5]` so every
/// test runs on a reproducible series with no hidden randomness.
///
/// Parameters
/// ----------
/// - `state`: Mutable LCG state; advanced on every call.
///
/// Returns
/// -------
/// - A value uniformly spread over `[-0.5, 0.5]`.
fn lcg(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64) - 0.5
}

/// Purpose
/// -------
/// Generate a bivariate system with exactly one cointegrating relation:
/// the first series is a random walk, the second tracks `beta` times the
/// first plus stationary noise.
///
/// Parameters
/// ----------
/// - `n`: Number of time steps.
/// - `beta`: Long-run coefficient tying the second series to the first.
/// - `noise`: Amplitude of the stationary deviation of the second series.
/// - `seed`: LCG seed.
///
/// Returns
/// -------
/// - An `n × 2` observation matrix.
///
/// Invariants
/// ----------
/// - The linear combination `y2 − beta·y1` is stationary by construction,
///   so the system has cointegration rank 1 in population.
fn gen_cointegrated_pair(n: usize, beta: f64, noise: f64, seed: u64) -> Array2<f64> {
    let mut s = seed;
    let mut data = Array2::zeros((n, 2));
    let mut level = 100.0;
    for i in 0..n {
        level += lcg(&mut s) * 0.5;
        data[[i, 0]] = level;
        data[[i, 1]] = beta * level + lcg(&mut s) * noise;
    }
    data
}

/// Purpose
/// -------
/// Generate a trivariate system driven by a single common stochastic
/// trend, giving two cointegrating relations in population.
///
/// Parameters
/// ----------
/// - `n`: Number of time steps.
/// - `seed`: LCG seed.
///
/// Returns
/// -------
/// - An `n × 3` observation matrix where every series is a distinct
///   loading on the same random walk plus independent stationary noise.
fn gen_common_trend_triple(n: usize, seed: u64) -> Array2<f64> {
    let mut s = seed;
    let mut data = Array2::zeros((n, 3));
    let mut level = 50.0;
    let loadings = [1.0, 0.7, -1.3];
    for i in 0..n {
        level += lcg(&mut s) * 0.5;
        for (j, &loading) in loadings.iter().enumerate() {
            data[[i, j]] = loading * level + lcg(&mut s) * 0.8;
        }
    }
    data
}

#[test]
// Purpose
// -------
// Ensure the public API runs end-to-end across every supported
// deterministic-trend case and several lag orders, producing outcomes
// with the documented shapes and structural relations.
//
// Given
// -----
// - A seeded cointegrated pair of length 250.
// - Cases 3 (unrestricted constant), 4 (restricted trend), and
//   5 (unrestricted trend), crossed with lag orders 0 through 2; lag 0
//   leaves only the deterministic terms in the regressor block.
//
// Expect
// ------
// - Every run succeeds with 2 eigenvalues in [0, 1) sorted descending,
//   2 decisions, and effective sample size 250 − lag − 1.
// - Trace statistics are non-increasing in the rank and the trailing
//   trace statistic equals the trailing max-eigenvalue statistic.
fn johansen_api_supports_all_cases_and_lag_orders() {
    let x = gen_cointegrated_pair(250, 1.5, 0.5, 42);
    let cases =
        [TrendCase::UnrestrictedConstant, TrendCase::RestrictedTrend, TrendCase::UnrestrictedTrend];
    for case in cases {
        for lag in [0_usize, 1, 2] {
            let spec = JohansenSpec::with_defaults(lag, case);
            let outcome = JohansenOutcome::johansen(x.view(), &spec)
                .unwrap_or_else(|e| panic!("case {case}, lag {lag} should run, got {e}"));
            assert_eq!(outcome.system_dimension(), 2);
            assert_eq!(outcome.sample_size, 250 - lag - 1);
            assert_eq!(outcome.decisions.len(), 2);
            assert!(outcome.eigenvalues[0] >= outcome.eigenvalues[1]);
            for &lambda in outcome.eigenvalues.iter() {
                assert!((0.0..1.0).contains(&lambda) || lambda.abs() < 1e-9);
            }
            assert!(outcome.statistics.trace[0] >= outcome.statistics.trace[1]);
            assert!(
                (outcome.statistics.trace[1] - outcome.statistics.max_eigen[1]).abs() < 1e-10,
                "trailing trace and max-eigenvalue statistics must coincide"
            );
        }
    }
}

#[test]
// Purpose
// -------
// Verify the rank machinery on a strongly cointegrated pair: the rank-0
// hypothesis must be rejected at every level by both statistics, so the
// sequential estimate is at least 1 and rank 0 appears in the rejected
// listing.
//
// Given
// -----
// - A seeded cointegrated pair of length 500 with tight noise, lag
//   order 1, unrestricted constant.
//
// Expect
// ------
// - `decisions[0]` rejects at 90/95/99 for trace and max-eigenvalue.
// - `rank_at` is ≥ 1 at every level and `rejected_ranks` contains 0 for
//   both statistics at the 95% level.
fn strong_cointegration_is_detected_at_every_level() {
    let x = gen_cointegrated_pair(500, 2.0, 0.25, 7);
    let spec = JohansenSpec::with_defaults(1, TrendCase::UnrestrictedConstant);
    let outcome = JohansenOutcome::johansen(x.view(), &spec).expect("test should run");

    assert_eq!(outcome.decisions[0].trace_rejects, [true, true, true]);
    assert_eq!(outcome.decisions[0].max_eigen_rejects, [true, true, true]);
    for level in
        [SignificanceLevel::Ninety, SignificanceLevel::NinetyFive, SignificanceLevel::NinetyNine]
    {
        assert!(outcome.rank_at(level) >= 1, "rank estimate should be at least 1 at {level}");
    }
    for statistic in [Statistic::Trace, Statistic::MaxEigen] {
        assert!(outcome.rejected_ranks(statistic, SignificanceLevel::NinetyFive).contains(&0));
    }
}

#[test]
// Purpose
// -------
// Run a trivariate system with one common stochastic trend end-to-end
// and check the outcome's shape and ordering properties scale past the
// bivariate case.
//
// Given
// -----
// - A seeded 400×3 system where all series load on one random walk, lag
//   order 2, unrestricted constant.
//
// Expect
// ------
// - 3 eigenvalues sorted descending, 3 decisions labeled 0..=2, sample
//   size 397, and a non-increasing trace family.
// - Rank 0 is rejected at the 95% level (two population cointegrating
//   relations make the leading eigenvalue large).
fn trivariate_common_trend_system_runs_end_to_end() {
    let x = gen_common_trend_triple(400, 99);
    let spec = JohansenSpec::with_defaults(2, TrendCase::UnrestrictedConstant);
    let outcome = JohansenOutcome::johansen(x.view(), &spec).expect("test should run");

    assert_eq!(outcome.system_dimension(), 3);
    assert_eq!(outcome.sample_size, 397);
    for (r, decision) in outcome.decisions.iter().enumerate() {
        assert_eq!(decision.rank, r);
    }
    assert!(outcome.eigenvalues[0] >= outcome.eigenvalues[1]);
    assert!(outcome.eigenvalues[1] >= outcome.eigenvalues[2]);
    assert!(outcome.statistics.trace[0] >= outcome.statistics.trace[1]);
    assert!(outcome.statistics.trace[1] >= outcome.statistics.trace[2]);
    assert!(outcome.decisions[0].trace_rejects[1], "rank 0 should be rejected at 95%");
}

#[test]
// Purpose
// -------
// Confirm the public entry point enforces the scope and input guards:
// unsupported deterministic-trend cases and malformed data fail with the
// documented error kinds, and the unsupported-case check fires first.
//
// Given
// -----
// - Cases 1 and 2 on valid data; a NaN-contaminated series and a too-short
//   series on the supported case 3.
//
// Expect
// ------
// - Cases 1 and 2 fail with kind `NotImplemented` even on valid data.
// - The NaN and short-series inputs fail with kind `InvalidInput`.
fn entry_point_rejects_unsupported_cases_and_bad_inputs() {
    let x = gen_cointegrated_pair(100, 1.0, 0.5, 3);

    for case in [TrendCase::NoDeterministicTerm, TrendCase::RestrictedConstant] {
        let spec = JohansenSpec::with_defaults(1, case);
        let err = JohansenOutcome::johansen(x.view(), &spec)
            .expect_err("restricted cases must not be implemented");
        assert_eq!(err.kind(), CointErrorKind::NotImplemented);
    }

    let spec = JohansenSpec::with_defaults(1, TrendCase::UnrestrictedConstant);
    let mut with_nan = x.clone();
    with_nan[[10, 0]] = f64::NAN;
    let err = JohansenOutcome::johansen(with_nan.view(), &spec)
        .expect_err("NaN input must be rejected");
    assert_eq!(err.kind(), CointErrorKind::InvalidInput);

    let short = Array2::<f64>::zeros((3, 2));
    let err =
        JohansenOutcome::johansen(short.view(), &spec).expect_err("short input must be rejected");
    assert_eq!(err.kind(), CointErrorKind::InvalidInput);
}

#[test]
// Purpose
// -------
// Ensure the full pipeline is a pure function of its inputs: repeated
// runs on the same series and spec produce identical outcomes, and a
// spec with an explicit tolerance equal to the default matches the
// default-constructed spec.
//
// Given
// -----
// - One seeded cointegrated pair of length 200, run three times under
//   equivalent specs.
//
// Expect
// ------
// - All outcomes compare equal, statistics included.
fn pipeline_is_deterministic_and_tolerance_default_is_stable() {
    let x = gen_cointegrated_pair(200, 1.5, 1.0, 11);
    let spec = JohansenSpec::with_defaults(1, TrendCase::RestrictedTrend);
    let explicit =
        JohansenSpec::new(1, TrendCase::RestrictedTrend, spec.eigen_tol).expect("valid tolerance");

    let first = JohansenOutcome::johansen(x.view(), &spec).expect("first run");
    let second = JohansenOutcome::johansen(x.view(), &spec).expect("second run");
    let third = JohansenOutcome::johansen(x.view(), &explicit).expect("explicit-tolerance run");

    assert_eq!(first, second);
    assert_eq!(first, third);
}
