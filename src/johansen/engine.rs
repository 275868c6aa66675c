//! johansen::engine — the eigen-statistics engine.
//!
//! Purpose
//! -------
//! Transform a raw multivariate series into ranked eigenvalues and
//! cointegrating vectors. The engine builds the lagged-difference regression
//! system dictated by the deterministic-trend case, concentrates out the
//! short-run dynamics via two auxiliary OLS regressions, forms the residual
//! product-moment matrices `S00`, `S01`, `S11`, and solves the generalized
//! eigenvalue problem `det(λ·S11 − S10·S00⁻¹·S01) = 0`.
//!
//! Key behaviors
//! -------------
//! - Arrange `p` lagged-difference regressors plus the case's deterministic
//!   terms (intercept, linear trend) into one regressor block `Z`, aligned
//!   so the effective sample is `T = T_raw − p − 1`.
//! - Regress both `ΔY_t` and `Y_{t−1}` on `Z` and retain residuals `R0`,
//!   `R1`; no deterministic term ever enters the level block directly.
//! - Solve the generalized eigenproblem by Cholesky whitening of `S11`:
//!   the symmetrized `L⁻¹·S10·S00⁻¹·S01·L⁻ᵀ` is decomposed with a symmetric
//!   eigen-solver and eigenvectors are back-transformed as `v = L⁻ᵀ·w`,
//!   which yields the normalization `vᵀ·S11·v = 1` directly and keeps all
//!   eigenvalues real.
//! - Sort eigenvalues descending and reject any outside
//!   `[-tol, 1 − tol]` as a numerical degeneracy instead of clamping.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs have already passed `validation::validate_input` and the case
//!   has passed `TrendCase::ensure_supported`; the engine may assume a
//!   finite matrix with at least `k + p + 1` rows and a supported case.
//! - The engine is a pure function of its inputs: no hidden randomness, no
//!   shared mutable state, bit-identical results on identical inputs.
//! - Singular `ZᵀZ`, `S00`, or `S11` factorizations surface as
//!   `SingularMatrix` errors naming the matrix; they are never regularized.
//!
//! Conventions
//! -----------
//! - Data enters and leaves as `ndarray` types; the eigen-based internals
//!   run on `nalgebra::DMatrix`, with explicit conversion at the boundary
//!   (the same bridge the crate uses elsewhere for symmetric eigen work).
//! - Lagged differences are ordered newest lag first within each time row.
//! - The trend regressor takes values `0, 1, 2, …` over the effective
//!   sample.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the regression-system layout (shapes, intercept and
//!   trend columns, lag alignment), residual orthogonality to `Z`, moment
//!   matrix symmetry, eigenvalue ordering/range and eigenvector
//!   normalization on a seeded cointegrated system, and degeneracy
//!   surfacing for perfectly collinear inputs.

use crate::johansen::cases::JohansenSpec;
use crate::johansen::errors::{CointError, CointResult};
use nalgebra::{Cholesky, DMatrix, SymmetricEigen};
use ndarray::{Array1, Array2, ArrayView2};

/// EigenOutcome — ordered eigenvalues and cointegrating vectors.
///
/// Purpose
/// -------
/// Carry the output of the eigen-statistics engine: the `k` squared
/// canonical correlations between the residual blocks, the matching
/// cointegrating vectors, and the effective sample size used downstream to
/// scale the test statistics.
///
/// Fields
/// ------
/// - `eigenvalues`: `Array1<f64>`
///   The `k` eigenvalues sorted descending; each lies in `[0, 1)` up to the
///   spec's tolerance.
/// - `vectors`: `Array2<f64>`
///   `k × k` matrix whose column `i` is the cointegrating vector paired
///   with `eigenvalues[i]`, normalized so `vᵀ·S11·v = 1`.
/// - `sample_size`: `usize`
///   Effective sample size `T = T_raw − lag_order − 1`.
///
/// Invariants
/// ----------
/// - `eigenvalues.len() == vectors.nrows() == vectors.ncols()`.
/// - Eigenvalues are non-increasing.
/// - Eigenvector sign is not pinned; only magnitudes and the `S11`
///   normalization are guaranteed.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenOutcome {
    /// Squared canonical correlations, sorted descending.
    pub eigenvalues: Array1<f64>,
    /// Cointegrating vectors as columns, aligned with `eigenvalues`.
    pub vectors: Array2<f64>,
    /// Effective sample size after differencing and lagging.
    pub sample_size: usize,
}

/// The aligned regression blocks for one test invocation.
///
/// `dy` holds `ΔY_t`, `y_lag` holds `Y_{t−1}`, and `z` holds the lagged
/// differences plus deterministic terms, all over the same `T` rows.
#[derive(Debug, Clone)]
struct RegressionSystem {
    dy: DMatrix<f64>,
    y_lag: DMatrix<f64>,
    z: DMatrix<f64>,
}

/// Residual product-moment matrices, computed once and consumed by the
/// eigen step; never mutated afterward.
#[derive(Debug, Clone)]
struct MomentMatrices {
    s00: DMatrix<f64>,
    s01: DMatrix<f64>,
    s11: DMatrix<f64>,
}

/// Run the eigen-statistics engine on a validated observation matrix.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Observation matrix of shape `T_raw × k`; must already satisfy the
///   guards in `validation::validate_input`.
/// - `spec`: `&JohansenSpec`
///   Lag order, deterministic-trend case (must be supported), and
///   eigenvalue tolerance.
///
/// Returns
/// -------
/// `CointResult<EigenOutcome>`
///   Ordered eigenvalues, normalized cointegrating vectors, and the
///   effective sample size.
///
/// Errors
/// ------
/// - `CointError::SingularMatrix` when `ZᵀZ`, `S00`, or `S11` fails its
///   Cholesky factorization (collinear series, degenerate regressors).
/// - `CointError::EigenvalueOutOfRange` when a computed eigenvalue is
///   non-finite or lies outside `[-tol, 1 − tol]`. Values are reported
///   as computed, never clamped into range.
///
/// Panics
/// ------
/// - Never panics on inputs that passed validation; shape mismatches would
///   indicate a programming error upstream.
///
/// Notes
/// -----
/// - The Cholesky-whitened formulation keeps the reduced problem symmetric,
///   so complex eigenvalues cannot occur; degeneracies that would produce
///   them in a general solver surface here as singular factorizations or
///   out-of-range eigenvalues instead.
pub fn solve_eigen(x: ArrayView2<'_, f64>, spec: &JohansenSpec) -> CointResult<EigenOutcome> {
    let data = to_dmatrix(x);
    let system = build_system(&data, spec);
    let sample_size = system.dy.nrows();

    let r0 = residualize(&system.dy, &system.z)?;
    let r1 = residualize(&system.y_lag, &system.z)?;
    let moments = compute_moments(&r0, &r1);

    let (eigenvalues, vectors) = generalized_eigen(&moments, spec.eigen_tol)?;

    Ok(EigenOutcome {
        eigenvalues: Array1::from_vec(eigenvalues),
        vectors: from_dmatrix(&vectors),
        sample_size,
    })
}

/// Build the aligned regression blocks `ΔY_t`, `Y_{t−1}`, and `Z`.
///
/// The effective sample covers `t = p + 1, …, T_raw − 1` (0-based), giving
/// `T = T_raw − p − 1` rows. `Z` stacks, per row, the `p` lagged
/// differences (newest first), then an intercept column for every case
/// richer than the no-deterministic-term case, then a linear trend
/// `0, 1, …` for the trend cases.
fn build_system(data: &DMatrix<f64>, spec: &JohansenSpec) -> RegressionSystem {
    let (t_raw, k) = data.shape();
    let p = spec.lag_order;
    let t_eff = t_raw - p - 1;

    // First differences: diff[t] = x[t + 1] - x[t].
    let diff = DMatrix::from_fn(t_raw - 1, k, |i, j| data[(i + 1, j)] - data[(i, j)]);

    let dy = DMatrix::from_fn(t_eff, k, |i, j| diff[(p + i, j)]);
    let y_lag = DMatrix::from_fn(t_eff, k, |i, j| data[(p + i, j)]);

    let n_det = spec.case.includes_intercept() as usize + spec.case.includes_trend() as usize;
    let mut z = DMatrix::zeros(t_eff, p * k + n_det);

    for lag in 1..=p {
        for i in 0..t_eff {
            for j in 0..k {
                z[(i, (lag - 1) * k + j)] = diff[(p + i - lag, j)];
            }
        }
    }

    let mut col = p * k;
    if spec.case.includes_intercept() {
        for i in 0..t_eff {
            z[(i, col)] = 1.0;
        }
        col += 1;
    }
    if spec.case.includes_trend() {
        for i in 0..t_eff {
            z[(i, col)] = i as f64;
        }
    }

    RegressionSystem { dy, y_lag, z }
}

/// OLS residuals of `Y ~ Z` via normal equations with Cholesky.
///
/// Returns `Y − Z·(ZᵀZ)⁻¹·ZᵀY`, or `SingularMatrix { "Z'Z" }` when the
/// regressor cross-product is not positive definite.
fn residualize(y: &DMatrix<f64>, z: &DMatrix<f64>) -> CointResult<DMatrix<f64>> {
    if z.ncols() == 0 {
        return Ok(y.clone());
    }
    let ztz = z.transpose() * z;
    let chol = Cholesky::new(ztz).ok_or(CointError::SingularMatrix { matrix: "Z'Z" })?;
    let beta = chol.solve(&(z.transpose() * y));
    Ok(y - z * beta)
}

/// Form the residual product-moment matrices scaled by the sample size.
fn compute_moments(r0: &DMatrix<f64>, r1: &DMatrix<f64>) -> MomentMatrices {
    let t = r0.nrows() as f64;
    MomentMatrices {
        s00: (r0.transpose() * r0) / t,
        s01: (r0.transpose() * r1) / t,
        s11: (r1.transpose() * r1) / t,
    }
}

/// Solve `det(λ·S11 − S10·S00⁻¹·S01) = 0` by Cholesky whitening.
///
/// With `S11 = L·Lᵀ`, the problem reduces to the symmetric matrix
/// `L⁻¹·S10·S00⁻¹·S01·L⁻ᵀ`, whose eigenvalues are the squared canonical
/// correlations and whose eigenvectors back-transform as `v = L⁻ᵀ·w`.
/// Because the reduced matrix is symmetrized explicitly, the eigenvalues
/// are real by construction; out-of-range values are rejected, not clamped.
fn generalized_eigen(
    moments: &MomentMatrices, eigen_tol: f64,
) -> CointResult<(Vec<f64>, DMatrix<f64>)> {
    let k = moments.s00.nrows();

    let s00_inv = Cholesky::new(moments.s00.clone())
        .ok_or(CointError::SingularMatrix { matrix: "S00" })?
        .inverse();
    let product = moments.s01.transpose() * &s00_inv * &moments.s01;

    let s11_chol =
        Cholesky::new(moments.s11.clone()).ok_or(CointError::SingularMatrix { matrix: "S11" })?;
    let l_inv = s11_chol
        .l()
        .try_inverse()
        .ok_or(CointError::SingularMatrix { matrix: "S11" })?;

    let whitened = &l_inv * product * l_inv.transpose();
    let symmetrized = (&whitened + &whitened.transpose()) * 0.5;

    let eigen = SymmetricEigen::new(symmetrized);
    let raw_vectors = l_inv.transpose() * &eigen.eigenvectors;

    // Order descending by eigenvalue; ties keep the solver's order.
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b].partial_cmp(&eigen.eigenvalues[a]).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut eigenvalues = Vec::with_capacity(k);
    let mut vectors = DMatrix::zeros(k, k);
    for (rank, &src) in order.iter().enumerate() {
        let lambda = eigen.eigenvalues[src];
        if !lambda.is_finite() || lambda < -eigen_tol || lambda > 1.0 - eigen_tol {
            return Err(CointError::EigenvalueOutOfRange { index: rank, value: lambda });
        }
        eigenvalues.push(lambda);
        vectors.set_column(rank, &raw_vectors.column(src));
    }

    Ok((eigenvalues, vectors))
}

// ---- ndarray ↔ nalgebra bridge -------------------------------------------

fn to_dmatrix(x: ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (rows, cols) = x.dim();
    DMatrix::from_fn(rows, cols, |i, j| x[[i, j]])
}

fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}
