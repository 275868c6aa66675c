//! johansen::critical_values — tabulated asymptotic critical values.
//!
//! Purpose
//! -------
//! Embed the asymptotic critical values of the trace and max-eigenvalue
//! statistics for every deterministic-trend case, and resolve the row that
//! matches a given hypothesis dimension. The distributions are functionals
//! of Brownian motion without closed forms, so significance is assessed
//! against these tables rather than p-values.
//!
//! Key behaviors
//! -------------
//! - One table per `(case, statistic)` pair, rows indexed by the hypothesis
//!   dimension `n − r` (number of common trends under the null), columns
//!   holding the 90%, 95%, and 99% quantiles.
//! - Dimensions beyond the tabulated range fail loudly with
//!   `OutOfTableRange` instead of extrapolating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Within each table the quantiles grow with the dimension and with the
//!   confidence level.
//! - The no-deterministic-term, unrestricted-constant, and
//!   unrestricted-trend tables run to dimension 12; the restricted-constant
//!   and restricted-trend tables (Osterwald-Lenum 1992, tables 1* and 2*)
//!   run to dimension 10.
//!
//! Conventions
//! -----------
//! - Quantiles are stored as `[f64; 3]` rows ordered 90/95/99.
//! - The resolver takes the dimension directly; callers translate a rank
//!   hypothesis `r` in a `k`-dimensional system to dimension `k − r`.
//!
//! Testing notes
//! -------------
//! - Unit tests pin known table entries, check monotonicity across
//!   dimensions and levels, and exercise the out-of-range branch for both
//!   table lengths.

use crate::johansen::cases::TrendCase;
use crate::johansen::errors::{CointError, CointResult};

/// Which statistic family a critical value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Trace statistic: null "rank ≤ r" against the unrestricted
    /// alternative.
    Trace,
    /// Max-eigenvalue statistic: null "rank = r" against "rank = r + 1".
    MaxEigen,
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statistic::Trace => write!(f, "trace"),
            Statistic::MaxEigen => write!(f, "max-eigenvalue"),
        }
    }
}

/// Confidence level of a tabulated quantile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignificanceLevel {
    /// 90% quantile (10% test size).
    Ninety,
    /// 95% quantile (5% test size).
    NinetyFive,
    /// 99% quantile (1% test size).
    NinetyNine,
}

impl SignificanceLevel {
    /// Column index of this level within a `[f64; 3]` table row.
    pub fn column(self) -> usize {
        match self {
            SignificanceLevel::Ninety => 0,
            SignificanceLevel::NinetyFive => 1,
            SignificanceLevel::NinetyNine => 2,
        }
    }
}

impl std::fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignificanceLevel::Ninety => write!(f, "90%"),
            SignificanceLevel::NinetyFive => write!(f, "95%"),
            SignificanceLevel::NinetyNine => write!(f, "99%"),
        }
    }
}

// Rows are indexed by hypothesis dimension (1-based), columns by the
// 90/95/99 quantiles.

/// No deterministic term, max-eigenvalue statistic, dimensions 1–12.
const MAX_EIGEN_NO_DETERMINISTIC: [[f64; 3]; 12] = [
    [2.9762, 4.1296, 6.9406],
    [9.4748, 11.2246, 15.0923],
    [15.7175, 17.7961, 22.2519],
    [21.8370, 23.9955, 28.8615],
    [27.9160, 30.0775, 35.7359],
    [33.9271, 36.0279, 41.0815],
    [39.9085, 42.1532, 47.5926],
    [45.8930, 48.2940, 53.8858],
    [51.8528, 54.3400, 60.0854],
    [57.7954, 60.2914, 66.2508],
    [63.7248, 66.2507, 72.3666],
    [69.6513, 72.1532, 78.3572],
];

/// No deterministic term, trace statistic, dimensions 1–12.
const TRACE_NO_DETERMINISTIC: [[f64; 3]; 12] = [
    [2.9762, 4.1296, 6.9406],
    [10.4741, 12.3212, 16.3640],
    [21.7781, 24.2761, 29.5147],
    [37.0339, 40.1749, 46.5716],
    [56.2839, 60.0627, 67.6367],
    [79.5329, 83.9383, 92.7136],
    [106.7351, 111.7797, 121.7375],
    [137.9954, 143.6691, 154.7977],
    [173.2292, 179.5199, 191.8122],
    [212.4721, 219.4051, 232.8291],
    [255.6732, 263.2603, 277.9962],
    [302.9054, 311.1288, 326.9716],
];

/// Restricted constant (Osterwald-Lenum table 1*), max-eigenvalue
/// statistic, dimensions 1–10.
const MAX_EIGEN_RESTRICTED_CONSTANT: [[f64; 3]; 10] = [
    [7.52, 9.24, 12.97],
    [13.75, 15.67, 20.20],
    [19.77, 22.00, 26.81],
    [25.56, 28.14, 33.24],
    [31.66, 34.40, 39.79],
    [37.45, 40.30, 46.82],
    [43.25, 46.45, 51.91],
    [48.91, 52.00, 57.95],
    [54.35, 57.42, 63.71],
    [60.25, 63.57, 69.94],
];

/// Restricted constant (Osterwald-Lenum table 1*), trace statistic,
/// dimensions 1–10.
const TRACE_RESTRICTED_CONSTANT: [[f64; 3]; 10] = [
    [7.52, 9.24, 12.97],
    [17.85, 19.96, 24.60],
    [32.00, 34.91, 41.07],
    [49.65, 53.12, 60.16],
    [71.86, 76.07, 84.45],
    [97.18, 102.14, 111.01],
    [126.58, 131.70, 143.09],
    [159.48, 165.58, 177.20],
    [196.37, 202.92, 215.74],
    [236.54, 244.15, 257.68],
];

/// Unrestricted constant, max-eigenvalue statistic, dimensions 1–12.
const MAX_EIGEN_UNRESTRICTED_CONSTANT: [[f64; 3]; 12] = [
    [2.7055, 3.8415, 6.6349],
    [12.2971, 14.2639, 18.5200],
    [18.8928, 21.1314, 25.8650],
    [25.1236, 27.5858, 32.7172],
    [31.2379, 33.8777, 39.3693],
    [37.2786, 40.0763, 45.8662],
    [43.2947, 46.2299, 52.3069],
    [49.2855, 52.3622, 58.6634],
    [55.2412, 58.4332, 64.9960],
    [61.2041, 64.5040, 71.2525],
    [67.1307, 70.5392, 77.4877],
    [73.0563, 76.5734, 83.7105],
];

/// Unrestricted constant, trace statistic, dimensions 1–12.
const TRACE_UNRESTRICTED_CONSTANT: [[f64; 3]; 12] = [
    [2.7055, 3.8415, 6.6349],
    [13.4294, 15.4943, 19.9349],
    [27.0669, 29.7961, 35.4628],
    [44.4929, 47.8545, 54.6815],
    [65.8202, 69.8189, 77.8202],
    [91.1090, 95.7542, 104.9637],
    [120.3673, 125.6185, 136.0600],
    [153.6341, 159.5290, 171.0905],
    [190.8714, 197.3772, 210.0366],
    [232.1030, 239.2468, 253.2526],
    [277.3740, 285.1402, 300.2821],
    [326.5354, 334.9795, 351.2150],
];

/// Restricted trend (Osterwald-Lenum table 2*), max-eigenvalue statistic,
/// dimensions 1–10.
const MAX_EIGEN_RESTRICTED_TREND: [[f64; 3]; 10] = [
    [10.49, 12.25, 16.26],
    [16.85, 18.96, 23.65],
    [23.11, 25.54, 30.34],
    [29.12, 31.46, 36.65],
    [34.75, 37.52, 42.36],
    [40.91, 43.97, 49.51],
    [46.32, 49.42, 54.71],
    [52.16, 55.50, 62.46],
    [57.87, 61.29, 67.88],
    [63.18, 66.23, 73.73],
];

/// Restricted trend (Osterwald-Lenum table 2*), trace statistic,
/// dimensions 1–10.
const TRACE_RESTRICTED_TREND: [[f64; 3]; 10] = [
    [10.49, 12.25, 16.26],
    [22.76, 25.32, 30.45],
    [39.06, 42.44, 48.45],
    [59.14, 62.99, 70.05],
    [83.20, 87.31, 96.58],
    [110.42, 114.90, 124.75],
    [141.01, 146.76, 158.49],
    [176.67, 182.82, 196.08],
    [215.17, 222.21, 234.41],
    [256.72, 263.42, 279.07],
];

/// Unrestricted trend, max-eigenvalue statistic, dimensions 1–12.
const MAX_EIGEN_UNRESTRICTED_TREND: [[f64; 3]; 12] = [
    [2.7055, 3.8415, 6.6349],
    [15.0006, 17.1481, 21.7465],
    [21.8731, 24.2522, 29.2631],
    [28.2398, 30.8151, 36.1930],
    [34.4202, 37.1646, 42.8612],
    [40.5244, 43.4183, 49.4095],
    [46.5583, 49.5875, 55.8171],
    [52.5858, 55.7302, 62.1741],
    [58.5316, 61.8051, 68.5030],
    [64.5292, 67.9040, 74.7434],
    [70.4630, 73.9355, 81.0678],
    [76.4081, 79.9878, 87.2395],
];

/// Unrestricted trend, trace statistic, dimensions 1–12.
const TRACE_UNRESTRICTED_TREND: [[f64; 3]; 12] = [
    [2.7055, 3.8415, 6.6349],
    [16.1619, 18.3985, 23.1485],
    [32.0645, 35.0116, 41.0815],
    [51.6492, 55.2459, 62.5202],
    [75.1027, 79.3422, 87.7748],
    [102.4674, 107.3429, 116.9829],
    [133.7852, 139.2780, 150.0778],
    [169.0618, 175.1584, 187.1891],
    [208.3582, 215.1268, 228.2226],
    [251.6293, 259.0267, 273.3838],
    [298.8836, 306.8988, 322.4264],
    [350.1125, 358.7190, 377.2092],
];

fn table(case: TrendCase, statistic: Statistic) -> &'static [[f64; 3]] {
    match (case, statistic) {
        (TrendCase::NoDeterministicTerm, Statistic::Trace) => &TRACE_NO_DETERMINISTIC,
        (TrendCase::NoDeterministicTerm, Statistic::MaxEigen) => &MAX_EIGEN_NO_DETERMINISTIC,
        (TrendCase::RestrictedConstant, Statistic::Trace) => &TRACE_RESTRICTED_CONSTANT,
        (TrendCase::RestrictedConstant, Statistic::MaxEigen) => &MAX_EIGEN_RESTRICTED_CONSTANT,
        (TrendCase::UnrestrictedConstant, Statistic::Trace) => &TRACE_UNRESTRICTED_CONSTANT,
        (TrendCase::UnrestrictedConstant, Statistic::MaxEigen) => &MAX_EIGEN_UNRESTRICTED_CONSTANT,
        (TrendCase::RestrictedTrend, Statistic::Trace) => &TRACE_RESTRICTED_TREND,
        (TrendCase::RestrictedTrend, Statistic::MaxEigen) => &MAX_EIGEN_RESTRICTED_TREND,
        (TrendCase::UnrestrictedTrend, Statistic::Trace) => &TRACE_UNRESTRICTED_TREND,
        (TrendCase::UnrestrictedTrend, Statistic::MaxEigen) => &MAX_EIGEN_UNRESTRICTED_TREND,
    }
}

/// Look up the 90/95/99 critical values for one hypothesis.
///
/// Parameters
/// ----------
/// - `case`: `TrendCase`
///   The deterministic-trend case the statistic was computed under.
/// - `statistic`: `Statistic`
///   Which statistic family to look up.
/// - `dimension`: `usize`
///   Hypothesis dimension `n − r` (number of common trends under the
///   null); must be between 1 and the table's tabulated maximum.
///
/// Returns
/// -------
/// `CointResult<[f64; 3]>`
///   The `[90%, 95%, 99%]` quantiles for that dimension.
///
/// Errors
/// ------
/// - `CointError::OutOfTableRange { dimension, max }` when `dimension` is
///   zero or exceeds the table length. No extrapolation is attempted.
///
/// Examples
/// --------
/// ```
/// use rust_cointegration::johansen::cases::TrendCase;
/// use rust_cointegration::johansen::critical_values::{critical_values, Statistic};
///
/// let row = critical_values(TrendCase::UnrestrictedConstant, Statistic::Trace, 2)?;
/// assert_eq!(row, [13.4294, 15.4943, 19.9349]);
/// # Ok::<(), rust_cointegration::johansen::errors::CointError>(())
/// ```
pub fn critical_values(
    case: TrendCase, statistic: Statistic, dimension: usize,
) -> CointResult<[f64; 3]> {
    let rows = table(case, statistic);
    if dimension == 0 || dimension > rows.len() {
        return Err(CointError::OutOfTableRange { dimension, max: rows.len() });
    }
    Ok(rows[dimension - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Pinned values for known table entries across cases and statistics.
    // - Monotonicity of the quantiles across dimensions and across levels.
    // - Out-of-range rejection for both the 12-row and 10-row tables.
    //
    // They intentionally DO NOT cover:
    // - The mapping from rank hypotheses to dimensions, which lives in
    //   `report`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin a handful of table entries so a silent table edit cannot pass.
    //
    // Given
    // -----
    // - Known quantiles for the unrestricted-constant, restricted-trend,
    //   and no-deterministic-term tables.
    //
    // Expect
    // ------
    // - The resolver returns exactly the tabulated rows.
    fn critical_values_known_entries_match_tables() {
        // Act / Assert
        assert_eq!(
            critical_values(TrendCase::UnrestrictedConstant, Statistic::Trace, 1).unwrap(),
            [2.7055, 3.8415, 6.6349]
        );
        assert_eq!(
            critical_values(TrendCase::UnrestrictedConstant, Statistic::MaxEigen, 2).unwrap(),
            [12.2971, 14.2639, 18.5200]
        );
        assert_eq!(
            critical_values(TrendCase::RestrictedTrend, Statistic::Trace, 3).unwrap(),
            [39.06, 42.44, 48.45]
        );
        assert_eq!(
            critical_values(TrendCase::NoDeterministicTerm, Statistic::MaxEigen, 12).unwrap(),
            [69.6513, 72.1532, 78.3572]
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify structural monotonicity: quantiles grow with the dimension
    // and with the confidence level in every table.
    //
    // Given
    // -----
    // - All ten (case, statistic) tables.
    //
    // Expect
    // ------
    // - Each column is strictly increasing in the dimension and each row is
    //   strictly increasing across the 90/95/99 columns.
    fn critical_values_tables_are_monotone() {
        // Arrange
        let cases = [
            TrendCase::NoDeterministicTerm,
            TrendCase::RestrictedConstant,
            TrendCase::UnrestrictedConstant,
            TrendCase::RestrictedTrend,
            TrendCase::UnrestrictedTrend,
        ];

        // Act / Assert
        for case in cases {
            for statistic in [Statistic::Trace, Statistic::MaxEigen] {
                let rows = table(case, statistic);
                for row in rows {
                    assert!(row[0] < row[1] && row[1] < row[2], "{case}/{statistic}: {row:?}");
                }
                for pair in rows.windows(2) {
                    for col in 0..3 {
                        assert!(
                            pair[0][col] < pair[1][col],
                            "{case}/{statistic}: rows should increase with dimension"
                        );
                    }
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure dimensions outside the tabulated range fail with the table's
    // actual maximum rather than extrapolating.
    //
    // Given
    // -----
    // - Dimension 13 against a 12-row table, dimension 11 against a 10-row
    //   table, and dimension 0.
    //
    // Expect
    // ------
    // - `OutOfTableRange` carrying the correct `max` in each case.
    fn critical_values_out_of_range_dimension_is_rejected() {
        // Act / Assert
        match critical_values(TrendCase::UnrestrictedTrend, Statistic::Trace, 13) {
            Err(CointError::OutOfTableRange { dimension, max }) => {
                assert_eq!((dimension, max), (13, 12));
            }
            other => panic!("expected OutOfTableRange, got {other:?}"),
        }
        match critical_values(TrendCase::RestrictedConstant, Statistic::MaxEigen, 11) {
            Err(CointError::OutOfTableRange { dimension, max }) => {
                assert_eq!((dimension, max), (11, 10));
            }
            other => panic!("expected OutOfTableRange, got {other:?}"),
        }
        assert!(critical_values(TrendCase::UnrestrictedConstant, Statistic::Trace, 0).is_err());
    }
}
