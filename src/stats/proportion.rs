//! Two-sample binomial comparisons: pooled z-test and Wald interval.

use serde::Serialize;

use super::{normal::normal_cdf, round::round_to, SIGNIFICANCE_LEVEL, Z_95};

/// Outcome of a two-proportion z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZTest {
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
}

impl ZTest {
    /// Result used whenever no comparison is possible.
    pub const NEUTRAL: ZTest = ZTest {
        z_score: 0.0,
        p_value: 1.0,
        is_significant: false,
    };
}

/// Confidence interval on the difference of two proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    pub const ZERO: ConfidenceInterval = ConfidenceInterval {
        low: 0.0,
        high: 0.0,
    };
}

/// Pooled two-proportion z-test with a two-tailed p-value.
///
/// Zero trials on either side, or a zero (or non-finite) pooled standard error,
/// yield [`ZTest::NEUTRAL`].
pub fn two_proportion_z_test(success_a: u64, n_a: u64, success_b: u64, n_b: u64) -> ZTest {
    if n_a == 0 || n_b == 0 {
        return ZTest::NEUTRAL;
    }
    let (sa, na, sb, nb) = (success_a as f64, n_a as f64, success_b as f64, n_b as f64);
    let p_a = sa / na;
    let p_b = sb / nb;
    let pooled = (sa + sb) / (na + nb);
    let se = (pooled * (1.0 - pooled) * (1.0 / na + 1.0 / nb)).sqrt();
    if !se.is_finite() || se <= 0.0 {
        return ZTest::NEUTRAL;
    }

    let z = (p_a - p_b) / se;
    let p = 2.0 * (1.0 - normal_cdf(z.abs()));
    let p_value = round_to(p, 6);
    ZTest {
        z_score: round_to(z, 4),
        p_value,
        is_significant: p_value < SIGNIFICANCE_LEVEL,
    }
}

/// 95% Wald interval for `p_a - p_b` in proportion units.
pub fn confidence_interval(
    success_a: u64,
    n_a: u64,
    success_b: u64,
    n_b: u64,
) -> ConfidenceInterval {
    if n_a == 0 || n_b == 0 {
        return ConfidenceInterval::ZERO;
    }
    let (na, nb) = (n_a as f64, n_b as f64);
    let p_a = success_a as f64 / na;
    let p_b = success_b as f64 / nb;
    let diff = p_a - p_b;
    let se = (p_a * (1.0 - p_a) / na + p_b * (1.0 - p_b) / nb).sqrt();
    if !se.is_finite() {
        return ConfidenceInterval::ZERO;
    }
    ConfidenceInterval {
        low: round_to(diff - Z_95 * se, 6),
        high: round_to(diff + Z_95 * se, 6),
    }
}
