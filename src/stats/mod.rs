//! Significance engine for two binomial samples.
//!
//! Every function here is pure. Degenerate inputs (zero trials, zero variance)
//! produce a neutral "no difference" result rather than an error.

pub mod lift;
pub mod normal;
pub mod proportion;
pub mod round;

use serde::Serialize;

pub use lift::{determine_winner, relative_lift, Winner};
pub use normal::normal_cdf;
pub use proportion::{confidence_interval, two_proportion_z_test, ConfidenceInterval, ZTest};
pub use round::round_to;

/// Fixed two-tailed significance level.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
/// Critical value for a 95% interval.
pub const Z_95: f64 = 1.96;
/// Per-group trial count below which a comparison is flagged as under-powered.
pub const DEFAULT_MIN_SAMPLE: u64 = 100;

/// Tunables for a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub min_sample: u64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_sample: DEFAULT_MIN_SAMPLE,
        }
    }
}

/// Full statistical comparison of sample A against sample B.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Rate of A as a percentage, 2 decimals.
    pub rate_a: f64,
    /// Rate of B as a percentage, 2 decimals.
    pub rate_b: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
    /// Interval on the proportion difference, not percentages.
    pub confidence_interval: ConfidenceInterval,
    /// Lift of A over B, in percent.
    pub relative_lift: f64,
    pub winner: Winner,
    pub sample_adequate: bool,
}

/// Success rate as a percentage, `0` for an empty sample.
pub fn rate_percent(success: u64, trials: u64) -> f64 {
    if trials == 0 {
        0.0
    } else {
        success as f64 / trials as f64 * 100.0
    }
}

/// True when both samples reach `min_sample` trials.
pub fn is_sample_adequate(n_a: u64, n_b: u64, min_sample: u64) -> bool {
    n_a >= min_sample && n_b >= min_sample
}

/// Compare two samples using the default options.
pub fn run_analysis(success_a: u64, n_a: u64, success_b: u64, n_b: u64) -> ComparisonResult {
    run_analysis_with(success_a, n_a, success_b, n_b, &AnalysisOptions::default())
}

/// Compare two samples.
///
/// Lift and the winner's direction come from unrounded rates; the significance
/// gate uses the reported p-value so `is_significant` and `winner` always agree.
pub fn run_analysis_with(
    success_a: u64,
    n_a: u64,
    success_b: u64,
    n_b: u64,
    options: &AnalysisOptions,
) -> ComparisonResult {
    let raw_rate_a = rate_percent(success_a, n_a);
    let raw_rate_b = rate_percent(success_b, n_b);
    let rate_a = round_to(raw_rate_a, 2);
    let rate_b = round_to(raw_rate_b, 2);

    let test = two_proportion_z_test(success_a, n_a, success_b, n_b);
    let interval = confidence_interval(success_a, n_a, success_b, n_b);

    ComparisonResult {
        rate_a,
        rate_b,
        z_score: test.z_score,
        p_value: test.p_value,
        is_significant: test.is_significant,
        confidence_interval: interval,
        relative_lift: relative_lift(raw_rate_a, raw_rate_b),
        winner: determine_winner(raw_rate_a, raw_rate_b, test.p_value),
        sample_adequate: is_sample_adequate(n_a, n_b, options.min_sample),
    }
}
