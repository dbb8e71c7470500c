use ab_scope::stats::{
    self, confidence_interval, determine_winner, is_sample_adequate, normal_cdf, relative_lift,
    round_to, two_proportion_z_test, ConfidenceInterval, Winner, ZTest,
};

fn close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() < tol
}

#[test]
fn normal_cdf_matches_reference_points() {
    assert!(close(normal_cdf(0.0), 0.5, 1e-7));
    assert!(close(normal_cdf(1.96), 0.975, 1e-4));
    assert!(close(normal_cdf(-1.96), 0.025, 1e-4));
    assert!(close(normal_cdf(1.5) + normal_cdf(-1.5), 1.0, 1e-12));
    assert!(normal_cdf(8.0) <= 1.0);
    assert!(normal_cdf(-8.0) >= 0.0);
}

#[test]
fn z_test_detects_large_effect() {
    let test = two_proportion_z_test(100, 1000, 50, 1000);
    assert!(close(test.z_score, 4.2448, 1.5e-4));
    assert!(close(test.p_value, 0.000022, 1.5e-6));
    assert!(test.is_significant);
}

#[test]
fn z_test_handles_zero_trials() {
    assert_eq!(two_proportion_z_test(5, 0, 10, 100), ZTest::NEUTRAL);
    assert_eq!(two_proportion_z_test(10, 100, 0, 0), ZTest::NEUTRAL);
    assert_eq!(two_proportion_z_test(0, 0, 0, 0), ZTest::NEUTRAL);
}

#[test]
fn z_test_handles_zero_pooled_variance() {
    assert_eq!(two_proportion_z_test(0, 500, 0, 800), ZTest::NEUTRAL);
    assert_eq!(two_proportion_z_test(500, 500, 800, 800), ZTest::NEUTRAL);
}

#[test]
fn z_test_never_emits_nan_for_impossible_counts() {
    let test = two_proportion_z_test(900, 100, 950, 100);
    assert!(test.z_score.is_finite());
    assert!(test.p_value.is_finite());
}

#[test]
fn confidence_interval_brackets_difference() {
    let ci = confidence_interval(100, 1000, 50, 1000);
    assert!(close(ci.low, 0.027017, 1.5e-6));
    assert!(close(ci.high, 0.072983, 1.5e-6));
    assert!(ci.low < 0.05 && 0.05 < ci.high);
}

#[test]
fn confidence_interval_zero_for_empty_sample() {
    assert_eq!(confidence_interval(3, 10, 0, 0), ConfidenceInterval::ZERO);
    assert_eq!(confidence_interval(0, 0, 3, 10), ConfidenceInterval::ZERO);
}

#[test]
fn confidence_interval_symmetric_for_identical_samples() {
    let ci = confidence_interval(40, 400, 40, 400);
    assert!(close(ci.low, -ci.high, 1e-12));
    assert!(ci.low < 0.0);
}

#[test]
fn relative_lift_guards_zero_baseline() {
    assert_eq!(relative_lift(12.5, 0.0), 0.0);
    assert_eq!(relative_lift(0.0, 0.0), 0.0);
    assert_eq!(relative_lift(10.0, 5.0), 100.0);
    assert_eq!(relative_lift(5.0, 10.0), -50.0);
    assert_eq!(relative_lift(6.0, 5.5), 9.09);
}

#[test]
fn winner_requires_significance() {
    assert_eq!(determine_winner(30.0, 1.0, 0.05), Winner::None);
    assert_eq!(determine_winner(30.0, 1.0, 0.9), Winner::None);
    assert_eq!(determine_winner(30.0, 1.0, 0.049999), Winner::A);
    assert_eq!(determine_winner(1.0, 30.0, 0.01), Winner::B);
}

#[test]
fn winner_on_equal_rates_goes_to_b() {
    // Equal rates are not a strict win for A; this mirrors the dashboard's behaviour.
    assert_eq!(determine_winner(5.0, 5.0, 0.001), Winner::B);
}

#[test]
fn sample_adequacy_threshold() {
    assert!(!is_sample_adequate(99, 1000, stats::DEFAULT_MIN_SAMPLE));
    assert!(is_sample_adequate(100, 100, stats::DEFAULT_MIN_SAMPLE));
    assert!(is_sample_adequate(50, 60, 50));
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -3.0);
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert!(round_to(-0.00001, 2).is_sign_positive());
}

#[test]
fn run_analysis_end_to_end() {
    let result = stats::run_analysis(100, 1000, 50, 1000);
    assert_eq!(result.rate_a, 10.0);
    assert_eq!(result.rate_b, 5.0);
    assert!(result.z_score > 0.0);
    assert!(result.p_value < 0.001);
    assert!(result.is_significant);
    assert_eq!(result.winner, Winner::A);
    assert_eq!(result.relative_lift, 100.0);
    assert!(result.sample_adequate);
}

#[test]
fn run_analysis_near_identical_rates() {
    let result = stats::run_analysis(502, 10000, 498, 10000);
    assert_eq!(result.rate_a, 5.02);
    assert_eq!(result.rate_b, 4.98);
    assert!(!result.is_significant);
    assert!(result.p_value > 0.8);
    assert_eq!(result.winner, Winner::None);
}

#[test]
fn run_analysis_zero_trials_is_neutral() {
    let result = stats::run_analysis(0, 0, 25, 200);
    assert_eq!(result.rate_a, 0.0);
    assert_eq!(result.rate_b, 12.5);
    assert_eq!(result.z_score, 0.0);
    assert_eq!(result.p_value, 1.0);
    assert_eq!(result.winner, Winner::None);
    assert_eq!(result.confidence_interval, ConfidenceInterval::ZERO);
    assert!(!result.sample_adequate);
}

#[test]
fn run_analysis_is_idempotent() {
    let first = stats::run_analysis(321, 4000, 287, 3900);
    let second = stats::run_analysis(321, 4000, 287, 3900);
    assert_eq!(first, second);
}

#[test]
fn run_analysis_respects_custom_min_sample() {
    let options = stats::AnalysisOptions { min_sample: 2000 };
    let result = stats::run_analysis_with(100, 1000, 50, 1000, &options);
    assert!(!result.sample_adequate);
}

#[test]
fn comparison_serialises_with_camel_case_fields() {
    let value = serde_json::to_value(stats::run_analysis(100, 1000, 50, 1000)).unwrap();
    assert_eq!(value["rateA"], 10.0);
    assert_eq!(value["winner"], "A");
    assert_eq!(value["isSignificant"], true);
    assert!(value["confidenceInterval"]["low"].is_number());
    assert!(value.get("sampleAdequate").is_some());
}

#[test]
fn winner_follows_unrounded_rates_when_reported_rates_tie() {
    // 5.0049% vs 5.0000%: both report as 5.00 but A is strictly higher.
    let result = stats::run_analysis(50_049_000, 1_000_000_000, 50_000_000, 1_000_000_000);
    assert_eq!(result.rate_a, 5.0);
    assert_eq!(result.rate_b, 5.0);
    assert!(result.z_score > 0.0);
    assert!(result.relative_lift > 0.0);
    assert!(result.is_significant);
    assert_eq!(result.winner, Winner::A);
}
