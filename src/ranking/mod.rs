//! Ranking of N test groups against the best performer.

pub mod confidence;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use confidence::ConfidenceLevel;

use crate::{
    error::AnalysisError,
    stats::{self, AnalysisOptions, ComparisonResult},
};

/// A labelled sample, e.g. one split-test group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    pub label: String,
    pub success_count: u64,
    pub trial_count: u64,
}

impl GroupEntry {
    pub fn new(label: impl Into<String>, success_count: u64, trial_count: u64) -> Self {
        Self {
            label: label.into(),
            success_count,
            trial_count,
        }
    }
}

/// A group with its observed rate (percentage, 2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGroup {
    pub label: String,
    pub success_count: u64,
    pub trial_count: u64,
    pub rate: f64,
}

/// Best group versus one other group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBundle {
    pub group_a: String,
    pub group_b: String,
    #[serde(flatten)]
    pub result: ComparisonResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    /// Groups by rate, highest first.
    pub ranked: Vec<RankedGroup>,
    pub comparisons: Vec<ComparisonBundle>,
    pub best: RankedGroup,
    pub any_significant: bool,
    /// Comparison with the lowest p-value.
    pub best_comparison: Option<ComparisonBundle>,
    /// True only when every group meets the minimum sample.
    pub sample_adequate: bool,
}

impl RankingResult {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.best_comparison
            .as_ref()
            .map(|c| ConfidenceLevel::from_p_value(c.result.p_value))
            .unwrap_or(ConfidenceLevel::NotSignificant)
    }
}

pub fn rank_groups(groups: &[GroupEntry]) -> Result<RankingResult, AnalysisError> {
    rank_groups_with(groups, &AnalysisOptions::default())
}

/// Rank groups by rate and compare the leader against each of the others.
///
/// Groups with equal rates keep their input order.
pub fn rank_groups_with(
    groups: &[GroupEntry],
    options: &AnalysisOptions,
) -> Result<RankingResult, AnalysisError> {
    if groups.len() < 2 {
        return Err(AnalysisError::InsufficientGroups {
            found: groups.len(),
        });
    }

    let mut ranked: Vec<RankedGroup> = groups
        .iter()
        .map(|g| RankedGroup {
            label: g.label.clone(),
            success_count: g.success_count,
            trial_count: g.trial_count,
            rate: stats::round_to(stats::rate_percent(g.success_count, g.trial_count), 2),
        })
        .collect();
    ranked.sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(Ordering::Equal));

    let best = ranked[0].clone();
    let comparisons: Vec<ComparisonBundle> = ranked[1..]
        .iter()
        .map(|other| ComparisonBundle {
            group_a: best.label.clone(),
            group_b: other.label.clone(),
            result: stats::run_analysis_with(
                best.success_count,
                best.trial_count,
                other.success_count,
                other.trial_count,
                options,
            ),
        })
        .collect();

    let any_significant = comparisons.iter().any(|c| c.result.is_significant);
    let best_comparison = comparisons
        .iter()
        .min_by(|a, b| {
            a.result
                .p_value
                .partial_cmp(&b.result.p_value)
                .unwrap_or(Ordering::Equal)
        })
        .cloned();
    let sample_adequate = ranked.iter().all(|g| g.trial_count >= options.min_sample);

    debug!(
        best = %best.label,
        groups = ranked.len(),
        any_significant,
        sample_adequate,
        "ranked groups"
    );

    Ok(RankingResult {
        ranked,
        comparisons,
        best,
        any_significant,
        best_comparison,
        sample_adequate,
    })
}
