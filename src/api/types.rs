//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::{
    cli::Metric,
    ranking::{ConfidenceLevel, GroupEntry, RankingResult},
};

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDto {
    pub success_count: u64,
    pub trial_count: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompareRequest {
    pub a: SampleDto,
    pub b: SampleDto,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankRequest {
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingDto {
    #[serde(flatten)]
    pub result: RankingResult,
    pub confidence_level: ConfidenceLevel,
}

impl From<RankingResult> for RankingDto {
    fn from(result: RankingResult) -> Self {
        let confidence_level = result.confidence_level();
        Self {
            result,
            confidence_level,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub metric: Metric,
}
