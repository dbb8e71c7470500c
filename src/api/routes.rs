//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    api::types::{CompareRequest, FeedQuery, RankRequest, RankingDto},
    data,
    error::AnalysisError,
    ranking,
    stats::{self, ComparisonResult},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Json<ComparisonResult> {
    Json(stats::run_analysis_with(
        req.a.success_count,
        req.a.trial_count,
        req.b.success_count,
        req.b.trial_count,
        &state.settings.analysis_options(),
    ))
}

pub async fn rank(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> ApiResult<RankingDto> {
    let result = ranking::rank_groups_with(&req.groups, &state.settings.analysis_options())
        .map_err(insufficient)?;
    Ok(Json(result.into()))
}

pub async fn feed_ranking(
    Path(name): Path<String>,
    Query(query): Query<FeedQuery>,
    State(state): State<AppState>,
) -> ApiResult<RankingDto> {
    if name.is_empty() || name.contains(&['/', '\\'][..]) || name.contains("..") {
        return Err((StatusCode::BAD_REQUEST, format!("invalid feed name: {name}")));
    }
    let path = ["csv", "json"]
        .iter()
        .map(|ext| state.settings.join_data(format!("{name}.{ext}")))
        .find(|p| p.exists())
        .ok_or_else(|| {
            warn!(%name, "feed not found");
            (StatusCode::NOT_FOUND, format!("feed not found: {name}"))
        })?;
    let groups = data::load_groups(&path, query.metric)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")))?;
    let result = ranking::rank_groups_with(&groups, &state.settings.analysis_options())
        .map_err(insufficient)?;
    Ok(Json(result.into()))
}

fn insufficient(err: AnalysisError) -> (StatusCode, String) {
    (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
}
