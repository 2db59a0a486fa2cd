//! Problem score handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult, middleware::auth::CurrentClimber, services::ScoreService, state::AppState,
};

use super::{
    request::{BatchScoreRequest, ScoreUpsertRequest},
    response::{BatchScoreResultResponse, ProblemScoreResponse},
};

/// Upsert one score for (competition, level, problem ordinal).
///
/// 201 when the row was newly created, 200 when overwritten in place; the
/// response body is the same shape either way.
pub async fn upsert_score(
    State(state): State<AppState>,
    CurrentClimber(climber): CurrentClimber,
    Path((comp_id, level_no, problem_no)): Path<(i64, i32, i32)>,
    Json(payload): Json<ScoreUpsertRequest>,
) -> AppResult<(StatusCode, Json<ProblemScoreResponse>)> {
    let card = payload.into_card();

    let (score, created) = ScoreService::upsert_one(
        state.db(),
        state.rules(),
        comp_id,
        level_no,
        problem_no,
        climber.id,
        &card,
    )
    .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(ProblemScoreResponse::new(problem_no, &score))))
}

/// Upsert a batch of scores for one (competition, level), atomically
pub async fn upsert_scores_batch(
    State(state): State<AppState>,
    CurrentClimber(climber): CurrentClimber,
    Path((comp_id, level)): Path<(i64, i32)>,
    Json(payload): Json<BatchScoreRequest>,
) -> AppResult<Json<Vec<BatchScoreResultResponse>>> {
    let items: Vec<_> = payload
        .items
        .into_iter()
        .map(|item| item.into_item())
        .collect();

    let outcomes = ScoreService::upsert_batch(
        state.db(),
        state.rules(),
        comp_id,
        level,
        climber.id,
        &items,
    )
    .await?;

    Ok(Json(outcomes.into_iter().map(Into::into).collect()))
}
