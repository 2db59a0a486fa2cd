//! Competition handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::{AdminClimber, CurrentClimber},
    services::{CompetitionService, RegistrationService},
    state::AppState,
};

use super::{
    request::{
        CreateCompetitionRequest, ListCompetitionsQuery, RegisterRequest,
        UpdateCompetitionRequest,
    },
    response::{CompetitionResponse, RegistrationResponse},
};

/// Create a new competition; its problem grid is seeded before the
/// transaction commits
pub async fn create_competition(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    payload.validate()?;

    let competition = CompetitionService::create(
        state.db(),
        state.rules(),
        &payload.name,
        payload.description.as_deref(),
        payload.comp_type,
        payload.comp_date,
        payload.season_id,
        payload.round_no,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(competition.into())))
}

/// Get a competition by ID
pub async fn get_competition(
    State(state): State<AppState>,
    Path(comp_id): Path<i64>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::get(state.db(), comp_id).await?;
    Ok(Json(competition.into()))
}

/// List competitions with optional filters
pub async fn list_competitions(
    State(state): State<AppState>,
    Query(query): Query<ListCompetitionsQuery>,
) -> AppResult<Json<Vec<CompetitionResponse>>> {
    let competitions =
        CompetitionService::list(state.db(), query.season_id, query.comp_type).await?;
    Ok(Json(competitions.into_iter().map(Into::into).collect()))
}

/// Update a competition
pub async fn update_competition(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Path(comp_id): Path<i64>,
    Json(payload): Json<UpdateCompetitionRequest>,
) -> AppResult<Json<CompetitionResponse>> {
    payload.validate()?;

    let competition = CompetitionService::update(
        state.db(),
        comp_id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.comp_type,
        payload.comp_date,
        payload.season_id,
        payload.round_no,
    )
    .await?;

    Ok(Json(competition.into()))
}

/// Delete a competition (problems, registrations and scores cascade)
pub async fn delete_competition(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Path(comp_id): Path<i64>,
) -> AppResult<StatusCode> {
    CompetitionService::delete(state.db(), comp_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register the acting climber for a competition at a chosen level
pub async fn register_self(
    State(state): State<AppState>,
    CurrentClimber(climber): CurrentClimber,
    Path(comp_id): Path<i64>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    let registration = RegistrationService::register_self(
        state.db(),
        state.rules(),
        comp_id,
        climber.id,
        payload.level,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}
