//! Season handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AdminClimber, services::SeasonService, state::AppState,
};

use super::{
    request::{CreateSeasonRequest, ListSeasonsQuery, UpdateSeasonRequest},
    response::SeasonResponse,
};

/// Create a new season
pub async fn create_season(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Json(payload): Json<CreateSeasonRequest>,
) -> AppResult<(StatusCode, Json<SeasonResponse>)> {
    payload.validate()?;

    let season = SeasonService::create(state.db(), &payload.name, payload.year).await?;

    Ok((StatusCode::CREATED, Json(season.into())))
}

/// Get a season by ID
pub async fn get_season(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Path(season_id): Path<i64>,
) -> AppResult<Json<SeasonResponse>> {
    let season = SeasonService::get(state.db(), season_id).await?;
    Ok(Json(season.into()))
}

/// List seasons with optional filters
pub async fn list_seasons(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Query(query): Query<ListSeasonsQuery>,
) -> AppResult<Json<Vec<SeasonResponse>>> {
    let seasons = SeasonService::list(state.db(), query.name.as_deref(), query.year).await?;
    Ok(Json(seasons.into_iter().map(Into::into).collect()))
}

/// Update a season
pub async fn update_season(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Path(season_id): Path<i64>,
    Json(payload): Json<UpdateSeasonRequest>,
) -> AppResult<Json<SeasonResponse>> {
    payload.validate()?;

    let season = SeasonService::update(
        state.db(),
        season_id,
        payload.name.as_deref(),
        payload.year,
    )
    .await?;

    Ok(Json(season.into()))
}

/// Delete a season (competitions cascade)
pub async fn delete_season(
    State(state): State<AppState>,
    _admin: AdminClimber,
    Path(season_id): Path<i64>,
) -> AppResult<StatusCode> {
    SeasonService::delete(state.db(), season_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
