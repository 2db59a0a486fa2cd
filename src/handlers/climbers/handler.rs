//! Climber handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    db::repositories::ClimberRepository,
    error::{AppError, AppResult},
    handlers::auth::response::ClimberResponse,
    middleware::auth::CurrentClimber,
    state::AppState,
};

/// Get the authenticated climber
pub async fn get_me(CurrentClimber(climber): CurrentClimber) -> Json<ClimberResponse> {
    Json(climber.into())
}

/// Get a climber by ID
pub async fn get_climber(
    State(state): State<AppState>,
    Path(climber_id): Path<i64>,
) -> AppResult<Json<ClimberResponse>> {
    let mut conn = state.db().acquire().await.map_err(AppError::from)?;

    let climber = ClimberRepository::find_by_id(&mut conn, climber_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Climber not found".to_string()))?;

    Ok(Json(climber.into()))
}
