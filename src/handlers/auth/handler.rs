//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{error::AppResult, services::AuthService, state::AppState};

use super::{
    request::{LoginRequest, RefreshRequest, SignupRequest},
    response::{AuthResponse, ClimberResponse, TokenPairResponse},
};

/// Sign up a new climber
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<ClimberResponse>)> {
    payload.validate()?;

    let climber = AuthService::signup(state.db(), &payload.name, &payload.password).await?;

    Ok((StatusCode::CREATED, Json(climber.into())))
}

/// Login with name and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (climber, tokens) = AuthService::login(
        state.db(),
        &state.config().jwt,
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: tokens.token_type,
        climber: climber.into(),
    }))
}

/// Rotate a refresh token into a fresh pair
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let tokens = AuthService::refresh(&state.config().jwt, &payload.refresh_token)?;

    Ok(Json(TokenPairResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: tokens.token_type,
    }))
}
