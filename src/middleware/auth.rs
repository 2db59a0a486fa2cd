//! Authentication extractors
//!
//! The current-user resolver verifies the bearer access token and loads the
//! climber it names; the admin gate layers the scope check on top. Handlers
//! opt in per route by taking the extractor as an argument.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::{
    db::repositories::ClimberRepository,
    error::AppError,
    models::{Climber, UserScope},
    services::auth_service::{AuthService, TOKEN_TYPE_ACCESS},
    state::AppState,
};

/// The authenticated climber making the request
#[derive(Debug, Clone)]
pub struct CurrentClimber(pub Climber);

impl FromRequestParts<AppState> for CurrentClimber {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Auth failed: Authorization header is not a bearer token");
            AppError::Unauthorized
        })?;

        let claims = AuthService::verify_token(token, &state.config().jwt)?;
        if claims.token_type != TOKEN_TYPE_ACCESS {
            debug!(token_type = %claims.token_type, "Auth failed: wrong token type");
            return Err(AppError::WrongTokenType);
        }

        let climber_id: i64 = claims.sub.parse().map_err(|_| {
            debug!(sub = %claims.sub, "Auth failed: invalid subject in token");
            AppError::InvalidToken
        })?;

        let mut conn = state.db().acquire().await.map_err(AppError::from)?;
        let climber = ClimberRepository::find_by_id(&mut conn, climber_id)
            .await?
            .ok_or_else(|| {
                debug!(climber_id, "Auth failed: token subject no longer exists");
                AppError::Unauthorized
            })?;

        Ok(CurrentClimber(climber))
    }
}

/// The authenticated climber, required to hold admin scope
#[derive(Debug, Clone)]
pub struct AdminClimber(pub Climber);

impl FromRequestParts<AppState> for AdminClimber {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentClimber(climber) = CurrentClimber::from_request_parts(parts, state).await?;

        if !climber.user_scope.grants(UserScope::Admin) {
            return Err(AppError::Forbidden("Admin only".to_string()));
        }

        Ok(AdminClimber(climber))
    }
}
