//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod climbers;
pub mod competitions;
pub mod health;
pub mod scores;
pub mod seasons;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/climber", climbers::routes())
        .nest("/season", seasons::routes())
        .nest("/competition", competitions::routes())
        .nest("/competitions", scores::routes())
}
