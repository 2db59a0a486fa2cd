//! Climber handlers

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Climber routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handler::get_me))
        .route("/{climber_id}", get(handler::get_climber))
}
