//! Problem score handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{Router, routing::put};

use crate::state::AppState;

/// Score upsert routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{comp_id}/level/{level_no}/problems/{problem_no}/score",
            put(handler::upsert_score),
        )
        .route(
            "/{comp_id}/level/{level}/scores/batch",
            put(handler::upsert_scores_batch),
        )
}
