//! Season handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Season routes (admin only)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_seasons).post(handler::create_season))
        .route(
            "/{season_id}",
            get(handler::get_season)
                .patch(handler::update_season)
                .delete(handler::delete_season),
        )
}
