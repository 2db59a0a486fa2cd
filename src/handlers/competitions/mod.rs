//! Competition handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_competitions).post(handler::create_competition),
        )
        .route(
            "/{comp_id}",
            get(handler::get_competition)
                .patch(handler::update_competition)
                .delete(handler::delete_competition),
        )
        .route("/{comp_id}/register", post(handler::register_self))
}
