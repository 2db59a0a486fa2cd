//! Season request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create season request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub year: i32,
}

/// Update season request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSeasonRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub year: Option<i32>,
}

/// List seasons query parameters
#[derive(Debug, Deserialize)]
pub struct ListSeasonsQuery {
    pub name: Option<String>,
    pub year: Option<i32>,
}
