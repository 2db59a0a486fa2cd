//! Season response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Season;

/// Season response
#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Season> for SeasonResponse {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            name: season.name,
            year: season.year,
            created_at: season.created_at,
        }
    }
}
