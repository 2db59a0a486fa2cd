//! Season model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Season database model
///
/// A named year grouping of competitions. Deleting a season cascades to its
/// competitions at the storage layer.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}
