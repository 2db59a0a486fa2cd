//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model
///
/// One boulder at a given difficulty level and ordinal position within that
/// level; the (competition_id, level_no, problem_no) triple is unique.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    pub competition_id: i64,
    pub level_no: i32,
    pub problem_no: i32,
    pub created_at: DateTime<Utc>,
}
