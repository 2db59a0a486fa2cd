//! Problem score model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::scoring::ScoreCard;

/// Problem score database model
///
/// One climber's final recorded result on one problem. Keyed by
/// (problem_id, user_id); competition_id is denormalized for query
/// convenience. Created on first submission, afterwards only updated in
/// place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProblemScore {
    pub competition_id: i64,
    pub problem_id: i64,
    pub user_id: i64,
    pub attempts_total: i32,
    pub got_bonus: bool,
    pub got_top: bool,
    pub attempts_to_bonus: Option<i32>,
    pub attempts_to_top: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemScore {
    /// The five scoring fields as a card, for responses
    pub fn card(&self) -> ScoreCard {
        ScoreCard {
            attempts_total: self.attempts_total,
            got_bonus: self.got_bonus,
            got_top: self.got_top,
            attempts_to_bonus: self.attempts_to_bonus,
            attempts_to_top: self.attempts_to_top,
        }
    }
}
