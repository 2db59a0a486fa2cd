//! Problem score request DTOs

use serde::Deserialize;

use crate::scoring::ScoreCard;
use crate::services::score_service::BatchItem;

/// Single score upsert body: one climber's recorded result on one problem
#[derive(Debug, Deserialize)]
pub struct ScoreUpsertRequest {
    pub attempts_total: i32,
    pub got_bonus: bool,
    pub got_top: bool,
    pub attempts_to_bonus: Option<i32>,
    pub attempts_to_top: Option<i32>,
}

impl ScoreUpsertRequest {
    pub fn into_card(self) -> ScoreCard {
        ScoreCard {
            attempts_total: self.attempts_total,
            got_bonus: self.got_bonus,
            got_top: self.got_top,
            attempts_to_bonus: self.attempts_to_bonus,
            attempts_to_top: self.attempts_to_top,
        }
    }
}

/// One batch entry: a score card tagged with its problem ordinal
#[derive(Debug, Deserialize)]
pub struct BatchScoreItemRequest {
    pub problem_no: i32,

    pub attempts_total: i32,
    pub got_bonus: bool,
    pub got_top: bool,
    pub attempts_to_bonus: Option<i32>,
    pub attempts_to_top: Option<i32>,
}

impl BatchScoreItemRequest {
    pub fn into_item(self) -> BatchItem {
        BatchItem {
            problem_no: self.problem_no,
            card: ScoreCard {
                attempts_total: self.attempts_total,
                got_bonus: self.got_bonus,
                got_top: self.got_top,
                attempts_to_bonus: self.attempts_to_bonus,
                attempts_to_top: self.attempts_to_top,
            },
        }
    }
}

/// Batch score upsert body
#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    pub items: Vec<BatchScoreItemRequest>,
}
