//! Problem score response DTOs

use serde::Serialize;

use crate::{models::ProblemScore, scoring::ScoreCard, services::score_service::BatchOutcome};

/// Single upsert response: the stored score with its problem ordinal
#[derive(Debug, Serialize)]
pub struct ProblemScoreResponse {
    pub problem_no: i32,
    pub attempts_total: i32,
    pub got_bonus: bool,
    pub got_top: bool,
    pub attempts_to_bonus: Option<i32>,
    pub attempts_to_top: Option<i32>,
}

impl ProblemScoreResponse {
    pub fn new(problem_no: i32, score: &ProblemScore) -> Self {
        Self {
            problem_no,
            attempts_total: score.attempts_total,
            got_bonus: score.got_bonus,
            got_top: score.got_top,
            attempts_to_bonus: score.attempts_to_bonus,
            attempts_to_top: score.attempts_to_top,
        }
    }
}

/// One entry of the batch upsert response
#[derive(Debug, Serialize)]
pub struct BatchScoreResultResponse {
    pub problem_no: i32,
    pub score: ScoreCard,
}

impl From<BatchOutcome> for BatchScoreResultResponse {
    fn from(outcome: BatchOutcome) -> Self {
        Self {
            problem_no: outcome.problem_no,
            score: outcome.score.card(),
        }
    }
}
