//! Problem score repository

use sqlx::PgConnection;

use crate::{error::AppResult, models::ProblemScore, scoring::ScoreCard};

/// Repository for problem score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Find an existing score by its (competition, problem, climber) key
    pub async fn find(
        conn: &mut PgConnection,
        competition_id: i64,
        problem_id: i64,
        user_id: i64,
    ) -> AppResult<Option<ProblemScore>> {
        let score = sqlx::query_as::<_, ProblemScore>(
            r#"
            SELECT * FROM problem_score
            WHERE competition_id = $1 AND problem_id = $2 AND user_id = $3
            "#,
        )
        .bind(competition_id)
        .bind(problem_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?;

        Ok(score)
    }

    /// Batch-read a climber's existing scores for a set of problems
    pub async fn find_for_problems(
        conn: &mut PgConnection,
        competition_id: i64,
        user_id: i64,
        problem_ids: &[i64],
    ) -> AppResult<Vec<ProblemScore>> {
        let scores = sqlx::query_as::<_, ProblemScore>(
            r#"
            SELECT * FROM problem_score
            WHERE competition_id = $1 AND user_id = $2 AND problem_id = ANY($3)
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .bind(problem_ids)
        .fetch_all(conn)
        .await?;

        Ok(scores)
    }

    /// Insert a score row, absorbing a racing insert on the same composite
    /// key as last-writer-wins (a mutable scoring record, not an append-only
    /// log).
    pub async fn insert(
        conn: &mut PgConnection,
        competition_id: i64,
        problem_id: i64,
        user_id: i64,
        card: &ScoreCard,
    ) -> AppResult<ProblemScore> {
        let score = sqlx::query_as::<_, ProblemScore>(
            r#"
            INSERT INTO problem_score (
                competition_id, problem_id, user_id,
                attempts_total, got_bonus, got_top, attempts_to_bonus, attempts_to_top
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (problem_id, user_id) DO UPDATE
            SET attempts_total = EXCLUDED.attempts_total,
                got_bonus = EXCLUDED.got_bonus,
                got_top = EXCLUDED.got_top,
                attempts_to_bonus = EXCLUDED.attempts_to_bonus,
                attempts_to_top = EXCLUDED.attempts_to_top,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(problem_id)
        .bind(user_id)
        .bind(card.attempts_total)
        .bind(card.got_bonus)
        .bind(card.got_top)
        .bind(card.attempts_to_bonus)
        .bind(card.attempts_to_top)
        .fetch_one(conn)
        .await?;

        Ok(score)
    }

    /// Overwrite the five scoring fields of an existing row in place
    pub async fn update(
        conn: &mut PgConnection,
        problem_id: i64,
        user_id: i64,
        card: &ScoreCard,
    ) -> AppResult<ProblemScore> {
        let score = sqlx::query_as::<_, ProblemScore>(
            r#"
            UPDATE problem_score
            SET attempts_total = $3,
                got_bonus = $4,
                got_top = $5,
                attempts_to_bonus = $6,
                attempts_to_top = $7,
                updated_at = NOW()
            WHERE problem_id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(user_id)
        .bind(card.attempts_total)
        .bind(card.got_bonus)
        .bind(card.got_top)
        .bind(card.attempts_to_bonus)
        .bind(card.attempts_to_top)
        .fetch_one(conn)
        .await?;

        Ok(score)
    }
}
