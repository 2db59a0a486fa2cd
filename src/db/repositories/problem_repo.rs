//! Problem repository

use sqlx::PgConnection;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Seed the full cartesian grid of levels x problems for a competition.
    ///
    /// Idempotent: rows already present for a (competition, level, problem)
    /// triple are skipped, so a re-run or a concurrent call never violates
    /// the grid uniqueness constraint. Returns the number of rows actually
    /// inserted (0 on a fully idempotent re-run).
    pub async fn seed_grid(
        conn: &mut PgConnection,
        competition_id: i64,
        levels: i32,
        problems_per_level: i32,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO problem (competition_id, level_no, problem_no)
            SELECT $1, l, p
            FROM generate_series(1, $2::int) AS l,
                 generate_series(1, $3::int) AS p
            ON CONFLICT (competition_id, level_no, problem_no) DO NOTHING
            "#,
        )
        .bind(competition_id)
        .bind(levels)
        .bind(problems_per_level)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Find one problem by its (competition, level, ordinal) triple
    pub async fn find_by_triple(
        conn: &mut PgConnection,
        competition_id: i64,
        level_no: i32,
        problem_no: i32,
    ) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problem
            WHERE competition_id = $1 AND level_no = $2 AND problem_no = $3
            "#,
        )
        .bind(competition_id)
        .bind(level_no)
        .bind(problem_no)
        .fetch_optional(conn)
        .await?;

        Ok(problem)
    }

    /// Find all problems at a level matching the given ordinals, in one query
    pub async fn find_by_level_and_nos(
        conn: &mut PgConnection,
        competition_id: i64,
        level_no: i32,
        problem_nos: &[i32],
    ) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problem
            WHERE competition_id = $1 AND level_no = $2 AND problem_no = ANY($3)
            "#,
        )
        .bind(competition_id)
        .bind(level_no)
        .bind(problem_nos)
        .fetch_all(conn)
        .await?;

        Ok(problems)
    }
}
