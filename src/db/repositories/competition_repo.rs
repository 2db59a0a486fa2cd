//! Competition repository

use chrono::NaiveDate;
use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{CompType, Competition},
};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition
    pub async fn create(
        conn: &mut PgConnection,
        name: &str,
        description: Option<&str>,
        comp_type: CompType,
        comp_date: NaiveDate,
        season_id: i64,
        round_no: Option<i32>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competition (name, description, comp_type, comp_date, season_id, round_no)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(comp_type)
        .bind(comp_date)
        .bind(season_id)
        .bind(round_no)
        .fetch_one(conn)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competition WHERE id = $1"#)
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(competition)
    }

    /// Check whether a competition exists
    pub async fn exists(conn: &mut PgConnection, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM competition WHERE id = $1)"#)
                .bind(id)
                .fetch_one(conn)
                .await?;

        Ok(exists)
    }

    /// List competitions, optionally filtered by season and/or type,
    /// ordered by competition date
    pub async fn list(
        conn: &mut PgConnection,
        season_id: Option<i64>,
        comp_type: Option<CompType>,
    ) -> AppResult<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT * FROM competition
            WHERE ($1::bigint IS NULL OR season_id = $1)
              AND ($2::comp_type IS NULL OR comp_type = $2)
            ORDER BY comp_date ASC
            "#,
        )
        .bind(season_id)
        .bind(comp_type)
        .fetch_all(conn)
        .await?;

        Ok(competitions)
    }

    /// Update competition fields, keeping current values where none are given
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        comp_type: Option<CompType>,
        comp_date: Option<NaiveDate>,
        season_id: Option<i64>,
        round_no: Option<Option<i32>>,
    ) -> AppResult<Competition> {
        // round_no is doubly optional: the outer layer is "was it sent",
        // the inner one is the stored nullable value.
        let (set_round, round_value) = match round_no {
            Some(value) => (true, value),
            None => (false, None),
        };

        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competition
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                comp_type = COALESCE($4, comp_type),
                comp_date = COALESCE($5, comp_date),
                season_id = COALESCE($6, season_id),
                round_no = CASE WHEN $7 THEN $8 ELSE round_no END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(comp_type)
        .bind(comp_date)
        .bind(season_id)
        .bind(set_round)
        .bind(round_value)
        .fetch_one(conn)
        .await?;

        Ok(competition)
    }

    /// Delete competition (problems, registrations and scores cascade)
    pub async fn delete(conn: &mut PgConnection, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM competition WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
