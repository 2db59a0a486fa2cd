//! Season repository

use sqlx::PgConnection;

use crate::{error::AppResult, models::Season};

/// Repository for season database operations
pub struct SeasonRepository;

impl SeasonRepository {
    /// Create a new season
    pub async fn create(conn: &mut PgConnection, name: &str, year: i32) -> AppResult<Season> {
        let season = sqlx::query_as::<_, Season>(
            r#"
            INSERT INTO season (name, year)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(year)
        .fetch_one(conn)
        .await?;

        Ok(season)
    }

    /// Find season by ID
    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> AppResult<Option<Season>> {
        let season = sqlx::query_as::<_, Season>(r#"SELECT * FROM season WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(season)
    }

    /// List seasons, optionally filtered by name and/or year
    pub async fn list(
        conn: &mut PgConnection,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<Vec<Season>> {
        let seasons = sqlx::query_as::<_, Season>(
            r#"
            SELECT * FROM season
            WHERE ($1::text IS NULL OR name = $1)
              AND ($2::int IS NULL OR year = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(name)
        .bind(year)
        .fetch_all(conn)
        .await?;

        Ok(seasons)
    }

    /// Update season fields, keeping current values where none are given
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<Season> {
        let season = sqlx::query_as::<_, Season>(
            r#"
            UPDATE season
            SET name = COALESCE($2, name),
                year = COALESCE($3, year)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(year)
        .fetch_one(conn)
        .await?;

        Ok(season)
    }

    /// Delete season (competitions cascade at the storage layer)
    pub async fn delete(conn: &mut PgConnection, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM season WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
