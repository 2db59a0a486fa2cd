//! Climber repository

use sqlx::PgConnection;

use crate::{error::AppResult, models::Climber};

/// Repository for climber database operations
pub struct ClimberRepository;

impl ClimberRepository {
    /// Create a new climber account
    pub async fn create(
        conn: &mut PgConnection,
        name: &str,
        password_hash: &str,
    ) -> AppResult<Climber> {
        let climber = sqlx::query_as::<_, Climber>(
            r#"
            INSERT INTO climber (name, password_hash)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(conn)
        .await?;

        Ok(climber)
    }

    /// Find climber by ID
    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> AppResult<Option<Climber>> {
        let climber = sqlx::query_as::<_, Climber>(r#"SELECT * FROM climber WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(climber)
    }

    /// Find climber by name
    pub async fn find_by_name(conn: &mut PgConnection, name: &str) -> AppResult<Option<Climber>> {
        let climber = sqlx::query_as::<_, Climber>(r#"SELECT * FROM climber WHERE name = $1"#)
            .bind(name)
            .fetch_optional(conn)
            .await?;

        Ok(climber)
    }

    /// Check whether a name is already taken
    pub async fn name_exists(conn: &mut PgConnection, name: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM climber WHERE name = $1)"#)
                .bind(name)
                .fetch_one(conn)
                .await?;

        Ok(exists)
    }

    /// Replace a climber's credential digest (opportunistic rehash)
    pub async fn update_password_hash(
        conn: &mut PgConnection,
        id: i64,
        password_hash: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE climber SET password_hash = $2, updated_at = NOW() WHERE id = $1"#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(conn)
        .await?;

        Ok(())
    }
}
