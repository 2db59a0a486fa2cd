//! Registration repository

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::Registration,
};

/// Repository for registration database operations
pub struct RegistrationRepository;

impl RegistrationRepository {
    /// Create a registration for a (competition, climber) pair.
    ///
    /// The composite-key uniqueness constraint is the final arbiter against
    /// racing duplicate registrations; a violation is translated into the
    /// same conflict the existence pre-check reports.
    pub async fn create(
        conn: &mut PgConnection,
        comp_id: i64,
        user_id: i64,
        level: i32,
    ) -> AppResult<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registration (comp_id, user_id, level)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(comp_id)
        .bind(user_id)
        .bind(level)
        .fetch_one(conn)
        .await
        .map_err(|err| match AppError::from(err) {
            AppError::AlreadyExists(_) => AppError::Conflict("Already registered".to_string()),
            other => other,
        })?;

        Ok(registration)
    }

    /// Find a climber's registration for a competition
    pub async fn find(
        conn: &mut PgConnection,
        comp_id: i64,
        user_id: i64,
    ) -> AppResult<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registration WHERE comp_id = $1 AND user_id = $2"#,
        )
        .bind(comp_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?;

        Ok(registration)
    }

    /// Check whether a climber is registered for a competition
    pub async fn exists(conn: &mut PgConnection, comp_id: i64, user_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM registration WHERE comp_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(comp_id)
        .bind(user_id)
        .fetch_one(conn)
        .await?;

        Ok(exists)
    }
}
