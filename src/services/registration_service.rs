//! Registration service
//!
//! The registration gate: one registration per (competition, climber), at a
//! single chosen level. Non-registered or wrong-level climbers are refused
//! by the score upsert engine downstream.

use sqlx::PgPool;

use crate::{
    db::repositories::{CompetitionRepository, RegistrationRepository},
    error::{AppError, AppResult},
    models::Registration,
    scoring::ScoringRules,
};

/// Registration service
pub struct RegistrationService;

impl RegistrationService {
    /// Register the acting climber for a competition at the requested level.
    ///
    /// The existence pre-check tolerates benign races: the composite-key
    /// uniqueness constraint is the final arbiter, and a violation at insert
    /// surfaces as the same "Already registered" conflict.
    pub async fn register_self(
        pool: &PgPool,
        rules: &ScoringRules,
        comp_id: i64,
        user_id: i64,
        level: i32,
    ) -> AppResult<Registration> {
        if !rules.level_in_range(level) {
            return Err(AppError::Validation(format!(
                "level must be between 1 and {}",
                rules.levels()
            )));
        }

        let mut tx = pool.begin().await?;

        if !CompetitionRepository::exists(&mut tx, comp_id).await? {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        if RegistrationRepository::exists(&mut tx, comp_id, user_id).await? {
            return Err(AppError::Conflict("Already registered".to_string()));
        }

        let registration = RegistrationRepository::create(&mut tx, comp_id, user_id, level).await?;
        tx.commit().await?;

        tracing::info!(comp_id, user_id, level, "Climber registered");
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[tokio::test]
    async fn test_register_once_then_conflict() {
        let pool = fixtures::test_pool().await;
        let comp = fixtures::competition(&pool).await;
        let climber = fixtures::climber(&pool).await;

        let registration =
            RegistrationService::register_self(&pool, &fixtures::rules(), comp.id, climber.id, 4)
                .await
                .unwrap();
        assert_eq!(registration.level, 4);

        let err =
            RegistrationService::register_self(&pool, &fixtures::rules(), comp.id, climber.id, 4)
                .await
                .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg == "Already registered"));
    }

    #[tokio::test]
    async fn test_racing_insert_hits_constraint_not_storage_error() {
        let pool = fixtures::test_pool().await;
        let comp = fixtures::competition(&pool).await;
        let climber = fixtures::climber(&pool).await;

        RegistrationService::register_self(&pool, &fixtures::rules(), comp.id, climber.id, 2)
            .await
            .unwrap();

        // A racing writer that got past the existence pre-check lands on the
        // composite-key constraint and sees the same conflict.
        let mut conn = pool.acquire().await.unwrap();
        let err = RegistrationRepository::create(&mut conn, comp.id, climber.id, 2)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg == "Already registered"));

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM registration WHERE comp_id = $1 AND user_id = $2",
        )
        .bind(comp.id)
        .bind(climber.id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_out_of_range_level_rejected() {
        let pool = fixtures::test_pool().await;
        let comp = fixtures::competition(&pool).await;
        let climber = fixtures::climber(&pool).await;

        let err =
            RegistrationService::register_self(&pool, &fixtures::rules(), comp.id, climber.id, 8)
                .await
                .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
