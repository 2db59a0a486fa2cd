//! Competition service
//!
//! Competition CRUD plus the problem grid seeder. The grid is seeded inside
//! the create transaction, so a competition is never visible without its
//! problems.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::{
    db::repositories::{CompetitionRepository, ProblemRepository, SeasonRepository},
    error::{AppError, AppResult},
    models::{CompType, Competition, competition::validate_round_pairing},
    scoring::ScoringRules,
};

/// Competition service
pub struct CompetitionService;

impl CompetitionService {
    /// Create a competition and seed its problem grid
    pub async fn create(
        pool: &PgPool,
        rules: &ScoringRules,
        name: &str,
        description: Option<&str>,
        comp_type: CompType,
        comp_date: NaiveDate,
        season_id: i64,
        round_no: Option<i32>,
    ) -> AppResult<Competition> {
        validate_round_pairing(comp_type, round_no)?;

        let mut tx = pool.begin().await?;

        if SeasonRepository::find_by_id(&mut tx, season_id).await?.is_none() {
            return Err(AppError::NotFound("Season not found".to_string()));
        }

        let competition = CompetitionRepository::create(
            &mut tx,
            name,
            description,
            comp_type,
            comp_date,
            season_id,
            round_no,
        )
        .await?;

        let inserted = Self::seed_problems(
            &mut tx,
            competition.id,
            rules.levels(),
            rules.problems_per_level(),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            competition_id = competition.id,
            problems_seeded = inserted,
            "Competition created"
        );

        Ok(competition)
    }

    /// Seed the levels x problems-per-level grid for a competition.
    ///
    /// Safe to call repeatedly; returns the count of rows newly inserted.
    pub async fn seed_problems(
        conn: &mut PgConnection,
        competition_id: i64,
        levels: i32,
        problems_per_level: i32,
    ) -> AppResult<u64> {
        ProblemRepository::seed_grid(conn, competition_id, levels, problems_per_level).await
    }

    /// Get a competition by ID
    pub async fn get(pool: &PgPool, id: i64) -> AppResult<Competition> {
        let mut conn = pool.acquire().await?;
        CompetitionRepository::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))
    }

    /// List competitions with optional season/type filters
    pub async fn list(
        pool: &PgPool,
        season_id: Option<i64>,
        comp_type: Option<CompType>,
    ) -> AppResult<Vec<Competition>> {
        let mut conn = pool.acquire().await?;
        CompetitionRepository::list(&mut conn, season_id, comp_type).await
    }

    /// Update a competition; the merged result must still satisfy the
    /// type/round pairing rule
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        comp_type: Option<CompType>,
        comp_date: Option<NaiveDate>,
        season_id: Option<i64>,
        round_no: Option<Option<i32>>,
    ) -> AppResult<Competition> {
        let mut tx = pool.begin().await?;

        let current = CompetitionRepository::find_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let merged_type = comp_type.unwrap_or(current.comp_type);
        let merged_round = round_no.unwrap_or(current.round_no);
        validate_round_pairing(merged_type, merged_round)?;

        if let Some(season_id) = season_id {
            if SeasonRepository::find_by_id(&mut tx, season_id).await?.is_none() {
                return Err(AppError::NotFound("Season not found".to_string()));
            }
        }

        let competition = CompetitionRepository::update(
            &mut tx,
            id,
            name,
            description,
            comp_type,
            comp_date,
            season_id,
            round_no,
        )
        .await?;

        tx.commit().await?;
        Ok(competition)
    }

    /// Delete a competition; problems, registrations and scores cascade
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        if CompetitionRepository::find_by_id(&mut tx, id).await?.is_none() {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        CompetitionRepository::delete(&mut tx, id).await?;
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[tokio::test]
    async fn test_create_seeds_full_grid() {
        let pool = fixtures::test_pool().await;
        let comp = fixtures::competition(&pool).await;

        // 7 levels x 8 problems
        assert_eq!(fixtures::problem_rows(&pool, comp.id).await, 56);
    }

    #[tokio::test]
    async fn test_grid_seeding_is_idempotent() {
        let pool = fixtures::test_pool().await;
        let comp = fixtures::competition(&pool).await;

        let mut conn = pool.acquire().await.unwrap();
        let inserted = CompetitionService::seed_problems(&mut conn, comp.id, 7, 8)
            .await
            .unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(fixtures::problem_rows(&pool, comp.id).await, 56);
    }
}
