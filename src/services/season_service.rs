//! Season service

use sqlx::PgPool;

use crate::{
    db::repositories::SeasonRepository,
    error::{AppError, AppResult},
    models::Season,
};

/// Season service
pub struct SeasonService;

impl SeasonService {
    /// Create a new season
    pub async fn create(pool: &PgPool, name: &str, year: i32) -> AppResult<Season> {
        let mut tx = pool.begin().await?;
        let season = SeasonRepository::create(&mut tx, name, year).await?;
        tx.commit().await?;
        Ok(season)
    }

    /// Get a season by ID
    pub async fn get(pool: &PgPool, id: i64) -> AppResult<Season> {
        let mut conn = pool.acquire().await?;
        SeasonRepository::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))
    }

    /// List seasons with optional name/year filters
    pub async fn list(
        pool: &PgPool,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<Vec<Season>> {
        let mut conn = pool.acquire().await?;
        SeasonRepository::list(&mut conn, name, year).await
    }

    /// Update a season
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<Season> {
        let mut tx = pool.begin().await?;

        if SeasonRepository::find_by_id(&mut tx, id).await?.is_none() {
            return Err(AppError::NotFound("Season not found".to_string()));
        }

        let season = SeasonRepository::update(&mut tx, id, name, year).await?;
        tx.commit().await?;
        Ok(season)
    }

    /// Delete a season; its competitions cascade with it
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        if SeasonRepository::find_by_id(&mut tx, id).await?.is_none() {
            return Err(AppError::NotFound("Season not found".to_string()));
        }

        SeasonRepository::delete(&mut tx, id).await?;
        tx.commit().await?;
        Ok(())
    }
}
