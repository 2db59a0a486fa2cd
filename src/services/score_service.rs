//! Score upsert engine
//!
//! Enforces eligibility (registration + level match), validates each score
//! card against the scoring rules, and performs idempotent create-or-update
//! over the composite-keyed score table, for a single item or a batch.
//!
//! Every call runs inside one transaction: any precondition failure aborts
//! the whole call with no partial writes. The batch path is two-phase --
//! every card is validated before the first row is written.

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;

use crate::{
    db::repositories::{ProblemRepository, RegistrationRepository, ScoreRepository},
    error::{AppError, AppResult},
    models::{ProblemScore, Registration},
    scoring::{ScoreCard, ScoringRules},
};

/// One batch upsert entry: a score card tagged with its problem ordinal
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub problem_no: i32,
    pub card: ScoreCard,
}

/// One batch upsert outcome, carrying the problem ordinal for the caller
#[derive(Debug)]
pub struct BatchOutcome {
    pub problem_no: i32,
    pub score: ProblemScore,
}

/// Score upsert service
pub struct ScoreService;

impl ScoreService {
    /// Upsert a single score for (competition, level, problem ordinal).
    ///
    /// Returns the stored row and whether it was newly created.
    pub async fn upsert_one(
        pool: &PgPool,
        rules: &ScoringRules,
        comp_id: i64,
        level_no: i32,
        problem_no: i32,
        user_id: i64,
        card: &ScoreCard,
    ) -> AppResult<(ProblemScore, bool)> {
        let mut tx = pool.begin().await?;

        let problem = ProblemRepository::find_by_triple(&mut tx, comp_id, level_no, problem_no)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let registration = RegistrationRepository::find(&mut tx, comp_id, user_id).await?;
        Self::check_eligibility(registration.as_ref(), level_no)?;

        rules.validate(card)?;

        let existing = ScoreRepository::find(&mut tx, comp_id, problem.id, user_id).await?;
        let (score, created) = match existing {
            None => {
                // A racing create on the same composite key resolves
                // last-writer-wins inside the insert itself.
                let score =
                    ScoreRepository::insert(&mut tx, comp_id, problem.id, user_id, card).await?;
                (score, true)
            }
            Some(_) => {
                let score = ScoreRepository::update(&mut tx, problem.id, user_id, card).await?;
                (score, false)
            }
        };

        tx.commit().await?;
        Ok((score, created))
    }

    /// Upsert a batch of scores for one (competition, level), atomically.
    ///
    /// Outcomes are returned sorted by ascending problem ordinal regardless
    /// of input order.
    pub async fn upsert_batch(
        pool: &PgPool,
        rules: &ScoringRules,
        comp_id: i64,
        level_no: i32,
        user_id: i64,
        items: &[BatchItem],
    ) -> AppResult<Vec<BatchOutcome>> {
        Self::check_batch_shape(rules, items)?;

        let mut tx = pool.begin().await?;

        let registration = RegistrationRepository::find(&mut tx, comp_id, user_id).await?;
        Self::check_eligibility(registration.as_ref(), level_no)?;

        // Resolve every referenced ordinal in one query; a missing ordinal
        // fails the whole batch with the full missing set.
        let wanted_nos: Vec<i32> = items.iter().map(|item| item.problem_no).collect();
        let problems =
            ProblemRepository::find_by_level_and_nos(&mut tx, comp_id, level_no, &wanted_nos)
                .await?;

        if problems.len() != wanted_nos.len() {
            let have: HashSet<i32> = problems.iter().map(|p| p.problem_no).collect();
            let mut missing: Vec<i32> = wanted_nos
                .iter()
                .copied()
                .filter(|no| !have.contains(no))
                .collect();
            missing.sort_unstable();
            return Err(AppError::NotFound(format!(
                "Problems not found: {missing:?}"
            )));
        }

        // Phase one: every card must pass validation before any row is
        // written.
        for item in items {
            rules.validate(&item.card)?;
        }

        let problem_by_no: HashMap<i32, i64> =
            problems.iter().map(|p| (p.problem_no, p.id)).collect();
        let problem_ids: Vec<i64> = problems.iter().map(|p| p.id).collect();

        // One batch read of the existing rows for the affected problem set
        let existing = ScoreRepository::find_for_problems(&mut tx, comp_id, user_id, &problem_ids)
            .await?;
        let existing_by_pid: HashSet<i64> = existing.iter().map(|s| s.problem_id).collect();

        // Phase two: apply
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            let problem_id = problem_by_no[&item.problem_no];
            let score = if existing_by_pid.contains(&problem_id) {
                ScoreRepository::update(&mut tx, problem_id, user_id, &item.card).await?
            } else {
                ScoreRepository::insert(&mut tx, comp_id, problem_id, user_id, &item.card).await?
            };
            outcomes.push(BatchOutcome {
                problem_no: item.problem_no,
                score,
            });
        }

        tx.commit().await?;

        outcomes.sort_by_key(|o| o.problem_no);
        Ok(outcomes)
    }

    /// Registration and level preconditions shared by both upsert paths
    fn check_eligibility(registration: Option<&Registration>, level_no: i32) -> AppResult<()> {
        let registration = registration.ok_or_else(|| {
            AppError::Forbidden("Not registered for this competition".to_string())
        })?;

        if registration.level != level_no {
            return Err(AppError::Forbidden(
                "Registered for a different level".to_string(),
            ));
        }

        Ok(())
    }

    /// Payload-level batch checks: size bounds and pairwise-distinct
    /// ordinals within the grid
    fn check_batch_shape(rules: &ScoringRules, items: &[BatchItem]) -> AppResult<()> {
        if items.is_empty() || items.len() > rules.max_batch_items() {
            return Err(AppError::Validation(format!(
                "batch must contain between 1 and {} items",
                rules.max_batch_items()
            )));
        }

        for item in items {
            if !rules.problem_no_in_range(item.problem_no) {
                return Err(AppError::Validation(format!(
                    "problem_no must be between 1 and {}",
                    rules.problems_per_level()
                )));
            }
        }

        let distinct: HashSet<i32> = items.iter().map(|item| item.problem_no).collect();
        if distinct.len() != items.len() {
            return Err(AppError::Conflict(
                "Duplicate problem_no in payload".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rules() -> ScoringRules {
        ScoringRules::new(&crate::config::GridConfig {
            levels: 7,
            problems_per_level: 8,
        })
    }

    fn item(problem_no: i32) -> BatchItem {
        BatchItem {
            problem_no,
            card: ScoreCard {
                attempts_total: 2,
                got_bonus: true,
                got_top: false,
                attempts_to_bonus: Some(1),
                attempts_to_top: None,
            },
        }
    }

    fn registration(level: i32) -> Registration {
        Registration {
            comp_id: 1,
            user_id: 1,
            level,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_eligibility_requires_registration() {
        let err = ScoreService::check_eligibility(None, 3).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg)
            if msg == "Not registered for this competition"));
    }

    #[test]
    fn test_eligibility_requires_matching_level() {
        let reg = registration(3);
        assert!(ScoreService::check_eligibility(Some(&reg), 3).is_ok());

        let err = ScoreService::check_eligibility(Some(&reg), 5).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg)
            if msg == "Registered for a different level"));
    }

    #[test]
    fn test_batch_rejects_duplicate_ordinals() {
        let err =
            ScoreService::check_batch_shape(&rules(), &[item(2), item(5), item(2)]).unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg)
            if msg == "Duplicate problem_no in payload"));
    }

    #[test]
    fn test_batch_rejects_empty_and_oversized() {
        assert!(ScoreService::check_batch_shape(&rules(), &[]).is_err());

        let nine: Vec<BatchItem> = (1..=9).map(item).collect();
        assert!(ScoreService::check_batch_shape(&rules(), &nine).is_err());

        let eight: Vec<BatchItem> = (1..=8).map(item).collect();
        assert!(ScoreService::check_batch_shape(&rules(), &eight).is_ok());
    }

    #[test]
    fn test_batch_rejects_out_of_grid_ordinals() {
        assert!(ScoreService::check_batch_shape(&rules(), &[item(0)]).is_err());
        assert!(ScoreService::check_batch_shape(&rules(), &[item(9)]).is_err());
    }

    mod storage {
        use chrono::NaiveDate;

        use super::*;
        use crate::{
            db::repositories::CompetitionRepository,
            models::CompType,
            services::{RegistrationService, SeasonService},
            test_utils::fixtures,
        };

        #[tokio::test]
        async fn test_upsert_creates_then_overwrites_in_place() {
            let pool = fixtures::test_pool().await;
            let comp = fixtures::competition(&pool).await;
            let climber = fixtures::climber(&pool).await;
            RegistrationService::register_self(&pool, &rules(), comp.id, climber.id, 3)
                .await
                .unwrap();

            let first = ScoreCard {
                attempts_total: 2,
                got_bonus: true,
                got_top: false,
                attempts_to_bonus: Some(2),
                attempts_to_top: None,
            };
            let (stored, created) =
                ScoreService::upsert_one(&pool, &rules(), comp.id, 3, 5, climber.id, &first)
                    .await
                    .unwrap();
            assert!(created);
            assert_eq!(stored.card(), first);

            let second = ScoreCard {
                attempts_total: 4,
                got_bonus: true,
                got_top: true,
                attempts_to_bonus: Some(2),
                attempts_to_top: Some(4),
            };
            let (stored, created) =
                ScoreService::upsert_one(&pool, &rules(), comp.id, 3, 5, climber.id, &second)
                    .await
                    .unwrap();
            assert!(!created);
            assert_eq!(stored.card(), second);

            // Overwritten in place, never a second row
            assert_eq!(fixtures::score_rows(&pool, comp.id).await, 1);
        }

        #[tokio::test]
        async fn test_batch_missing_ordinal_writes_nothing() {
            let pool = fixtures::test_pool().await;

            // Competition with a partial grid: only ordinals 1..=4 exist
            let season = SeasonService::create(&pool, &fixtures::unique("season"), 2026)
                .await
                .unwrap();
            let mut tx = pool.begin().await.unwrap();
            let comp = CompetitionRepository::create(
                &mut tx,
                &fixtures::unique("comp"),
                None,
                CompType::Final,
                NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                season.id,
                None,
            )
            .await
            .unwrap();
            ProblemRepository::seed_grid(&mut tx, comp.id, 7, 4).await.unwrap();
            tx.commit().await.unwrap();

            let climber = fixtures::climber(&pool).await;
            RegistrationService::register_self(&pool, &rules(), comp.id, climber.id, 2)
                .await
                .unwrap();

            let err = ScoreService::upsert_batch(
                &pool,
                &rules(),
                comp.id,
                2,
                climber.id,
                &[item(1), item(6), item(3)],
            )
            .await
            .unwrap_err();

            assert!(matches!(err, AppError::NotFound(msg) if msg.contains("[6]")));
            assert_eq!(fixtures::score_rows(&pool, comp.id).await, 0);
        }

        #[tokio::test]
        async fn test_batch_invalid_card_writes_nothing() {
            let pool = fixtures::test_pool().await;
            let comp = fixtures::competition(&pool).await;
            let climber = fixtures::climber(&pool).await;
            RegistrationService::register_self(&pool, &rules(), comp.id, climber.id, 4)
                .await
                .unwrap();

            // Second card claims top before bonus; the whole batch fails
            let bad = BatchItem {
                problem_no: 2,
                card: ScoreCard {
                    attempts_total: 5,
                    got_bonus: true,
                    got_top: true,
                    attempts_to_bonus: Some(3),
                    attempts_to_top: Some(2),
                },
            };
            let err = ScoreService::upsert_batch(
                &pool,
                &rules(),
                comp.id,
                4,
                climber.id,
                &[item(1), bad],
            )
            .await
            .unwrap_err();

            assert!(matches!(err, AppError::ScoreRule(_)));
            assert_eq!(fixtures::score_rows(&pool, comp.id).await, 0);
        }

        #[tokio::test]
        async fn test_batch_applies_all_and_sorts_results() {
            let pool = fixtures::test_pool().await;
            let comp = fixtures::competition(&pool).await;
            let climber = fixtures::climber(&pool).await;
            RegistrationService::register_self(&pool, &rules(), comp.id, climber.id, 1)
                .await
                .unwrap();

            let outcomes = ScoreService::upsert_batch(
                &pool,
                &rules(),
                comp.id,
                1,
                climber.id,
                &[item(5), item(2), item(8)],
            )
            .await
            .unwrap();

            let nos: Vec<i32> = outcomes.iter().map(|o| o.problem_no).collect();
            assert_eq!(nos, vec![2, 5, 8]);
            assert_eq!(fixtures::score_rows(&pool, comp.id).await, 3);
        }

        #[tokio::test]
        async fn test_wrong_level_refused() {
            let pool = fixtures::test_pool().await;
            let comp = fixtures::competition(&pool).await;
            let climber = fixtures::climber(&pool).await;
            RegistrationService::register_self(&pool, &rules(), comp.id, climber.id, 3)
                .await
                .unwrap();

            let err = ScoreService::upsert_one(
                &pool,
                &rules(),
                comp.id,
                5,
                1,
                climber.id,
                &item(1).card,
            )
            .await
            .unwrap_err();

            assert!(matches!(err, AppError::Forbidden(msg)
                if msg == "Registered for a different level"));
        }
    }
}
