//! Test utilities
//!
//! A shared PostgreSQL testcontainer, started lazily on first use, plus
//! fixture helpers for the storage-bound tests.

pub mod containers {
    use testcontainers::{ContainerAsync, runners::AsyncRunner};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    static POSTGRES: OnceCell<ContainerAsync<Postgres>> = OnceCell::const_new();

    /// Get or start the shared PostgreSQL container
    async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        POSTGRES
            .get_or_init(|| async {
                Postgres::default()
                    .with_user("climb")
                    .with_password("climb_test")
                    .with_db_name("climb_test")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container")
            })
            .await
    }

    /// Connection URL for the shared test database
    ///
    /// Honors `TEST_DATABASE_URL` when set (for environments without
    /// Docker); otherwise starts the shared container.
    pub async fn postgres_url() -> String {
        if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            return url;
        }
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        format!("postgres://climb:climb_test@{}:{}/climb_test", host, port)
    }
}

pub mod fixtures {
    use std::sync::atomic::{AtomicU64, Ordering};

    use chrono::NaiveDate;
    use sqlx::PgPool;

    use crate::{
        config::{DatabaseConfig, GridConfig},
        db,
        db::repositories::ClimberRepository,
        models::{Climber, CompType, Competition},
        scoring::ScoringRules,
        services::{CompetitionService, SeasonService},
    };

    static SEQ: AtomicU64 = AtomicU64::new(0);

    /// A unique suffix so fixture rows never collide across parallel tests
    /// sharing one database
    pub fn unique(prefix: &str) -> String {
        format!("{}-{}", prefix, SEQ.fetch_add(1, Ordering::Relaxed))
    }

    /// Default 7x8 grid rules
    pub fn rules() -> ScoringRules {
        ScoringRules::new(&GridConfig {
            levels: 7,
            problems_per_level: 8,
        })
    }

    /// Pool against the shared container, with migrations applied
    pub async fn test_pool() -> PgPool {
        let config = DatabaseConfig {
            url: super::containers::postgres_url().await,
            max_connections: 5,
        };
        let pool = db::create_pool(&config)
            .await
            .expect("Failed to connect to test database");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    /// Insert a climber with a placeholder credential digest
    pub async fn climber(pool: &PgPool) -> Climber {
        let mut conn = pool.acquire().await.unwrap();
        ClimberRepository::create(&mut conn, &unique("climber"), "unusable-digest")
            .await
            .unwrap()
    }

    /// A season plus a final-type competition with its 7x8 grid seeded
    pub async fn competition(pool: &PgPool) -> Competition {
        let season = SeasonService::create(pool, &unique("season"), 2026)
            .await
            .unwrap();
        CompetitionService::create(
            pool,
            &rules(),
            &unique("comp"),
            None,
            CompType::Final,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            season.id,
            None,
        )
        .await
        .unwrap()
    }

    /// Count a competition's score rows
    pub async fn score_rows(pool: &PgPool, comp_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM problem_score WHERE competition_id = $1")
            .bind(comp_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    /// Count a competition's problem rows
    pub async fn problem_rows(pool: &PgPool, comp_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM problem WHERE competition_id = $1")
            .bind(comp_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }
}
