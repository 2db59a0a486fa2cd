//! Database repositories
//!
//! Repository methods take a `&mut PgConnection` so that a service can run
//! every statement of one request inside a single transaction.

pub mod climber_repo;
pub mod competition_repo;
pub mod problem_repo;
pub mod registration_repo;
pub mod score_repo;
pub mod season_repo;

pub use climber_repo::ClimberRepository;
pub use competition_repo::CompetitionRepository;
pub use problem_repo::ProblemRepository;
pub use registration_repo::RegistrationRepository;
pub use score_repo::ScoreRepository;
pub use season_repo::SeasonRepository;
