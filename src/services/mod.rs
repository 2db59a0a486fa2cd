//! Business logic services

pub mod auth_service;
pub mod competition_service;
pub mod registration_service;
pub mod score_service;
pub mod season_service;

pub use auth_service::AuthService;
pub use competition_service::CompetitionService;
pub use registration_service::RegistrationService;
pub use score_service::ScoreService;
pub use season_service::SeasonService;
