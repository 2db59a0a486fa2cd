//! Climb API - Bouldering Competition Backend
//!
//! This library provides the core functionality for a bouldering
//! competition platform: climber accounts, seasons, competitions with
//! fixed problem grids, self-service registration and IFSC-style
//! per-problem score recording.
//!
//! # Features
//!
//! - JWT-based authentication with access and refresh tokens
//! - Season and competition management with round pairing rules
//! - Automatic problem grid seeding on competition creation
//! - Single and atomic batch score upserts with IFSC validation
//! - Role-based access control (climber, admin)
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
