//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod climber;
pub mod competition;
pub mod problem;
pub mod problem_score;
pub mod registration;
pub mod season;

pub use climber::*;
pub use competition::*;
pub use problem::*;
pub use problem_score::*;
pub use registration::*;
pub use season::*;
