//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Climber;

/// Public climber representation
#[derive(Debug, Serialize)]
pub struct ClimberResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Climber> for ClimberResponse {
    fn from(climber: Climber) -> Self {
        Self {
            id: climber.id,
            name: climber.name,
            created_at: climber.created_at,
        }
    }
}

/// Token pair response
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Login response: token pair plus the authenticated climber
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub climber: ClimberResponse,
}
