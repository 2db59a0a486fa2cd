//! Competition response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{CompType, Competition, Registration};

/// Competition response
#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub comp_type: CompType,
    pub comp_date: NaiveDate,
    pub season_id: i64,
    pub round_no: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Competition> for CompetitionResponse {
    fn from(comp: Competition) -> Self {
        Self {
            id: comp.id,
            name: comp.name,
            description: comp.description,
            comp_type: comp.comp_type,
            comp_date: comp.comp_date,
            season_id: comp.season_id,
            round_no: comp.round_no,
            created_at: comp.created_at,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub comp_id: i64,
    pub user_id: i64,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(reg: Registration) -> Self {
        Self {
            comp_id: reg.comp_id,
            user_id: reg.user_id,
            level: reg.level,
            created_at: reg.created_at,
        }
    }
}
