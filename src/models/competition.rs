//! Competition model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::{MAX_ROUND_NO, MIN_ROUND_NO};
use crate::error::{AppError, AppResult};

/// Competition type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "comp_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CompType {
    Qualifier,
    Final,
}

impl std::fmt::Display for CompType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qualifier => write!(f, "QUALIFIER"),
            Self::Final => write!(f, "FINAL"),
        }
    }
}

/// Competition database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub comp_type: CompType,
    pub comp_date: NaiveDate,
    pub season_id: i64,
    pub round_no: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Check the type/round pairing rule: a qualifier must carry a round number
/// in 1..=3, a final must not carry one.
pub fn validate_round_pairing(comp_type: CompType, round_no: Option<i32>) -> AppResult<()> {
    match (comp_type, round_no) {
        (CompType::Qualifier, None) => Err(AppError::Validation(
            "Qualifier must have round_no 1..3".to_string(),
        )),
        (CompType::Qualifier, Some(n)) if !(MIN_ROUND_NO..=MAX_ROUND_NO).contains(&n) => Err(
            AppError::Validation("Qualifier round_no must be between 1 and 3".to_string()),
        ),
        (CompType::Final, Some(_)) => Err(AppError::Validation(
            "Final must not have round_no".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifier_requires_round() {
        assert!(validate_round_pairing(CompType::Qualifier, None).is_err());
        assert!(validate_round_pairing(CompType::Qualifier, Some(1)).is_ok());
        assert!(validate_round_pairing(CompType::Qualifier, Some(3)).is_ok());
        assert!(validate_round_pairing(CompType::Qualifier, Some(4)).is_err());
        assert!(validate_round_pairing(CompType::Qualifier, Some(0)).is_err());
    }

    #[test]
    fn test_final_rejects_round() {
        assert!(validate_round_pairing(CompType::Final, None).is_ok());
        assert!(validate_round_pairing(CompType::Final, Some(1)).is_err());
    }
}
