//! Competition request DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::CompType;

/// Distinguish an absent field (outer None) from an explicit `null`
/// (inner None)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Create competition request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub description: Option<String>,

    /// QUALIFIER or FINAL; qualifiers carry a round number in 1..=3
    pub comp_type: CompType,

    pub comp_date: NaiveDate,

    pub season_id: i64,

    pub round_no: Option<i32>,
}

/// Update competition request
///
/// `round_no` is doubly optional: omitting the field keeps the stored
/// value, sending `null` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub description: Option<String>,
    pub comp_type: Option<CompType>,
    pub comp_date: Option<NaiveDate>,
    pub season_id: Option<i64>,

    #[serde(default, deserialize_with = "double_option")]
    pub round_no: Option<Option<i32>>,
}

/// List competitions query parameters
#[derive(Debug, Deserialize)]
pub struct ListCompetitionsQuery {
    pub season_id: Option<i64>,
    pub comp_type: Option<CompType>,
}

/// Register-self request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub level: i32,
}
