//! IFSC-style scoring rules
//!
//! The rule validator is a pure function over one score card; it has no side
//! effects and is shared by the single-item and batch upsert paths. Rules are
//! carried by an immutable [`ScoringRules`] value built once at startup from
//! configuration, not by module-level globals.

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;

/// One climber's candidate result on one problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub attempts_total: i32,
    pub got_bonus: bool,
    pub got_top: bool,
    pub attempts_to_bonus: Option<i32>,
    pub attempts_to_top: Option<i32>,
}

/// A violated scoring-consistency invariant
///
/// Checks run in a fixed order and the first violation is reported, so the
/// error for a given card is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreRuleViolation {
    #[error("attempts_to_bonus is required when got_bonus is true")]
    BonusAttemptsMissing,

    #[error("attempts_to_top is required when got_top is true")]
    TopAttemptsMissing,

    #[error("attempts_to_bonus cannot exceed attempts_total")]
    BonusAttemptsExceedTotal,

    #[error("attempts_to_top cannot exceed attempts_total")]
    TopAttemptsExceedTotal,

    #[error("attempts_total cannot be negative")]
    NegativeAttempts,

    #[error("attempts_to_bonus must be at least 1")]
    BonusAttemptsNotPositive,

    #[error("attempts_to_top must be at least 1")]
    TopAttemptsNotPositive,

    #[error("IFSC: Top implies Zone (got_bonus must be true if got_top is true)")]
    TopWithoutBonus,

    #[error("IFSC: attempts_to_top must be >= attempts_to_bonus")]
    TopBeforeBonus,
}

/// Immutable scoring configuration shared by validator, registration gate
/// and the upsert engine
#[derive(Debug, Clone)]
pub struct ScoringRules {
    levels: i32,
    problems_per_level: i32,
}

impl ScoringRules {
    pub fn new(grid: &GridConfig) -> Self {
        Self {
            levels: grid.levels,
            problems_per_level: grid.problems_per_level,
        }
    }

    /// Number of difficulty levels in a seeded grid
    pub fn levels(&self) -> i32 {
        self.levels
    }

    /// Number of problems per level in a seeded grid
    pub fn problems_per_level(&self) -> i32 {
        self.problems_per_level
    }

    /// Maximum number of items in one batch upsert (one full level)
    pub fn max_batch_items(&self) -> usize {
        self.problems_per_level as usize
    }

    /// Whether a registration level falls inside the grid
    pub fn level_in_range(&self, level: i32) -> bool {
        (1..=self.levels).contains(&level)
    }

    /// Whether a problem ordinal falls inside one level of the grid
    pub fn problem_no_in_range(&self, problem_no: i32) -> bool {
        (1..=self.problems_per_level).contains(&problem_no)
    }

    /// Validate one score card against the scoring invariants.
    ///
    /// Invariants, checked in order:
    /// 1. `got_bonus` implies `attempts_to_bonus` present
    /// 2. `got_top` implies `attempts_to_top` present
    /// 3. `attempts_to_*` never exceeds `attempts_total`
    /// 4. `got_top` implies `got_bonus` (top implies zone)
    /// 5. `attempts_to_top >= attempts_to_bonus` when both are present
    pub fn validate(&self, card: &ScoreCard) -> Result<(), ScoreRuleViolation> {
        if card.attempts_total < 0 {
            return Err(ScoreRuleViolation::NegativeAttempts);
        }
        if card.attempts_to_bonus.is_some_and(|n| n < 1) {
            return Err(ScoreRuleViolation::BonusAttemptsNotPositive);
        }
        if card.attempts_to_top.is_some_and(|n| n < 1) {
            return Err(ScoreRuleViolation::TopAttemptsNotPositive);
        }

        if card.got_bonus && card.attempts_to_bonus.is_none() {
            return Err(ScoreRuleViolation::BonusAttemptsMissing);
        }
        if card.got_top && card.attempts_to_top.is_none() {
            return Err(ScoreRuleViolation::TopAttemptsMissing);
        }

        if card.attempts_to_bonus.is_some_and(|n| n > card.attempts_total) {
            return Err(ScoreRuleViolation::BonusAttemptsExceedTotal);
        }
        if card.attempts_to_top.is_some_and(|n| n > card.attempts_total) {
            return Err(ScoreRuleViolation::TopAttemptsExceedTotal);
        }

        if card.got_top {
            if !card.got_bonus {
                return Err(ScoreRuleViolation::TopWithoutBonus);
            }
            if let (Some(to_bonus), Some(to_top)) = (card.attempts_to_bonus, card.attempts_to_top) {
                if to_top < to_bonus {
                    return Err(ScoreRuleViolation::TopBeforeBonus);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ScoringRules {
        ScoringRules {
            levels: 7,
            problems_per_level: 8,
        }
    }

    fn card(
        attempts_total: i32,
        got_bonus: bool,
        got_top: bool,
        attempts_to_bonus: Option<i32>,
        attempts_to_top: Option<i32>,
    ) -> ScoreCard {
        ScoreCard {
            attempts_total,
            got_bonus,
            got_top,
            attempts_to_bonus,
            attempts_to_top,
        }
    }

    #[test]
    fn test_flash_is_valid() {
        // Top and zone on the first attempt
        assert!(rules().validate(&card(1, true, true, Some(1), Some(1))).is_ok());
    }

    #[test]
    fn test_no_result_is_valid() {
        assert!(rules().validate(&card(0, false, false, None, None)).is_ok());
        assert!(rules().validate(&card(5, false, false, None, None)).is_ok());
    }

    #[test]
    fn test_bonus_only_is_valid() {
        assert!(rules().validate(&card(4, true, false, Some(2), None)).is_ok());
    }

    #[test]
    fn test_bonus_requires_attempts_to_bonus() {
        assert_eq!(
            rules().validate(&card(3, true, false, None, None)),
            Err(ScoreRuleViolation::BonusAttemptsMissing)
        );
    }

    #[test]
    fn test_top_requires_attempts_to_top() {
        assert_eq!(
            rules().validate(&card(3, true, true, Some(1), None)),
            Err(ScoreRuleViolation::TopAttemptsMissing)
        );
    }

    #[test]
    fn test_attempts_to_bonus_bounded_by_total() {
        assert_eq!(
            rules().validate(&card(2, true, false, Some(3), None)),
            Err(ScoreRuleViolation::BonusAttemptsExceedTotal)
        );
    }

    #[test]
    fn test_attempts_to_top_bounded_by_total() {
        assert_eq!(
            rules().validate(&card(2, true, true, Some(1), Some(5))),
            Err(ScoreRuleViolation::TopAttemptsExceedTotal)
        );
    }

    #[test]
    fn test_top_implies_bonus() {
        // Must fail with a specific error, never silently normalize
        assert_eq!(
            rules().validate(&card(3, false, true, None, Some(2))),
            Err(ScoreRuleViolation::TopWithoutBonus)
        );
    }

    #[test]
    fn test_top_cannot_precede_bonus() {
        // The canonical rejected example: top on attempt 2, zone on attempt 3
        assert_eq!(
            rules().validate(&card(5, true, true, Some(3), Some(2))),
            Err(ScoreRuleViolation::TopBeforeBonus)
        );
    }

    #[test]
    fn test_top_on_same_attempt_as_bonus_is_valid() {
        assert!(rules().validate(&card(5, true, true, Some(3), Some(3))).is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        // Violates both the missing-bonus-attempts rule and top-implies-bonus;
        // the missing field is reported first.
        assert_eq!(
            rules().validate(&card(3, true, true, None, None)),
            Err(ScoreRuleViolation::BonusAttemptsMissing)
        );
    }

    #[test]
    fn test_nonpositive_attempts_rejected() {
        assert_eq!(
            rules().validate(&card(-1, false, false, None, None)),
            Err(ScoreRuleViolation::NegativeAttempts)
        );
        assert_eq!(
            rules().validate(&card(3, true, false, Some(0), None)),
            Err(ScoreRuleViolation::BonusAttemptsNotPositive)
        );
    }

    #[test]
    fn test_level_and_problem_ranges() {
        let r = rules();
        assert!(r.level_in_range(1));
        assert!(r.level_in_range(7));
        assert!(!r.level_in_range(0));
        assert!(!r.level_in_range(8));
        assert!(r.problem_no_in_range(8));
        assert!(!r.problem_no_in_range(9));
        assert_eq!(r.max_batch_items(), 8);
    }
}
