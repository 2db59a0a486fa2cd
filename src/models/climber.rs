//! Climber model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Scope tag carried by every climber account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_scope_t", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserScope {
    Climber,
    Admin,
}

impl UserScope {
    /// Static expansion of a scope tag to the capability set it implies,
    /// computed from a closed mapping rather than per-request logic.
    pub fn implied(&self) -> &'static [UserScope] {
        match self {
            UserScope::Climber => &[UserScope::Climber],
            UserScope::Admin => &[UserScope::Admin, UserScope::Climber],
        }
    }

    /// Whether this scope grants the given capability
    pub fn grants(&self, capability: UserScope) -> bool {
        self.implied().contains(&capability)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserScope::Climber => "climber",
            UserScope::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "climber" => Ok(UserScope::Climber),
            "admin" => Ok(UserScope::Admin),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for UserScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Climber database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Climber {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub user_scope: UserScope,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Climber {
    /// Check if the climber holds admin capabilities
    pub fn is_admin(&self) -> bool {
        self.user_scope.grants(UserScope::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_expansion() {
        assert!(UserScope::Admin.grants(UserScope::Climber));
        assert!(UserScope::Admin.grants(UserScope::Admin));
        assert!(UserScope::Climber.grants(UserScope::Climber));
        assert!(!UserScope::Climber.grants(UserScope::Admin));
    }

    #[test]
    fn test_scope_round_trip() {
        assert_eq!("admin".parse::<UserScope>(), Ok(UserScope::Admin));
        assert_eq!(UserScope::Climber.to_string(), "climber");
        assert!("organizer".parse::<UserScope>().is_err());
    }
}
