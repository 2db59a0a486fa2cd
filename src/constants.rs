//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;

/// Default refresh token lifetime in days
pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;

/// Default JWT issuer claim
pub const DEFAULT_JWT_ISSUER: &str = "climb-api";

/// Clock-skew leeway when validating token timestamps, in seconds
pub const JWT_LEEWAY_SECONDS: u64 = 10;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 1024;

/// Climber name minimum length
pub const MIN_NAME_LENGTH: u64 = 1;

/// Climber name maximum length
pub const MAX_NAME_LENGTH: u64 = 200;

// =============================================================================
// PROBLEM GRID DEFAULTS
// =============================================================================

/// Default number of difficulty levels seeded per competition
pub const DEFAULT_GRID_LEVELS: i32 = 7;

/// Ceiling on configurable grid levels; the registration table checks
/// `level BETWEEN 1 AND 8`, so a taller grid would turn the application's
/// range gate into a storage error
pub const MAX_GRID_LEVELS: i32 = 8;

/// Default number of problems seeded per level
pub const DEFAULT_GRID_PROBLEMS_PER_LEVEL: i32 = 8;

// =============================================================================
// COMPETITION SETTINGS
// =============================================================================

/// Lowest qualifier round number
pub const MIN_ROUND_NO: i32 = 1;

/// Highest qualifier round number
pub const MAX_ROUND_NO: i32 = 3;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
