//! Authentication service
//!
//! Argon2id credential hashing with opportunistic rehash on login, and
//! HS256 access/refresh token issuance with a `type` claim separating the
//! two token kinds.

use argon2::{
    Algorithm, Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::JwtConfig,
    constants::JWT_LEEWAY_SECONDS,
    db::repositories::ClimberRepository,
    error::{AppError, AppResult},
    models::Climber,
};

/// `type` claim value for access tokens
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// `type` claim value for refresh tokens
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Freshly issued access/refresh token pair
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Sign up a new climber
    pub async fn signup(pool: &PgPool, name: &str, password: &str) -> AppResult<Climber> {
        let mut tx = pool.begin().await?;

        if ClimberRepository::name_exists(&mut tx, name).await? {
            return Err(AppError::AlreadyExists("Name is already taken".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        // The uniqueness constraint is the final arbiter under racing signups
        let climber = ClimberRepository::create(&mut tx, name, &password_hash)
            .await
            .map_err(|err| match err {
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists("Name is already taken".to_string())
                }
                other => other,
            })?;

        tx.commit().await?;
        Ok(climber)
    }

    /// Login with name and password, returning the climber and a token pair
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        name: &str,
        password: &str,
    ) -> AppResult<(Climber, TokenPair)> {
        let mut tx = pool.begin().await?;

        let mut climber = ClimberRepository::find_by_name(&mut tx, name)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &climber.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Opportunistic rehash if parameters changed
        if Self::needs_rehash(&climber.password_hash)? {
            let new_hash = Self::hash_password(password)?;
            ClimberRepository::update_password_hash(&mut tx, climber.id, &new_hash).await?;
            climber.password_hash = new_hash;
        }

        tx.commit().await?;

        let tokens = Self::issue_pair(jwt, climber.id, Some(&climber.name))?;
        Ok((climber, tokens))
    }

    /// Rotate a refresh token into a fresh token pair
    pub fn refresh(jwt: &JwtConfig, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = Self::verify_token(refresh_token, jwt)?;
        if claims.token_type != TOKEN_TYPE_REFRESH {
            return Err(AppError::WrongTokenType);
        }

        let climber_id: i64 = claims.sub.parse().map_err(|_| AppError::InvalidToken)?;
        Self::issue_pair(jwt, climber_id, None)
    }

    /// Issue a matching access/refresh token pair
    fn issue_pair(jwt: &JwtConfig, climber_id: i64, name: Option<&str>) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: Self::create_access_token(jwt, climber_id, name)?,
            refresh_token: Self::create_refresh_token(jwt, climber_id)?,
            token_type: "Bearer".to_string(),
        })
    }

    /// Create a short-lived access token
    pub fn create_access_token(
        jwt: &JwtConfig,
        climber_id: i64,
        name: Option<&str>,
    ) -> AppResult<String> {
        Self::create_token(
            jwt,
            climber_id,
            TOKEN_TYPE_ACCESS,
            Duration::minutes(jwt.access_ttl_minutes),
            name,
        )
    }

    /// Create a long-lived refresh token
    pub fn create_refresh_token(jwt: &JwtConfig, climber_id: i64) -> AppResult<String> {
        Self::create_token(
            jwt,
            climber_id,
            TOKEN_TYPE_REFRESH,
            Duration::days(jwt.refresh_ttl_days),
            None,
        )
    }

    fn create_token(
        jwt: &JwtConfig,
        climber_id: i64,
        token_type: &str,
        ttl: Duration,
        name: Option<&str>,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            iss: jwt.issuer.clone(),
            sub: climber_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type: token_type.to_string(),
            name: name.map(str::to_string),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(token)
    }

    /// Verify a token's signature, issuer and timestamps, and extract claims
    pub fn verify_token(token: &str, jwt: &JwtConfig) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.leeway = JWT_LEEWAY_SECONDS;
        validation.validate_nbf = true;
        validation.set_issuer(&[&jwt.issuer]);
        validation.set_required_spec_claims(&["exp", "iat", "nbf", "sub", "iss"]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(jwt.secret.as_bytes()),
            &validation,
        )?;

        Ok(token_data.claims)
    }

    /// Hash a password using Argon2id
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify a password against a stored digest
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Whether a stored digest was produced with stale parameters and should
    /// be upgraded on the next successful login
    pub fn needs_rehash(hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return Ok(true);
        }

        let params = Params::try_from(&parsed)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid hash parameters: {}", e)))?;
        let current = Params::default();

        Ok(params.m_cost() != current.m_cost()
            || params.t_cost() != current.t_cost()
            || params.p_cost() != current.p_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-do-not-use".to_string(),
            issuer: "climb-api".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let jwt = jwt_config();
        let token = AuthService::create_access_token(&jwt, 42, Some("alice")).unwrap();
        let claims = AuthService::verify_token(&token, &jwt).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
        assert_eq!(claims.name.as_deref(), Some("alice"));
        assert_eq!(claims.iss, "climb-api");
    }

    #[test]
    fn test_refresh_token_type() {
        let jwt = jwt_config();
        let token = AuthService::create_refresh_token(&jwt, 7).unwrap();
        let claims = AuthService::verify_token(&token, &jwt).unwrap();

        assert_eq!(claims.token_type, TOKEN_TYPE_REFRESH);
        assert!(claims.name.is_none());
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let jwt = jwt_config();
        let access = AuthService::create_access_token(&jwt, 1, None).unwrap();
        let err = AuthService::refresh(&jwt, &access).unwrap_err();
        assert!(matches!(err, AppError::WrongTokenType));
    }

    #[test]
    fn test_refresh_rotates_pair() {
        let jwt = jwt_config();
        let refresh = AuthService::create_refresh_token(&jwt, 9).unwrap();
        let pair = AuthService::refresh(&jwt, &refresh).unwrap();

        let access = AuthService::verify_token(&pair.access_token, &jwt).unwrap();
        assert_eq!(access.sub, "9");
        assert_eq!(access.token_type, TOKEN_TYPE_ACCESS);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let jwt = jwt_config();
        let mut other = jwt_config();
        other.secret = "another-secret".to_string();

        let token = AuthService::create_access_token(&jwt, 1, None).unwrap();
        assert!(AuthService::verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let jwt = jwt_config();
        let mut other = jwt_config();
        other.issuer = "someone-else".to_string();

        let token = AuthService::create_access_token(&jwt, 1, None).unwrap();
        assert!(AuthService::verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("hunter42").unwrap();
        assert!(AuthService::verify_password("hunter42", &hash).unwrap());
        assert!(!AuthService::verify_password("hunter43", &hash).unwrap());
        // Fresh hashes carry current parameters
        assert!(!AuthService::needs_rehash(&hash).unwrap());
    }

    #[test]
    fn test_stale_parameters_need_rehash() {
        // Hash produced with deliberately weak, non-default costs
        let params = Params::new(8192, 1, 1, None).unwrap();
        let argon2 = Argon2::new(Algorithm::Argon2id, argon2::Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let stale = argon2
            .hash_password(b"hunter42", &salt)
            .unwrap()
            .to_string();

        assert!(AuthService::verify_password("hunter42", &stale).unwrap());
        assert!(AuthService::needs_rehash(&stale).unwrap());
    }
}
