//! JWT token generation/validation and session-id minting.
//!
//! Access and refresh tokens are both HS256-signed JWTs carrying the same
//! [`TokenClaims`] payload, but signed with **independent secrets** and
//! lifetimes: a stolen access token is bounded by its short TTL, and a
//! refresh token can never be verified against the access secret (or vice
//! versa).

use folio_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Claims embedded in every token, access and refresh alike.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's email address.
    pub email: String,
    /// The user's role name (`"ADMIN"` or `"SUPER_ADMIN"`).
    pub role: String,
    /// Session id linking the token back to its `sessions` row.
    pub sid: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_secret: String,
    /// HMAC-SHA256 secret for refresh tokens. Must differ from the access
    /// secret so the two token kinds are not interchangeable.
    pub refresh_secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_expiry_days: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_ACCESS_SECRET`        | **yes**  | --      |
    /// | `JWT_REFRESH_SECRET`       | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if either secret is not set or is empty.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .expect("JWT_ACCESS_SECRET must be set in the environment");
        assert!(
            !access_secret.is_empty(),
            "JWT_ACCESS_SECRET must not be empty"
        );

        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .expect("JWT_REFRESH_SECRET must be set in the environment");
        assert!(
            !refresh_secret.is_empty(),
            "JWT_REFRESH_SECRET must not be empty"
        );

        let access_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            access_secret,
            refresh_secret,
            access_expiry_mins,
            refresh_expiry_days,
        }
    }

    /// Access token lifetime in seconds (cookie Max-Age).
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_expiry_mins * 60
    }

    /// Refresh token lifetime in seconds (cookie Max-Age).
    pub fn refresh_ttl_secs(&self) -> i64 {
        self.refresh_expiry_days * 24 * 60 * 60
    }
}

/// Generate a cryptographically random session id: 32 bytes (256 bits of
/// entropy) as a 64-char lowercase hex string.
pub fn generate_session_id() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

/// Sign an access token for the given claim inputs.
pub fn sign_access_token(
    user_id: DbId,
    email: &str,
    role: &str,
    session_id: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    sign(
        user_id,
        email,
        role,
        session_id,
        &config.access_secret,
        config.access_ttl_secs(),
    )
}

/// Sign a refresh token for the given claim inputs.
pub fn sign_refresh_token(
    user_id: DbId,
    email: &str,
    role: &str,
    session_id: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    sign(
        user_id,
        email,
        role,
        session_id,
        &config.refresh_secret,
        config.refresh_ttl_secs(),
    )
}

fn sign(
    user_id: DbId,
    email: &str,
    role: &str,
    session_id: &str,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        sid: session_id.to_string(),
        iat: now,
        exp: now + ttl_secs,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`TokenClaims`].
pub fn verify_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    verify(token, &config.access_secret)
}

/// Validate and decode a refresh token, returning the embedded [`TokenClaims`].
pub fn verify_refresh_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    verify(token, &config.refresh_secret)
}

fn verify(token: &str, secret: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use jsonwebtoken::errors::ErrorKind;

    use super::*;

    /// Helper to build a test config with known secrets.
    pub(crate) fn test_config() -> JwtConfig {
        JwtConfig {
            access_secret: "access-secret-that-is-long-enough".to_string(),
            refresh_secret: "refresh-secret-that-is-long-enough".to_string(),
            access_expiry_mins: 15,
            refresh_expiry_days: 7,
        }
    }

    #[test]
    fn test_sign_and_verify_access_token() {
        let config = test_config();
        let token = sign_access_token(1, "admin@example.com", "ADMIN", "abc123", &config)
            .expect("token generation should succeed");

        let claims =
            verify_access_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.sid, "abc123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let config = test_config();
        let access = sign_access_token(1, "a@b.c", "ADMIN", "sid", &config).unwrap();
        let refresh = sign_refresh_token(1, "a@b.c", "ADMIN", "sid", &config).unwrap();

        assert!(
            verify_refresh_token(&access, &config).is_err(),
            "access token must not verify as a refresh token"
        );
        assert!(
            verify_access_token(&refresh, &config).is_err(),
            "refresh token must not verify as an access token"
        );
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            sub: 1,
            email: "a@b.c".to_string(),
            role: "ADMIN".to_string(),
            sid: "sid".to_string(),
            iat: now - 600,
            exp: now - 300, // expired 5 minutes ago (well past leeway)
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.access_secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = verify_access_token(&token, &config);
        assert_matches!(
            result.unwrap_err().kind(),
            ErrorKind::ExpiredSignature,
            "expired token must fail validation"
        );
    }

    #[test]
    fn test_different_secret_fails() {
        let config = test_config();
        let mut other = test_config();
        other.access_secret = "a-completely-different-secret".to_string();

        let token = sign_access_token(1, "a@b.c", "ADMIN", "sid", &config).unwrap();
        assert!(
            verify_access_token(&token, &other).is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_session_id_shape_and_uniqueness() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b, "session ids must not collide in practice");
    }
}
