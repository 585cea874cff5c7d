//! Admin gate: shared-secret check and session tokens.
//!
//! The console unlocks with one configured secret. A successful login yields
//! an HS256 session token that the browser keeps for the lifetime of the tab.
//! Logout records the token's `jti` in [`RevokedSessions`] so it stops
//! working before it expires.

use std::collections::HashMap;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Subject claim carried by every admin session.
pub const ADMIN_SUBJECT: &str = "admin";

/// Default session lifetime in hours.
const DEFAULT_SESSION_HOURS: i64 = 12;

/// Claims embedded in every admin session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier, used for logout.
    pub jti: String,
}

/// Admin gate configuration.
#[derive(Clone)]
pub struct SessionConfig {
    /// The shared secret typed into the login prompt.
    pub admin_secret: String,
    /// HMAC key used to sign session tokens.
    pub signing_secret: String,
    /// Session lifetime in hours.
    pub session_hours: i64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("admin_secret", &"<redacted>")
            .field("signing_secret", &"<redacted>")
            .field("session_hours", &self.session_hours)
            .finish()
    }
}

impl SessionConfig {
    /// Load the admin gate configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `ADMIN_SECRET`        | **yes**  | --      |
    /// | `SESSION_SECRET`      | **yes**  | --      |
    /// | `ADMIN_SESSION_HOURS` | no       | `12`    |
    ///
    /// # Panics
    ///
    /// Panics if either secret is not set or is empty.
    pub fn from_env() -> Self {
        let admin_secret =
            std::env::var("ADMIN_SECRET").expect("ADMIN_SECRET must be set in the environment");
        assert!(!admin_secret.is_empty(), "ADMIN_SECRET must not be empty");

        let signing_secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!signing_secret.is_empty(), "SESSION_SECRET must not be empty");

        let session_hours: i64 = std::env::var("ADMIN_SESSION_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_HOURS.to_string())
            .parse()
            .expect("ADMIN_SESSION_HOURS must be a valid i64");

        Self {
            admin_secret,
            signing_secret,
            session_hours,
        }
    }
}

/// Compare the submitted password with the configured secret.
///
/// Both sides are hashed first so the comparison runs over equal-length
/// digests in constant time.
pub fn secret_matches(submitted: &str, configured: &str) -> bool {
    let a = Sha256::digest(submitted.as_bytes());
    let b = Sha256::digest(configured.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Issue a signed session token. Returns the token and its claims.
pub fn issue_session(
    config: &SessionConfig,
) -> Result<(String, SessionClaims), jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: now + config.session_hours * 3600,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.signing_secret.as_bytes()),
    )?;
    Ok((token, claims))
}

/// Validate a session token's signature and expiry.
pub fn validate_session(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.signing_secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(data.claims)
}

/// Token ids ended by logout, kept until their natural expiry.
#[derive(Debug, Default)]
pub struct RevokedSessions {
    inner: RwLock<HashMap<String, i64>>,
}

impl RevokedSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke `jti` until `exp`, pruning entries that already expired.
    pub async fn revoke(&self, jti: &str, exp: i64) {
        let now = chrono::Utc::now().timestamp();
        let mut revoked = self.inner.write().await;
        revoked.retain(|_, expires_at| *expires_at > now);
        revoked.insert(jti.to_string(), exp);
    }

    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.inner.read().await.contains_key(jti)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
