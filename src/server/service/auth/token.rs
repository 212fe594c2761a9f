//! Bearer token issuance and validation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::User};

/// Claims carried by every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username.
    pub sub: String,
    pub uid: i32,
    /// Stored role value at issue time.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and validates HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<String>,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(secret: String, ttl_seconds: i64) -> Self {
        Self {
            secret: Arc::new(secret),
            ttl_seconds,
        }
    }

    /// Generates a 64-character alphanumeric signing secret.
    pub fn random_secret() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    /// Issues a token for `user` that expires after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(jsonwebtoken::errors::Error)` - Encoding failed
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            uid: user.id,
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Validates signature and expiry, returning the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            AuthError::InvalidToken(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::Role;

    fn user() -> User {
        User {
            id: 7,
            username: "manager".to_string(),
            email: "manager@example.com".to_string(),
            password_hash: String::new(),
            role: Role::Manager,
        }
    }

    #[test]
    fn issued_token_validates() {
        let service = TokenService::new("unit-test-secret".to_string(), 3600);

        let token = service.issue(&user()).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, "manager");
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.role, "ROLE_MANAGER");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = TokenService::new("first-secret".to_string(), 3600);
        let verifier = TokenService::new("second-secret".to_string(), 3600);

        let token = issuer.issue(&user()).unwrap();

        assert!(matches!(
            verifier.validate(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let service = TokenService::new("unit-test-secret".to_string(), -7200);

        let token = service.issue(&user()).unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn random_secrets_differ() {
        let a = TokenService::random_secret();
        let b = TokenService::random_secret();

        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
