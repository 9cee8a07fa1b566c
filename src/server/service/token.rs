//! Stateless bearer tokens.
//!
//! Tokens are HS256-signed JWTs carrying the user's identity and tenant association.
//! There is no session store and no revocation; a token is valid until it expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Lifetime of the token handed out at registration.
pub const REGISTER_TOKEN_TTL: Duration = Duration::hours(24);

/// Lifetime of the token handed out at login.
pub const LOGIN_TOKEN_TTL: Duration = Duration::days(30);

/// Claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for `user`, issued now and expiring after `ttl`.
    pub fn for_user(user: &entity::user::Model, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            company_id: user.company_id,
            branch_id: user.branch_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Issues and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user` valid for `ttl`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(InternalError::TokenIssue)` - Signing failed
    pub fn issue(&self, user: &entity::user::Model, ttl: Duration) -> Result<String, InternalError> {
        let claims = Claims::for_user(user, ttl);

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks the signature and expiry of `token` and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> entity::user::Model {
        entity::user::Model {
            id: 7,
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
            company_id: Some(3),
            branch_id: Some(11),
            role_id: None,
            phone: None,
            reset_token: None,
            reset_token_expires: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn verifies_issued_token() {
        let tokens = TokenService::new("secret");

        let token = tokens.issue(&user(), REGISTER_TOKEN_TTL).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "asha@example.com");
        assert_eq!(claims.company_id, Some(3));
        assert_eq!(claims.branch_id, Some(11));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("secret");

        let token = tokens.issue(&user(), Duration::seconds(-120)).unwrap();

        assert!(matches!(
            tokens.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("one")
            .issue(&user(), LOGIN_TOKEN_TTL)
            .unwrap();

        assert!(TokenService::new("two").verify(&token).is_err());
        assert!(TokenService::new("one").verify("not.a.token").is_err());
    }
}
