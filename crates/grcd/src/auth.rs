//! Bearer token verification.
//!
//! HS256 signature + expiry check against the shared secret. Verification is
//! behind the `TokenVerifier` trait so route tests can inject a permissive
//! fake instead of minting real tokens.

use grc_common::AuthError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an accepted token. This is the authenticated identity
/// the lookup pipeline receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// Production verifier over the shared HS256 secret.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Pull the credential out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-for-grc-engine";

    fn mint(sub: &str, exp: i64, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: exp as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let verifier = JwtVerifier::new(SECRET);
        let token = mint("test_user", future_exp(), SECRET);
        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.sub, "test_user");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let token = mint("test_user", future_exp(), "some-other-secret");
        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let token = mint("test_user", chrono::Utc::now().timestamp() - 3600, SECRET);
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        assert!(verifier.verify("not.a.token").is_err());
    }

    #[test]
    fn test_bearer_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("Bearer ")).is_err());
        assert!(bearer_token(None).is_err());
    }
}
