use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::TokenError;

/// Fixed validity window of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claim set embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Credential identity.
    pub sub: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expires-at, unix seconds; always `iat` + 24h.
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: Uuid, issued_at: DateTime<Utc>) -> Self {
        let exp = issued_at + Duration::hours(TOKEN_TTL_HOURS);
        Self { sub: subject.to_string(), iat: issued_at.timestamp(), exp: exp.timestamp() }
    }
}

/// Turns a claim set into a signed token string.
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &Claims) -> Result<String, TokenError>;
}

/// HS256 JWT signer keyed by a process-wide secret.
pub struct JwtSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    has_secret: bool,
}

impl JwtSigner {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            has_secret: !secret.is_empty(),
        }
    }

    /// Check signature and expiry; a token is valid only while `now < exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if !self.has_secret {
            return Err(TokenError::MissingSecret);
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            if matches!(e.kind(), ErrorKind::ExpiredSignature) { TokenError::Expired } else { TokenError::Jwt(e) }
        })?;
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        if !self.has_secret {
            return Err(TokenError::MissingSecret);
        }
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }
}
