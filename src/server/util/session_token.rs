//! Signed session tokens.
//!
//! Sessions are stateless HS256 JWTs. The subject (`sub`) is the id of the authenticated
//! principal and the audience (`aud`) names the principal kind, so a token minted for a
//! diarist can never authenticate as a user or employee with the same id.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Claims carried by every session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Id of the authenticated principal.
    pub sub: String,
    /// Principal kind the token was issued for.
    pub aud: String,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and verifies session tokens with a shared secret.
///
/// Cheap to clone; the keys are plain byte buffers.
#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionTokenService {
    /// Creates a new SessionTokenService.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by every service that verifies these tokens
    /// - `ttl_seconds` - Lifetime of newly signed tokens
    pub fn new(secret: &[u8], ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_seconds,
        }
    }

    /// Signs a token for the given principal.
    ///
    /// # Arguments
    /// - `subject` - Id of the principal
    /// - `audience` - Principal kind, see `Principal::AUDIENCE`
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenSigning))` - Encoding failed
    pub fn sign(&self, subject: &str, audience: &str) -> Result<String, AppError> {
        let now = Utc::now().timestamp();

        self.encode(&SessionClaims {
            sub: subject.to_string(),
            aud: audience.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        })
    }

    /// Verifies the signature, expiry and audience of a token and decodes its claims.
    ///
    /// # Arguments
    /// - `token` - Encoded token taken from the request
    /// - `audience` - Principal kind the caller expects
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Token is valid for the audience
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed, or wrong audience
    pub fn verify(&self, token: &str, audience: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }

    fn encode(&self, claims: &SessionClaims) -> Result<String, AppError> {
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(InternalError::TokenSigning)?;

        Ok(token)
    }
}
