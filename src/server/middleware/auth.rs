//! Bearer session authentication.
//!
//! Requests authenticate with `Authorization: Bearer <token>`. The token is verified for
//! the principal kind the route expects and its subject is resolved to a database record.
//! Handlers receive the resolved principal through the `Authenticated<P>` extractor.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{diarist::DiaristRepository, employee::EmployeeRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{diarist::Diarist, employee::Employee, user::User},
    state::AppState,
    util::session_token::SessionTokenService,
};

/// A kind of account that can hold a session.
#[async_trait]
pub trait Principal: Sized + Send {
    /// Audience claim of tokens issued to this kind of principal.
    const AUDIENCE: &'static str;

    async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr>;
}

#[async_trait]
impl Principal for Employee {
    const AUDIENCE: &'static str = "employee";

    async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        EmployeeRepository::new(db).find_by_id(id).await
    }
}

#[async_trait]
impl Principal for User {
    const AUDIENCE: &'static str = "user";

    async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        UserRepository::new(db).find_by_id(id).await
    }
}

#[async_trait]
impl Principal for Diarist {
    const AUDIENCE: &'static str = "diarist";

    async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        DiaristRepository::new(db).find_by_id(id).await
    }
}

/// Resolves session tokens to principals.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a SessionTokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a SessionTokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates a request from its `Authorization` header value.
    ///
    /// # Arguments
    /// - `authorization` - Raw header value, `None` if the header is absent
    ///
    /// # Returns
    /// - `Ok(P)` - The principal named by a valid token
    /// - `Err(AppError::AuthErr(_))` - Missing or malformed header, or any token failure
    /// - `Err(AppError::DbErr(_))` - Database error during principal lookup
    pub async fn require<P: Principal>(&self, authorization: Option<&str>) -> Result<P, AppError> {
        let Some(authorization) = authorization else {
            return Err(AuthError::MissingAuthorizationHeader.into());
        };

        let token = bearer_token(authorization)?;

        self.require_token(token).await
    }

    /// Authenticates a bare token, e.g. one passed as a websocket query parameter.
    ///
    /// # Returns
    /// - `Ok(P)` - The principal named by the token
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, expired, or wrong audience
    /// - `Err(AppError::AuthErr(PrincipalNotFound))` - Subject does not exist
    /// - `Err(AppError::DbErr(_))` - Database error during principal lookup
    pub async fn require_token<P: Principal>(&self, token: &str) -> Result<P, AppError> {
        let claims = self.tokens.verify(token, P::AUDIENCE)?;

        let Some(principal) = P::find_by_id(self.db, &claims.sub).await? else {
            return Err(AuthError::PrincipalNotFound {
                kind: P::AUDIENCE,
                id: claims.sub,
            }
            .into());
        };

        Ok(principal)
    }
}

/// Extracts the token from a `Bearer <token>` header value.
///
/// Scheme and token may be separated by any run of spaces or tabs and the scheme is
/// matched case-insensitively. Anything after the token is ignored.
pub fn bearer_token(authorization: &str) -> Result<&str, AuthError> {
    let mut parts = authorization
        .split([' ', '\t'])
        .filter(|part| !part.is_empty());

    let scheme = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme(scheme.to_string()));
    }

    parts.next().ok_or(AuthError::MissingToken)
}

/// Extractor yielding the authenticated principal of kind `P`.
///
/// Rejects the request with 401 when authentication fails.
pub struct Authenticated<P>(pub P);

impl<P> FromRequestParts<AppState> for Authenticated<P>
where
    P: Principal + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|_| AuthError::MalformedAuthorizationHeader)
            })
            .transpose()?;

        let principal = AuthGuard::new(&state.db, &state.session_tokens)
            .require(authorization)
            .await?;

        Ok(Self(principal))
    }
}
