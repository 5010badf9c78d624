use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Principal},
    model::{diarist::Diarist, employee::Employee, user::User},
    util::session_token::SessionTokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod bearer_token;
mod require;

fn token_service() -> SessionTokenService {
    SessionTokenService::new(b"middleware-test-secret", 3600)
}
