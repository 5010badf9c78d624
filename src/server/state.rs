//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds:
//! - Database connection pool
//! - Session token signer/verifier
//! - Live websocket connection registry
//! - Event producer for the payment service
//! - Avatar storage backend and the public base URL

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    producer::EventProducer, realtime::ConnectionRegistry, storage::AvatarStorage,
    util::session_token::SessionTokenService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ConnectionRegistry` and the producer are reference counted
/// - `AvatarStorage` holds a path or a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens presented by clients.
    pub session_tokens: SessionTokenService,

    /// Websocket connections of diarists, used to push live events.
    pub connections: ConnectionRegistry,

    /// Publishes events consumed by other services.
    pub producer: Arc<dyn EventProducer>,

    /// Where uploaded avatars are written.
    pub avatar_storage: AvatarStorage,

    /// Base URL clients use to reach this server, always ending with a slash.
    pub public_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `session_tokens` - Session token service
    /// - `connections` - Websocket connection registry
    /// - `producer` - Event producer
    /// - `avatar_storage` - Avatar storage backend
    /// - `public_url` - Public base URL of the server
    pub fn new(
        db: DatabaseConnection,
        session_tokens: SessionTokenService,
        connections: ConnectionRegistry,
        producer: Arc<dyn EventProducer>,
        avatar_storage: AvatarStorage,
        public_url: Url,
    ) -> Self {
        Self {
            db,
            session_tokens,
            connections,
            producer,
            avatar_storage,
            public_url,
        }
    }
}
