//! Registry of live websocket connections.
//!
//! Each connection is registered under the id of the entity it belongs to (a diarist id).
//! One entity may hold several connections, e.g. two open devices, and every frame emitted
//! to the entity is delivered to all of them.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use serde::Serialize;
use tokio::sync::{mpsc, RwLock};

use crate::server::error::{internal::InternalError, AppError};

/// Identifies a single registered connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHandle {
    pub entity_id: String,
    connection_id: u64,
}

/// JSON text frame sent to connected clients.
#[derive(Debug, Serialize)]
struct EventFrame<'a, T> {
    event: &'a str,
    data: &'a T,
}

type Connections = HashMap<String, HashMap<u64, mpsc::UnboundedSender<String>>>;

/// Process-local connection registry shared through application state.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<RwLock<Connections>>,
    next_connection_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection for an entity.
    ///
    /// # Returns
    /// - `ConnectionHandle` - Pass to `unregister` once the socket closes
    /// - `UnboundedReceiver<String>` - Serialized frames emitted to the entity
    pub async fn register(
        &self,
        entity_id: &str,
    ) -> (ConnectionHandle, mpsc::UnboundedReceiver<String>) {
        let connection_id = self.next_connection_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();

        self.connections
            .write()
            .await
            .entry(entity_id.to_string())
            .or_default()
            .insert(connection_id, sender);

        tracing::debug!("Registered connection {} for {}", connection_id, entity_id);

        (
            ConnectionHandle {
                entity_id: entity_id.to_string(),
                connection_id,
            },
            receiver,
        )
    }

    /// Removes a connection. Entities without connections left are dropped entirely.
    pub async fn unregister(&self, handle: &ConnectionHandle) {
        let mut connections = self.connections.write().await;

        if let Some(entity_connections) = connections.get_mut(&handle.entity_id) {
            entity_connections.remove(&handle.connection_id);
            if entity_connections.is_empty() {
                connections.remove(&handle.entity_id);
            }
        }

        tracing::debug!(
            "Unregistered connection {} for {}",
            handle.connection_id,
            handle.entity_id
        );
    }

    /// Whether the entity currently holds at least one connection.
    pub async fn has_connection(&self, entity_id: &str) -> bool {
        self.connections
            .read()
            .await
            .get(entity_id)
            .is_some_and(|entity_connections| !entity_connections.is_empty())
    }

    /// Sends an event to every connection of an entity.
    ///
    /// Connections whose receiving side is gone are pruned.
    ///
    /// # Arguments
    /// - `entity_id` - Id of the receiving entity
    /// - `event` - Event name, e.g. `schedule:canceled`
    /// - `data` - Payload serialized into the frame's `data` field
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of connections the frame was delivered to
    /// - `Err(AppError::InternalErr(EventSerialization))` - Payload could not be serialized
    pub async fn emit<T: Serialize>(
        &self,
        entity_id: &str,
        event: &str,
        data: &T,
    ) -> Result<usize, AppError> {
        let frame = serde_json::to_string(&EventFrame { event, data }).map_err(|source| {
            InternalError::EventSerialization {
                event: event.to_string(),
                source,
            }
        })?;

        let mut connections = self.connections.write().await;
        let Some(entity_connections) = connections.get_mut(entity_id) else {
            return Ok(0);
        };

        entity_connections.retain(|_, sender| sender.send(frame.clone()).is_ok());
        let delivered = entity_connections.len();

        if entity_connections.is_empty() {
            connections.remove(entity_id);
        }

        Ok(delivered)
    }
}
