use axum::{
    extract::{
        ws::{rejection::WebSocketUpgradeRejection, Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::{header::AUTHORIZATION, HeaderMap},
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::diarist::Diarist,
        realtime::ConnectionRegistry,
        state::AppState,
    },
};

/// Tag for grouping realtime endpoints in OpenAPI documentation
pub static REALTIME_TAG: &str = "realtime";

#[derive(Deserialize, IntoParams)]
pub struct ConnectParams {
    /// Session token, for clients that cannot set headers on websocket requests.
    pub token: Option<String>,
}

/// Open a live event connection for the authenticated diarist.
///
/// The token is read from the `Authorization` header, or from the `token` query parameter
/// when the header is absent. Events arrive as JSON text frames
/// `{ "event": "...", "data": ... }`.
///
/// # Returns
/// - `101 Switching Protocols` - Connection upgraded
/// - `401 Unauthorized` - Not authenticated as a diarist
#[utoipa::path(
    get,
    path = "/ws",
    tag = REALTIME_TAG,
    params(ConnectParams),
    responses(
        (status = 101, description = "Switched to websocket"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    Query(params): Query<ConnectParams>,
    headers: HeaderMap,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&state.db, &state.session_tokens);

    let diarist: Diarist = match (headers.get(AUTHORIZATION), params.token.as_deref()) {
        (Some(value), _) => {
            let value = value
                .to_str()
                .map_err(|_| AuthError::MalformedAuthorizationHeader)?;
            guard.require(Some(value)).await?
        }
        (None, Some(token)) => guard.require_token(token).await?,
        (None, None) => return Err(AuthError::MissingAuthorizationHeader.into()),
    };

    // Authentication failures take precedence over upgrade failures
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    let connections = state.connections.clone();

    Ok(ws
        .on_upgrade(move |socket| forward_events(socket, connections, diarist.id))
        .into_response())
}

/// Forwards frames emitted to the diarist until either side closes.
async fn forward_events(socket: WebSocket, connections: ConnectionRegistry, diarist_id: String) {
    let (handle, mut events) = connections.register(&diarist_id).await;
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            frame = events.recv() => {
                let Some(frame) = frame else { break };
                if sender.send(Message::Text(frame.into())).await.is_err() {
                    break;
                }
            }
            message = receiver.next() => {
                match message {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Clients only listen; anything else they send is ignored
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    connections.unregister(&handle).await;
}
