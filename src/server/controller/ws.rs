//! Realtime order events over WebSocket.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::{auth::AuthError, tenant::TenantError, AppError},
    middleware::auth::bearer_token,
    service::notifier::Subscription,
    state::AppState,
};

pub static WS_TAG: &str = "realtime";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct WsQuery {
    /// Bearer token, for clients that cannot set headers on the upgrade request.
    pub token: Option<String>,
}

/// Upgrades to a WebSocket subscribed to the caller's company room.
///
/// The token is read from the `Authorization` header or the `token` query parameter.
/// Order events for the company are forwarded as `{event, data}` text frames until either
/// side closes.
///
/// # Returns
/// - `101 Switching Protocols` - Subscribed
/// - `400 Bad Request` - Token carries no company
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/ws",
    tag = WS_TAG,
    params(WsQuery),
    responses(
        (status = 101, description = "Switched to WebSocket; receives `{event, data}` messages for the caller's company"),
        (status = 400, description = "Token carries no company"),
        (status = 401, description = "Missing, invalid or expired token")
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let token = query
        .token
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| bearer_token(&headers))
        .ok_or(AuthError::MissingToken)?;

    // Sockets answer 401 for any unusable token
    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!("Rejected socket token: {}", e);
        AuthError::MissingToken
    })?;
    let company_id = claims
        .company_id
        .ok_or(TenantError::MissingCompanyContext)?;

    let subscription = state.notifier.subscribe(company_id);
    tracing::info!(
        "User {} joining room {}",
        claims.id,
        subscription.room()
    );

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, subscription)))
}

async fn handle_socket(mut socket: WebSocket, mut subscription: Subscription) {
    let room = subscription.room();

    loop {
        tokio::select! {
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!("WebSocket error in {}: {}", room, e);
                        break;
                    }
                    _ => {}
                }
            }
            event = subscription.next() => {
                let Some(event) = event else {
                    break;
                };
                if socket.send(Message::Text(event.to_message().into())).await.is_err() {
                    break;
                }
            }
        }
    }

    tracing::info!("WebSocket left room {}", room);
}
