//! WebSocket event streaming for call session subscribers
//!
//! Each connection first receives a snapshot of the current registry state,
//! then a stream of `CallSessionEvent`s as they happen.

use super::calls_handler::AppState;
use crate::domain::call::entity::ActiveCall;
use crate::domain::shared::value_objects::CallId;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Initial frame sent to every new subscriber
#[derive(Debug, Serialize)]
struct SnapshotFrame {
    r#type: &'static str,
    calls: Vec<ActiveCall>,
    focused_call_id: Option<CallId>,
}

/// Upgrade handler for `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut events = state.registry.subscribe();

    // Late subscribers need the current state before the event stream
    let snapshot = state.registry.snapshot();
    let frame = SnapshotFrame {
        r#type: "snapshot",
        calls: snapshot.calls,
        focused_call_id: snapshot.focused_call_id,
    };
    match serde_json::to_string(&frame) {
        Ok(text) => {
            if sender.send(Message::Text(text)).await.is_err() {
                debug!("WebSocket client went away before snapshot");
                return;
            }
        }
        Err(e) => {
            warn!("Failed to serialize snapshot frame: {}", e);
            return;
        }
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(text) => {
                        if sender.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Failed to serialize event: {}", e),
                },
                // Slow consumer missed events; it can refetch the snapshot
                Err(RecvError::Lagged(skipped)) => {
                    warn!("WebSocket subscriber lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            if let Message::Close(_) = message {
                break;
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }

    debug!("WebSocket subscriber disconnected");
}
