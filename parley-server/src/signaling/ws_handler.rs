use crate::AppState;
use crate::session::SignalingSession;
use crate::signaling::RoomRelay;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use parley_core::ClientMessage;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let peer_id = state.signaling.register(tx);
    info!("New WebSocket connection: {}", peer_id);

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let relay = RoomRelay::new(state.rooms.clone(), Arc::new(state.signaling.clone()));
    let mut session = SignalingSession::new(peer_id, state.rooms.clone(), relay);

    // The inbound loop runs inline rather than in its own task so the
    // cleanup below is reached on every exit path, clean close or not.
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => session.handle_message(client_msg).await,
                Err(e) => warn!("Invalid message from {}: {:?}", peer_id, e),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    session.disconnect().await;
    state.signaling.unregister(&peer_id);
    send_task.abort();

    info!("WebSocket disconnected: {}", peer_id);
}
