use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use parley_core::{PeerId, ServerMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    peers: DashMap<PeerId, mpsc::UnboundedSender<Message>>,
}

/// Connection registry: one entry per live socket, keyed by the
/// identity minted at registration time.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
            }),
        }
    }

    /// Assign a fresh identity to a new connection and keep its
    /// outbound channel. Identities are never chosen by clients.
    pub fn register(&self, tx: mpsc::UnboundedSender<Message>) -> PeerId {
        let peer_id = PeerId::new();
        self.inner.peers.insert(peer_id, tx);
        peer_id
    }

    pub fn unregister(&self, peer_id: &PeerId) {
        self.inner.peers.remove(peer_id);
    }

    pub fn connected_peers(&self) -> usize {
        self.inner.peers.len()
    }

    fn send_signal(&self, peer_id: PeerId, msg: &ServerMessage) {
        if let Some(peer) = self.inner.peers.get(&peer_id) {
            match serde_json::to_string(msg) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", peer_id, e);
                    }
                }
                Err(e) => error!("Failed to serialize signal message: {}", e),
            }
        } else {
            // The peer may have disconnected while a signal for it was
            // still in flight.
            warn!("Attempted to send signal to disconnected user {}", peer_id);
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, peer_id: PeerId, msg: ServerMessage) {
        self.send_signal(peer_id, &msg);
    }
}
