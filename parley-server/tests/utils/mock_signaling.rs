use async_trait::async_trait;
use parley_core::{PeerId, ServerMessage};
use parley_server::SignalingOutput;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock SignalingOutput that captures all outgoing messages for
/// verification.
#[derive(Clone, Default)]
pub struct MockSignalingOutput {
    sent: Arc<Mutex<Vec<(PeerId, ServerMessage)>>>,
}

impl MockSignalingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages delivered to a specific peer, in delivery order.
    pub async fn messages_for(&self, peer_id: &PeerId) -> Vec<ServerMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(id, _)| id == peer_id)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    /// Every captured (recipient, message) pair.
    pub async fn all_messages(&self) -> Vec<(PeerId, ServerMessage)> {
        self.sent.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

#[async_trait]
impl SignalingOutput for MockSignalingOutput {
    async fn send(&self, peer_id: PeerId, msg: ServerMessage) {
        tracing::debug!("[MockSignaling] send to {}: {:?}", peer_id, msg);
        self.sent.lock().await.push((peer_id, msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_messages_per_peer() {
        let output = MockSignalingOutput::new();
        let a = PeerId::new();
        let b = PeerId::new();

        output.send(a, ServerMessage::RoomFull).await;
        output
            .send(b, ServerMessage::UserDisconnected { id: a })
            .await;

        assert_eq!(output.messages_for(&a).await, vec![ServerMessage::RoomFull]);
        assert_eq!(output.all_messages().await.len(), 2);
    }
}
