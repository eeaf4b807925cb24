use async_trait::async_trait;
use parley_core::{PeerId, ServerMessage};

/// Outbound side of the signaling transport. Sessions and the relay
/// only see this trait, so tests can capture traffic without a socket.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver a message to one connected peer. Delivery to a peer that
    /// has already disconnected is a no-op.
    async fn send(&self, peer_id: PeerId, msg: ServerMessage);
}
