use crate::room::RoomStore;
use crate::signaling::SignalingOutput;
use parley_core::{PeerId, ServerMessage};
use std::sync::Arc;

/// Fans a message out to the other occupant(s) of a room. Cheap to
/// clone; shares the store and output sink with the rest of the server.
#[derive(Clone)]
pub struct RoomRelay {
    rooms: RoomStore,
    output: Arc<dyn SignalingOutput>,
}

impl RoomRelay {
    pub fn new(rooms: RoomStore, output: Arc<dyn SignalingOutput>) -> Self {
        Self { rooms, output }
    }

    /// Targeted delivery to a single peer.
    pub async fn send_to(&self, peer_id: PeerId, msg: ServerMessage) {
        self.output.send(peer_id, msg).await;
    }

    /// Deliver to every current occupant of `room_id` except `sender`.
    /// A room with no other occupants is a silent no-op: the sender may
    /// be negotiating before its peer has joined.
    pub async fn broadcast_from(&self, room_id: &str, sender: &PeerId, msg: ServerMessage) {
        for peer in self.rooms.other_participants(room_id, sender) {
            self.output.send(peer.id, msg.clone()).await;
        }
    }
}
