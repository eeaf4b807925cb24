use crate::room::RoomStore;
use crate::session::SessionState;
use crate::signaling::RoomRelay;
use parley_core::{ClientMessage, Participant, PeerId, ServerMessage};
use tracing::{info, warn};
use uuid::Uuid;

/// Protocol state machine for one connection.
///
/// Holds only the identity and the bound room key; occupant state lives
/// in the shared [`RoomStore`], so per-connection and room state cannot
/// diverge.
pub struct SignalingSession {
    peer_id: PeerId,
    state: SessionState,
    rooms: RoomStore,
    relay: RoomRelay,
}

impl SignalingSession {
    pub fn new(peer_id: PeerId, rooms: RoomStore, relay: RoomRelay) -> Self {
        Self {
            peer_id,
            state: SessionState::Connected,
            rooms,
            relay,
        }
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub async fn handle_message(&mut self, msg: ClientMessage) {
        match msg {
            ClientMessage::JoinRoom { room_id, username } => self.join(room_id, username).await,
            ClientMessage::UserLeave => self.leave().await,
            ClientMessage::Offer { room_id, payload } => {
                self.relay_to_peers(&room_id, ServerMessage::Offer(payload))
                    .await;
            }
            ClientMessage::Answer { room_id, payload } => {
                self.relay_to_peers(&room_id, ServerMessage::Answer(payload))
                    .await;
            }
            ClientMessage::IceCandidate { room_id, payload } => {
                self.relay_to_peers(&room_id, ServerMessage::IceCandidate(payload))
                    .await;
            }
            ClientMessage::GenerateUuid => self.generate_uuid().await,
        }
    }

    /// Transport-level disconnect. Safe to call on every exit path of
    /// the socket task; the terminal state makes a second call a no-op.
    pub async fn disconnect(&mut self) {
        self.close().await;
    }

    async fn join(&mut self, room_id: String, username: String) {
        match &self.state {
            SessionState::Connected => {}
            SessionState::Joined { room_id: current } => {
                // One active room per connection.
                warn!(
                    "Peer {} tried to join '{}' while already in '{}'",
                    self.peer_id, room_id, current
                );
                return;
            }
            SessionState::Closed => return,
        }

        let participant = Participant::new(self.peer_id, username);
        match self.rooms.join(&room_id, participant.clone()) {
            Ok(existing) => {
                info!(
                    "Peer {} joined room '{}' as '{}'",
                    self.peer_id, room_id, participant.username
                );
                self.relay
                    .send_to(self.peer_id, ServerMessage::CurrentUsers(existing))
                    .await;
                self.relay
                    .broadcast_from(
                        &room_id,
                        &self.peer_id,
                        ServerMessage::UserConnected(participant),
                    )
                    .await;
                self.state = SessionState::Joined { room_id };
            }
            Err(e) => {
                info!("Join rejected for peer {}: {}", self.peer_id, e);
                self.relay.send_to(self.peer_id, ServerMessage::RoomFull).await;
            }
        }
    }

    /// Forward a negotiation message to the other occupant(s) of the
    /// bound room. Before a join this is a documented no-op: the message
    /// is dropped, the session is unaffected.
    async fn relay_to_peers(&self, requested_room: &str, msg: ServerMessage) {
        let SessionState::Joined { room_id } = &self.state else {
            warn!(
                "Peer {} sent a signaling message without being in a room",
                self.peer_id
            );
            return;
        };

        // The wire format carries a room id for compatibility, but
        // routing always uses the room this session is bound to.
        if requested_room != room_id {
            warn!(
                "Peer {} addressed room '{}' but is bound to '{}'",
                self.peer_id, requested_room, room_id
            );
        }

        self.relay.broadcast_from(room_id, &self.peer_id, msg).await;
    }

    /// Explicit leave. Only meaningful while in a room: a `user-leave`
    /// before any join is a protocol violation and must not consume the
    /// connection.
    async fn leave(&mut self) {
        if !matches!(self.state, SessionState::Joined { .. }) {
            warn!(
                "Peer {} sent user-leave without being in a room",
                self.peer_id
            );
            return;
        }
        self.close().await;
    }

    async fn close(&mut self) {
        let state = std::mem::replace(&mut self.state, SessionState::Closed);
        let SessionState::Joined { room_id } = state else {
            return;
        };

        if self.rooms.leave(&room_id, &self.peer_id) {
            info!("Peer {} left room '{}'", self.peer_id, room_id);
            self.relay
                .broadcast_from(
                    &room_id,
                    &self.peer_id,
                    ServerMessage::UserDisconnected { id: self.peer_id },
                )
                .await;
        }
    }

    /// Stateless capability, independent of room membership: hand the
    /// requesting connection a fresh unique token. Closed sessions no
    /// longer have a live connection to answer on.
    async fn generate_uuid(&self) {
        if matches!(self.state, SessionState::Closed) {
            return;
        }
        self.relay
            .send_to(self.peer_id, ServerMessage::UuidGenerated(Uuid::new_v4()))
            .await;
    }
}
