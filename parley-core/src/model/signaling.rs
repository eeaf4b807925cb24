use crate::model::participant::Participant;
use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Messages a client may send over the signaling socket.
///
/// Negotiation payloads (SDP offers/answers, ICE candidates) are opaque
/// JSON blobs; the server forwards them without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d")]
pub enum ClientMessage {
    #[serde(rename = "join-room", rename_all = "camelCase")]
    JoinRoom { room_id: String, username: String },

    #[serde(rename = "user-leave")]
    UserLeave,

    #[serde(rename = "offer", rename_all = "camelCase")]
    Offer { room_id: String, payload: Value },

    #[serde(rename = "answer", rename_all = "camelCase")]
    Answer { room_id: String, payload: Value },

    #[serde(rename = "ice-candidate", rename_all = "camelCase")]
    IceCandidate { room_id: String, payload: Value },

    #[serde(rename = "generateUUID")]
    GenerateUuid,
}

/// Messages the server pushes to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d")]
pub enum ServerMessage {
    /// Occupants already present in the room, sent to a joiner only.
    /// Never includes the joiner itself.
    #[serde(rename = "current-users")]
    CurrentUsers(Vec<Participant>),

    /// A new occupant arrived, sent to the other occupant(s).
    #[serde(rename = "user-connected")]
    UserConnected(Participant),

    /// An occupant left or its transport dropped.
    #[serde(rename = "user-disconnected")]
    UserDisconnected { id: PeerId },

    /// Join rejected: the room already holds two occupants.
    #[serde(rename = "room-full")]
    RoomFull,

    #[serde(rename = "offer")]
    Offer(Value),

    #[serde(rename = "answer")]
    Answer(Value),

    #[serde(rename = "ice-candidate")]
    IceCandidate(Value),

    #[serde(rename = "uuidGenerated")]
    UuidGenerated(Uuid),
}
