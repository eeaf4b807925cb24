use thiserror::Error;

/// Join rejected: the room already holds its two occupants. The room is
/// left untouched; the caller is notified and may retry elsewhere.
#[derive(Debug, Error)]
#[error("room '{room_id}' is full")]
pub struct RoomFullError {
    pub room_id: String,
}
