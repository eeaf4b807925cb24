/// Lifecycle of one signaling connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Transport is up, no room bound yet.
    Connected,
    /// Bound to a room; signaling messages are forwarded to its other
    /// occupant(s).
    Joined { room_id: String },
    /// Terminal: the peer left or its transport dropped. Cleanup has
    /// already run.
    Closed,
}
