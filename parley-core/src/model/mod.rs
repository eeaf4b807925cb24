mod participant;
mod peer;
mod signaling;

pub use participant::Participant;
pub use peer::PeerId;
pub use signaling::{ClientMessage, ServerMessage};
