mod session_state;
mod signaling_session;

pub use session_state::*;
pub use signaling_session::*;
