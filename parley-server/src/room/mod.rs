mod error;
mod room_store;

pub use error::*;
pub use room_store::*;
