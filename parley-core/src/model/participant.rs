use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};

/// One room occupant: connection identity plus the display name it
/// joined with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: PeerId,
    pub username: String,
}

impl Participant {
    pub fn new(id: PeerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
