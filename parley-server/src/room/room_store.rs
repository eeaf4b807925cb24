use crate::room::RoomFullError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parley_core::{Participant, PeerId};
use std::sync::Arc;
use tracing::info;

/// A room holds at most two occupants negotiating a direct peer
/// connection.
pub const ROOM_CAPACITY: usize = 2;

/// Process-wide map from room identifier to its occupant list, in join
/// order. Rooms are created lazily on first join and dropped the moment
/// they empty, so an entry exists iff the room has at least one
/// occupant.
#[derive(Clone, Default)]
pub struct RoomStore {
    rooms: Arc<DashMap<String, Vec<Participant>>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `participant` into `room_id`, creating the room if needed.
    /// Returns the occupants that were already present (never including
    /// the joiner), or `RoomFullError` without mutating the room.
    ///
    /// The entry guard holds the key's lock across the capacity check
    /// and the append, so two concurrent joins cannot both observe one
    /// occupant and both be admitted.
    pub fn join(
        &self,
        room_id: &str,
        participant: Participant,
    ) -> Result<Vec<Participant>, RoomFullError> {
        match self.rooms.entry(room_id.to_owned()) {
            Entry::Occupied(mut entry) => {
                let occupants = entry.get_mut();
                if occupants.len() >= ROOM_CAPACITY {
                    return Err(RoomFullError {
                        room_id: room_id.to_owned(),
                    });
                }
                let existing = occupants.clone();
                occupants.push(participant);
                Ok(existing)
            }
            Entry::Vacant(entry) => {
                info!("Creating new room: {}", room_id);
                entry.insert(vec![participant]);
                Ok(Vec::new())
            }
        }
    }

    /// Remove `peer_id` from `room_id`, deleting the room if it empties.
    /// Removing an absent identity (or from an absent room) is a no-op.
    /// Returns whether a removal actually happened.
    pub fn leave(&self, room_id: &str, peer_id: &PeerId) -> bool {
        match self.rooms.entry(room_id.to_owned()) {
            Entry::Occupied(mut entry) => {
                let occupants = entry.get_mut();
                let before = occupants.len();
                occupants.retain(|p| p.id != *peer_id);
                let removed = occupants.len() < before;
                if occupants.is_empty() {
                    info!("Room emptied, dropping it: {}", room_id);
                    entry.remove();
                }
                removed
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Occupants of `room_id` other than `peer_id`, in join order.
    /// An absent room yields an empty list.
    pub fn other_participants(&self, room_id: &str, peer_id: &PeerId) -> Vec<Participant> {
        self.rooms
            .get(room_id)
            .map(|occupants| {
                occupants
                    .iter()
                    .filter(|p| p.id != *peer_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains_room(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn occupant_count(&self, room_id: &str) -> usize {
        self.rooms.get(room_id).map(|o| o.len()).unwrap_or(0)
    }
}
