use crate::integration::init_tracing;
use parley_core::{Participant, PeerId};
use parley_server::RoomStore;

/// No interleaving of concurrent joins may push a room past two
/// occupants.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_never_exceed_capacity() {
    init_tracing();

    for round in 0..50 {
        let store = RoomStore::new();
        let room_id = format!("contended-{round}");

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            let room_id = room_id.clone();
            handles.push(tokio::spawn(async move {
                let me = Participant::new(PeerId::new(), format!("user-{i}"));
                store.join(&room_id, me).is_ok()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 2);
        assert_eq!(store.occupant_count(&room_id), 2);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_and_leaves_leave_no_empty_rooms() {
    init_tracing();

    let store = RoomStore::new();

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let room_id = format!("churn-{}", i % 4);
            let me = Participant::new(PeerId::new(), format!("user-{i}"));
            if store.join(&room_id, me.clone()).is_ok() {
                store.leave(&room_id, &me.id);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Everyone who got in also left, so no room may linger.
    for i in 0..4 {
        let room_id = format!("churn-{i}");
        assert!(
            !store.contains_room(&room_id),
            "room {room_id} leaked with {} occupant(s)",
            store.occupant_count(&room_id)
        );
    }
}
