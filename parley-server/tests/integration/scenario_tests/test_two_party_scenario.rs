use crate::integration::TestHarness;
use parley_core::{ClientMessage, Participant, ServerMessage};

fn join(room_id: &str, username: &str) -> ClientMessage {
    ClientMessage::JoinRoom {
        room_id: room_id.into(),
        username: username.into(),
    }
}

/// The full two-party lifecycle: alice and bob meet in "r1", charlie is
/// turned away, bob drops, alice leaves, the room vanishes.
#[tokio::test]
async fn two_party_room_lifecycle() {
    let harness = TestHarness::new();
    let mut alice = harness.session();
    let mut bob = harness.session();
    let mut charlie = harness.session();

    alice.handle_message(join("r1", "alice")).await;
    assert_eq!(
        harness.output.messages_for(&alice.peer_id()).await,
        vec![ServerMessage::CurrentUsers(vec![])]
    );

    bob.handle_message(join("r1", "bob")).await;
    assert_eq!(
        harness.output.messages_for(&bob.peer_id()).await,
        vec![ServerMessage::CurrentUsers(vec![Participant::new(
            alice.peer_id(),
            "alice"
        )])]
    );
    assert_eq!(
        harness.output.messages_for(&alice.peer_id()).await[1],
        ServerMessage::UserConnected(Participant::new(bob.peer_id(), "bob"))
    );

    charlie.handle_message(join("r1", "charlie")).await;
    assert_eq!(
        harness.output.messages_for(&charlie.peer_id()).await,
        vec![ServerMessage::RoomFull]
    );
    assert_eq!(harness.rooms.occupant_count("r1"), 2);

    bob.disconnect().await;
    assert_eq!(
        harness.output.messages_for(&alice.peer_id()).await[2],
        ServerMessage::UserDisconnected { id: bob.peer_id() }
    );
    assert_eq!(
        harness.rooms.other_participants("r1", &bob.peer_id()),
        vec![Participant::new(alice.peer_id(), "alice")]
    );

    alice.disconnect().await;
    assert!(!harness.rooms.contains_room("r1"));
}
