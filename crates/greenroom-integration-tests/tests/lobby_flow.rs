//! End-to-end lobby scenarios: join, declare, observe, render, start.
//!
//! The in-memory [`MockSession`] stands in for the network layer
//! (instant propagation) and [`RecordingSurface`] for the widget toolkit.

use greenroom_consensus::GateStatus;
use greenroom_prefs::{PreferenceCache, DEFAULT_COMPANION_NAME};
use greenroom_roster::{Peer, PeerId};
use greenroom_session::{LobbySession, MockSession};
use greenroom_vis::{ItemTemplate, ListReconciler, RecordingSurface};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reconciler() -> ListReconciler<RecordingSurface> {
    ListReconciler::new(RecordingSurface::new(), ItemTemplate::new("roster-row"))
}

#[test]
fn lobby_fills_readies_up_and_starts() {
    init_logging();

    // Ann hosts; the enumeration reports peers in arrival order.
    let mut mock = MockSession::new(PeerId(1));
    mock.add_peer(Peer::new(PeerId(1), "Ann").with_host());
    let mut session = LobbySession::new(mock);
    let mut list = reconciler();

    // Alone in the lobby: quorum unmet, even once ready.
    session.declare_ready(true);
    assert!(!session.may_start());
    assert_eq!(
        session.gate_status(),
        GateStatus::AwaitingPeers {
            present: 1,
            needed: 2
        }
    );

    // Bob joins, not yet ready.
    session.handle_mut().add_peer(Peer::new(PeerId(2), "Bob"));
    assert_eq!(
        session.gate_status(),
        GateStatus::AwaitingReady {
            pending: vec![PeerId(2)]
        }
    );

    list.render(&session.snapshot());
    assert_eq!(
        list.surface().unwrap().labels(),
        vec!["Ann (Host) (Ready)", "Bob"]
    );

    // Bob's toggle propagates.
    session.handle_mut().set_peer_ready(PeerId(2), true);
    assert!(session.may_start());

    list.render(&session.snapshot());
    assert_eq!(
        list.surface().unwrap().labels(),
        vec!["Ann (Host) (Ready)", "Bob (Ready)"]
    );
}

#[test]
fn roster_order_and_labels_match_the_observed_scenario() {
    init_logging();

    // Enumeration order deliberately disagrees with id order.
    let mut mock = MockSession::new(PeerId(2));
    mock.add_peer(Peer::new(PeerId(2), "Bob").with_ready(true));
    mock.add_peer(Peer::new(PeerId(1), "Ann").with_host().with_ready(false));
    let session = LobbySession::new(mock);

    let snapshot = session.snapshot();
    let names: Vec<&str> = snapshot.iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    // Ann is not ready, so no start.
    assert!(!session.may_start());

    let mut list = reconciler();
    list.render(&snapshot);
    assert_eq!(
        list.surface().unwrap().labels(),
        vec!["Ann (Host)", "Bob (Ready)"]
    );
}

#[test]
fn departures_and_toggles_flicker_the_gate() {
    init_logging();

    let mut mock = MockSession::new(PeerId(1));
    mock.add_peer(Peer::new(PeerId(1), "Ann").with_ready(true));
    mock.add_peer(Peer::new(PeerId(2), "Bob").with_ready(true));
    mock.add_peer(Peer::new(PeerId(3), "Cid").with_ready(true));
    let mut session = LobbySession::new(mock);

    assert!(session.may_start());

    // Cid backs out: the aggregate is recomputed, not latched.
    session.handle_mut().set_peer_ready(PeerId(3), false);
    assert!(!session.may_start());

    // Cid disconnects entirely; the remaining pair still satisfies quorum.
    session.handle_mut().remove_peer(PeerId(3));
    assert!(session.may_start());

    // Bob leaves too: back below quorum.
    session.handle_mut().remove_peer(PeerId(2));
    assert!(!session.may_start());
}

#[test]
fn rendered_list_tracks_churn_idempotently() {
    init_logging();

    let mut mock = MockSession::new(PeerId(1));
    mock.add_peer(Peer::new(PeerId(1), "Ann").with_host());
    mock.add_peer(Peer::new(PeerId(2), "Bob"));
    let mut session = LobbySession::new(mock);
    let mut list = reconciler();

    list.render(&session.snapshot());
    list.render(&session.snapshot());
    assert_eq!(list.surface().unwrap().labels(), vec!["Ann (Host)", "Bob"]);

    session.handle_mut().remove_peer(PeerId(2));
    list.render(&session.snapshot());
    assert_eq!(list.surface().unwrap().labels(), vec!["Ann (Host)"]);

    session.handle_mut().add_peer(Peer::new(PeerId(5), "Eve"));
    session.handle_mut().add_peer(Peer::new(PeerId(3), "Dan"));
    list.render(&session.snapshot());
    assert_eq!(
        list.surface().unwrap().labels(),
        vec!["Ann (Host)", "Dan", "Eve"]
    );
}

#[test]
fn companion_name_stays_local() {
    init_logging();

    let mut mock = MockSession::new(PeerId(1));
    mock.add_peer(Peer::new(PeerId(1), "Ann"));
    mock.add_peer(Peer::new(PeerId(2), "Bob"));
    let session = LobbySession::new(mock);

    let mut prefs = PreferenceCache::companion_name();
    assert_eq!(prefs.get(), DEFAULT_COMPANION_NAME);
    prefs.set("Fang");
    assert_eq!(prefs.get(), "Fang");

    // The preference never rides the property bag.
    for peer in session.snapshot().iter() {
        assert!(peer.properties.is_empty());
    }
}
