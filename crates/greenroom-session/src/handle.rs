//! The consumed network-session layer.
//!
//! Connection establishment, peer discovery, property storage, and change
//! propagation all live behind [`SessionHandle`]. This core only reads
//! the enumeration and requests single-key writes on the local peer.

use serde_json::Value;

use greenroom_roster::{Peer, PeerId};

/// Handle to the external network-session layer.
///
/// Implementations own retry and acknowledgment for writes; from this
/// core's perspective [`set_local_property`](Self::set_local_property) is
/// fire-and-forget, never blocks, and never fails observably.
pub trait SessionHandle {
    /// The layer's current, eventually-consistent peer enumeration.
    /// Order is unspecified; the roster sorts.
    fn enumerate_peers(&self) -> Vec<Peer>;

    /// Request a single-key property write on the local peer.
    fn set_local_property(&mut self, key: &str, value: Value);

    /// Which peer is local — supplied by the layer, never computed here.
    fn local_peer_id(&self) -> PeerId;
}

/// In-memory [`SessionHandle`] with instant propagation.
///
/// Stands in for the real network layer in tests: property writes land
/// immediately, and remote peers' state is mutated directly to simulate
/// propagated changes and roster churn.
#[derive(Debug, Clone)]
pub struct MockSession {
    local_id: PeerId,
    peers: Vec<Peer>,
}

impl MockSession {
    pub fn new(local_id: PeerId) -> Self {
        Self {
            local_id,
            peers: Vec::new(),
        }
    }

    /// Add a peer to the enumeration, replacing any with the same id.
    pub fn add_peer(&mut self, peer: Peer) {
        self.remove_peer(peer.id);
        self.peers.push(peer);
    }

    /// Drop a peer from the enumeration (disconnect).
    pub fn remove_peer(&mut self, id: PeerId) {
        self.peers.retain(|p| p.id != id);
    }

    /// Simulate a remote peer's readiness toggle having propagated.
    pub fn set_peer_ready(&mut self, id: PeerId, ready: bool) {
        if let Some(peer) = self.peers.iter_mut().find(|p| p.id == id) {
            peer.set_ready(ready);
        }
    }
}

impl SessionHandle for MockSession {
    fn enumerate_peers(&self) -> Vec<Peer> {
        self.peers.clone()
    }

    fn set_local_property(&mut self, key: &str, value: Value) {
        if let Some(peer) = self.peers.iter_mut().find(|p| p.id == self.local_id) {
            peer.properties.insert(key.to_string(), value);
        }
        // A write issued before the local peer appears in the enumeration
        // is dropped, like a write racing a reconnect. Fire-and-forget.
    }

    fn local_peer_id(&self) -> PeerId {
        self.local_id
    }
}
