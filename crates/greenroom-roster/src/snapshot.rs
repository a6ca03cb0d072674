//! Ordered roster snapshots.

use std::fmt;

use serde::Serialize;

use crate::peer::{Peer, PeerId};

/// An immutable, deterministically ordered view of the current peers.
///
/// Ordered ascending by [`PeerId`]; ids are session-unique so the order is
/// total. Rebuilt from the live enumeration on every read — a snapshot is
/// never cached across network-state changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterSnapshot {
    peers: Vec<Peer>,
}

impl RosterSnapshot {
    /// Build a snapshot from peers in any enumeration order.
    ///
    /// Tolerates an empty peer list.
    pub fn from_peers(mut peers: Vec<Peer>) -> Self {
        peers.sort_by_key(|p| p.id);
        Self { peers }
    }

    /// Peers in ascending id order.
    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    /// Iterate peers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.iter()
    }

    /// Number of peers present.
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Check if no peers are present.
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Look up a peer by id.
    pub fn get(&self, id: PeerId) -> Option<&Peer> {
        // Ordered by id, so binary search applies.
        self.peers
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.peers[i])
    }

    /// The session host, if present in this snapshot.
    ///
    /// The host flag is externally enforced to be unique, so the first
    /// match is the only match.
    pub fn host(&self) -> Option<&Peer> {
        self.peers.iter().find(|p| p.is_host)
    }

    /// Count of peers currently declared ready.
    pub fn ready_count(&self) -> usize {
        self.peers.iter().filter(|p| p.is_ready()).count()
    }

    /// Summary statistics for log lines and diagnostics.
    pub fn stats(&self) -> RosterStats {
        RosterStats {
            total: self.peers.len(),
            ready: self.ready_count(),
            has_host: self.host().is_some(),
        }
    }
}

/// Statistics about a roster snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub ready: usize,
    pub has_host: bool,
}

impl fmt::Display for RosterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "roster: {} peers, {} ready, host {}",
            self.total,
            self.ready,
            if self.has_host { "present" } else { "absent" }
        )
    }
}
