//! Diagnostic gate evaluation.
//!
//! [`all_ready_with_min`](crate::all_ready_with_min) answers yes/no;
//! [`evaluate`] additionally says what the lobby is waiting on, for log
//! lines and waiting-room UI. Both are pure functions of one snapshot and
//! always agree.

use greenroom_roster::{PeerId, RosterSnapshot};

use crate::quorum::{meets_quorum, pending_peers};

/// What the start gate is currently waiting on, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStatus {
    /// Quorum met and every peer is ready — the match may start.
    Start,

    /// Not enough peers in the roster yet.
    AwaitingPeers { present: usize, needed: usize },

    /// Quorum met, but some peers have not declared ready.
    AwaitingReady { pending: Vec<PeerId> },
}

impl GateStatus {
    /// Whether this status permits a match start.
    ///
    /// Agrees exactly with
    /// [`all_ready_with_min`](crate::all_ready_with_min) for the same
    /// snapshot and minimum.
    pub fn may_start(&self) -> bool {
        matches!(self, GateStatus::Start)
    }
}

/// Evaluate the start gate against a snapshot.
pub fn evaluate(snapshot: &RosterSnapshot, min_peers: usize) -> GateStatus {
    if !meets_quorum(snapshot.len(), min_peers) {
        return GateStatus::AwaitingPeers {
            present: snapshot.len(),
            needed: min_peers,
        };
    }

    let pending = pending_peers(snapshot);
    if pending.is_empty() {
        GateStatus::Start
    } else {
        GateStatus::AwaitingReady { pending }
    }
}
