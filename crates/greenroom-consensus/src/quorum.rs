//! The quorum rule and unanimous-readiness aggregation.
//!
//! Missing `"IsReady"` entries read as not-ready (the roster crate's
//! interpretation invariant), so a quorum failure and an unpropagated
//! toggle are indistinguishable here — both simply yield "no start yet".

use greenroom_roster::{PeerId, RosterSnapshot};

/// Minimum roster size before unanimous readiness allows a start.
///
/// A lone peer is never considered ready-to-start; this prevents a
/// degenerate single-player match start.
pub const MIN_PEERS_TO_START: usize = 2;

/// Check whether a roster size meets a quorum minimum.
pub const fn meets_quorum(present: usize, min_peers: usize) -> bool {
    present >= min_peers
}

/// Unanimous readiness under an explicit quorum minimum.
///
/// True iff the roster has at least `min_peers` peers and every one of
/// them is declared ready.
pub fn all_ready_with_min(snapshot: &RosterSnapshot, min_peers: usize) -> bool {
    meets_quorum(snapshot.len(), min_peers) && snapshot.iter().all(|p| p.is_ready())
}

/// Unanimous readiness under the default quorum rule.
///
/// Quorum-not-met is not an error; the answer is simply `false`.
pub fn all_ready(snapshot: &RosterSnapshot) -> bool {
    all_ready_with_min(snapshot, MIN_PEERS_TO_START)
}

/// Ids of peers that have not declared ready, in roster order.
pub fn pending_peers(snapshot: &RosterSnapshot) -> Vec<PeerId> {
    snapshot
        .iter()
        .filter(|p| !p.is_ready())
        .map(|p| p.id)
        .collect()
}
