//! The session-scoped lobby object.

use serde_json::Value;
use tracing::{debug, trace};

use greenroom_consensus::{all_ready_with_min, evaluate, GateStatus, MIN_PEERS_TO_START};
use greenroom_roster::{Peer, RosterSnapshot, PROP_IS_READY};

use crate::error::{Error, Result};
use crate::handle::SessionHandle;

/// Quorum configuration for a lobby session.
///
/// The aggregation logic is parameterized on the minimum
/// ([`all_ready_with_min`]); this struct is the one place the value is
/// chosen, so changing the rule never touches the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumConfig {
    /// Minimum roster size before unanimous readiness allows a start.
    pub min_peers: usize,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            min_peers: MIN_PEERS_TO_START,
        }
    }
}

impl QuorumConfig {
    /// Reject minima that would re-enable a degenerate single-player
    /// start.
    pub fn validate(&self) -> Result<()> {
        if self.min_peers < MIN_PEERS_TO_START {
            return Err(Error::InvalidConfig {
                min_peers: self.min_peers,
                minimum: MIN_PEERS_TO_START,
            });
        }
        Ok(())
    }
}

/// A lobby session over an external network-session handle.
///
/// Owns the handle and the quorum config — session-scoped state, not
/// process-wide singletons. All operations are synchronous, return
/// immediately, and recompute from the live enumeration; nothing is
/// cached across calls.
#[derive(Debug)]
pub struct LobbySession<H> {
    handle: H,
    config: QuorumConfig,
}

impl<H: SessionHandle> LobbySession<H> {
    /// Session with the default quorum rule.
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            config: QuorumConfig::default(),
        }
    }

    /// Session with an explicit quorum config.
    pub fn with_config(handle: H, config: QuorumConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { handle, config })
    }

    /// Pull a fresh ordered snapshot from the network layer.
    ///
    /// Never fails; an empty enumeration yields an empty snapshot.
    pub fn snapshot(&self) -> RosterSnapshot {
        let snapshot = RosterSnapshot::from_peers(self.handle.enumerate_peers());
        trace!(stats = %snapshot.stats(), "pulled roster snapshot");
        snapshot
    }

    /// Declare the local peer's readiness.
    ///
    /// Delegates to the handle's property write; fire-and-forget. The
    /// toggle becomes visible to peers (including this one) only once
    /// the layer propagates it back through the enumeration.
    pub fn declare_ready(&mut self, ready: bool) {
        debug!(ready, "declaring local readiness");
        self.handle
            .set_local_property(PROP_IS_READY, Value::Bool(ready));
    }

    /// May the match start, per the current snapshot?
    ///
    /// An approximation that can flicker between observations — peers
    /// observe each other's toggles at unbounded skew — so callers
    /// re-evaluate on every relevant event rather than latching it.
    pub fn may_start(&self) -> bool {
        all_ready_with_min(&self.snapshot(), self.config.min_peers)
    }

    /// What the gate is waiting on, for log lines and waiting-room UI.
    pub fn gate_status(&self) -> GateStatus {
        let status = evaluate(&self.snapshot(), self.config.min_peers);
        trace!(?status, "evaluated start gate");
        status
    }

    /// The local peer as the layer currently reports it.
    ///
    /// Errors while the eventually-consistent enumeration does not yet
    /// include the local id (e.g. mid-join).
    pub fn local_peer(&self) -> Result<Peer> {
        let id = self.handle.local_peer_id();
        self.snapshot()
            .get(id)
            .cloned()
            .ok_or(Error::LocalPeerUnknown { id })
    }

    /// The underlying network-session handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Mutable access to the handle (tests drive propagation through it).
    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// The active quorum config.
    pub fn config(&self) -> &QuorumConfig {
        &self.config
    }
}
