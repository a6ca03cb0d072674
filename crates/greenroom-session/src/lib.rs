//! Greenroom Lobby Session
//!
//! The session-scoped object that wires the roster model and readiness
//! aggregation to an external network-session layer.
//!
//! # Pull, Don't Push
//!
//! The network layer mutates peer state at times outside this core's
//! control, on the same logical thread. [`LobbySession::snapshot`] pulls
//! the live enumeration on every call, so there is no cached state to
//! invalidate and no race between "a change arrived" and "a snapshot is
//! read" — every snapshot reflects whatever the layer currently reports.
//!
//! # Fire and Forget
//!
//! [`LobbySession::declare_ready`] issues a single-key property write and
//! returns. Retry, acknowledgment, and failure reporting belong to the
//! network layer; this core only ever sees the latest successfully
//! propagated state. No compound or multi-peer updates are ever attempted.
//!
//! # Errors
//!
//! The taxonomy is deliberately narrow. The only fallible paths are
//! config validation and the local-peer lookup (the eventually-consistent
//! enumeration may not include the local peer yet); everything else
//! degrades to a safe default.

mod error;
mod handle;
mod session;

pub use error::{Error, Result};
pub use handle::{MockSession, SessionHandle};
pub use session::{LobbySession, QuorumConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use greenroom_roster::{Peer, PeerId};

    #[test]
    fn declare_then_observe() {
        let mut mock = MockSession::new(PeerId(1));
        mock.add_peer(Peer::new(PeerId(1), "Ann"));
        mock.add_peer(Peer::new(PeerId(2), "Bob"));

        let mut session = LobbySession::new(mock);
        assert!(!session.may_start());

        session.declare_ready(true);
        session.handle_mut().set_peer_ready(PeerId(2), true);

        assert!(session.may_start());
    }
}
