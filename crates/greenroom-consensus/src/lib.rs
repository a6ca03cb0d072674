//! Readiness Quorum Aggregation
//!
//! Derives the single answer a lobby needs — "may the match start?" — from
//! a roster snapshot of possibly-stale, asynchronously-propagated peer
//! state.
//!
//! # Stateless by Design
//!
//! Readiness propagates with no cross-peer ordering guarantee: peer A's
//! toggle is not visible to peer B at any bounded time. The aggregate can
//! therefore flicker between observations, and an accumulated signal would
//! accumulate staleness. Every function here is a pure function of one
//! fresh snapshot — re-evaluated on every relevant event, never cached.
//!
//! # The Quorum Rule
//!
//! A lone peer is never ready-to-start: [`all_ready`] requires at least
//! [`MIN_PEERS_TO_START`] peers before unanimous readiness counts. The
//! minimum is a single named constant so it can be parameterized without
//! touching the aggregation logic ([`all_ready_with_min`]).

mod quorum;
mod status;

pub use quorum::{all_ready, all_ready_with_min, meets_quorum, pending_peers, MIN_PEERS_TO_START};
pub use status::{evaluate, GateStatus};
