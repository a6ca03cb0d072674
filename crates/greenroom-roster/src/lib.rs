//! Greenroom Peer Roster
//!
//! The roster is the ordered set of peers currently present in a lobby
//! session, as reported by the external network layer.
//!
//! # Ordering Contract
//!
//! A [`RosterSnapshot`] is always ordered ascending by [`PeerId`], no matter
//! what order the network layer enumerates peers in. Ids are unique and
//! stable for the session, so the order is total and ties cannot occur.
//!
//! # Pull, Don't Cache
//!
//! Snapshots have no independent lifecycle: callers rebuild one from the
//! live peer enumeration whenever they need a view, and never hold one
//! across network-state changes. Roster sizes are bounded by the session's
//! max player count, so the recompute is cheap and staleness wins the
//! trade-off.
//!
//! # Readiness Interpretation
//!
//! Each peer carries an opaque property bag owned by the network layer.
//! The `"IsReady"` key maps to a boolean when present; an absent (or
//! mistyped) entry means "not ready", never an error. [`Peer::try_ready`]
//! is the single place that interprets the untyped value.

mod peer;
mod snapshot;

pub use peer::{format_label, Peer, PeerId, PropertyMap, PROP_IS_READY};
pub use snapshot::{RosterSnapshot, RosterStats};
