//! Peer identity and per-peer state.
//!
//! A peer's property bag is owned by the network layer and eventually
//! consistent; this module only reads it. The one untyped read (the
//! `"IsReady"` boolean) is isolated in [`Peer::try_ready`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property key under which a peer declares its readiness.
pub const PROP_IS_READY: &str = "IsReady";

/// Unique peer identifier, stable for the lifetime of the session.
///
/// Used only as a sort key. Not guaranteed contiguous or starting at 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct PeerId(pub u64);

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque per-peer property bag, keyed by string.
///
/// Owned and propagated by the network layer; values are uninterpreted JSON
/// except where a typed accessor gives one key a meaning.
pub type PropertyMap = HashMap<String, Value>;

/// A connected participant in the lobby session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    /// Stable session-unique identifier.
    pub id: PeerId,

    /// Name shown in the roster list.
    pub display_name: String,

    /// Externally-designated host flag. At most one peer has this set
    /// at any instant (enforced by the network layer, not here).
    pub is_host: bool,

    /// Declared properties, propagated asynchronously.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Peer {
    /// Create a peer with no properties and no host flag.
    pub fn new(id: PeerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_host: false,
            properties: PropertyMap::new(),
        }
    }

    /// Mark this peer as the session host.
    pub fn with_host(mut self) -> Self {
        self.is_host = true;
        self
    }

    /// Set the readiness property, as the network layer would after a
    /// declared toggle propagates.
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.set_ready(ready);
        self
    }

    /// Write the readiness property directly into the bag.
    pub fn set_ready(&mut self, ready: bool) {
        self.properties
            .insert(PROP_IS_READY.to_string(), Value::Bool(ready));
    }

    /// Typed read of the `"IsReady"` property.
    ///
    /// `Some(b)` iff the entry is present and is a boolean; `None` for an
    /// absent or mistyped entry. This is the only place the untyped
    /// property value is interpreted.
    pub fn try_ready(&self) -> Option<bool> {
        self.properties.get(PROP_IS_READY).and_then(Value::as_bool)
    }

    /// Readiness under the interpretation invariant: a missing (or
    /// mistyped) `"IsReady"` entry means not ready, never an error.
    pub fn is_ready(&self) -> bool {
        self.try_ready().unwrap_or(false)
    }
}

/// Render the display label for a peer.
///
/// `"{name} (Host) (Ready)"` with each suffix present iff the flag holds.
/// Pure; shared by the list reconciler and any diagnostic caller so there
/// is exactly one rendering rule.
pub fn format_label(peer: &Peer) -> String {
    let mut label = peer.display_name.clone();
    if peer.is_host {
        label.push_str(" (Host)");
    }
    if peer.is_ready() {
        label.push_str(" (Ready)");
    }
    label
}
