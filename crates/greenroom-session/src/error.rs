//! Error types for greenroom-session.

use greenroom_roster::PeerId;
use thiserror::Error;

/// Result type for greenroom-session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the session boundary.
///
/// Network-layer failures never appear here; the handle owns their retry
/// and reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// The quorum configuration would permit a degenerate start.
    #[error("invalid quorum config: min_peers {min_peers} is below the minimum of {minimum}")]
    InvalidConfig { min_peers: usize, minimum: usize },

    /// The local peer is not present in the current enumeration.
    /// Expected transiently while the layer's view converges.
    #[error("local peer {id} not present in the current roster")]
    LocalPeerUnknown { id: PeerId },
}
