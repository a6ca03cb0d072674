//! Greenroom Roster Visualization
//!
//! Converts a roster snapshot into render commands against an external
//! list surface.
//!
//! # Full Teardown, Full Rebuild
//!
//! [`ListReconciler::render`] destroys every previously-rendered item and
//! instantiates one item per peer, in snapshot order. Rosters are small
//! (single digits to low tens) and readiness toggles are infrequent
//! relative to a render tick, so the O(n) rebuild costs nothing that
//! matters — and unlike incremental diffing it cannot orphan or duplicate
//! items. An incremental reconciler keyed by peer id would also be
//! correct, provided it preserves ordering and idempotence.
//!
//! # Degrade, Don't Fail
//!
//! If the surface or the item template is unavailable the render call is a
//! whole-call no-op: no error, no partial teardown.

mod reconciler;
mod surface;

pub use reconciler::ListReconciler;
pub use surface::{ItemId, ItemTemplate, ListSurface, RecordingSurface};
