//! Greenroom Local Preferences
//!
//! Per-client settings that never leave the client. Unlike the readiness
//! property, which rides the network layer's property bag so every peer
//! can observe it, a local preference (the display name of an in-game
//! companion, say) matters only to the process that set it — so it lives
//! in a plain in-memory cell with no persistence and no propagation.
//!
//! Created with its default at startup, mutated only by the local client,
//! destroyed with the process. Any string is accepted, including empty.

/// Default display name for the local companion entity.
pub const DEFAULT_COMPANION_NAME: &str = "MyPet";

/// Single-value local preference cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCache {
    default: String,
    value: String,
}

impl PreferenceCache {
    /// Cache holding `default` until the first [`set`](Self::set).
    pub fn new(default: impl Into<String>) -> Self {
        let default = default.into();
        Self {
            value: default.clone(),
            default,
        }
    }

    /// Cache for the companion display name.
    pub fn companion_name() -> Self {
        Self::new(DEFAULT_COMPANION_NAME)
    }

    /// Current value: the default before any set, the last set value after.
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Replace the value. No validation — any string, including empty.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Restore the default value.
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Whether the current value equals the default.
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

impl Default for PreferenceCache {
    fn default() -> Self {
        Self::companion_name()
    }
}
