// ── Runtime store settings ──
//
// These types describe how a caching store behaves. They never touch
// disk; `sitestats-config` builds a `StoreSettings` and hands it in.

use std::time::Duration;

/// Tuning for [`CachingStore`](crate::store::CachingStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// How long a cached page is served without asking the source again.
    pub ttl: Duration,
    /// Display cap: at most this many groups are handed to the block.
    pub max_groups: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_groups: 6,
        }
    }
}
