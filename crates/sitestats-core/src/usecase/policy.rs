// ── Refresh policy ──
//
// Decides whether a `fetch()` on a block that already published a
// value goes to the store again. A block with nothing published always
// fetches.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Shared "is a new value wanted" decision.
pub trait CachePolicy: Send + Sync {
    fn should_fetch(&self, refresh: bool) -> bool;
}

/// Built-in policies.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CachePolicyKind {
    /// Re-fetch only when the caller asks for a refresh.
    #[default]
    RefreshOnly,
    /// Re-fetch on every call.
    Always,
}

impl CachePolicy for CachePolicyKind {
    fn should_fetch(&self, refresh: bool) -> bool {
        match self {
            Self::RefreshOnly => refresh,
            Self::Always => true,
        }
    }
}
