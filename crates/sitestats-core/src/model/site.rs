// ── Site domain type ──

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Numeric identifier of a site on the stats backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The site whose stats are being fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    /// Human-friendly display name.
    pub name: String,
    /// Public address of the site (e.g., `https://example.blog`).
    pub url: Url,
}

impl Site {
    pub fn new(id: u64, name: impl Into<String>, url: Url) -> Self {
        Self {
            id: SiteId(id),
            name: name.into(),
            url,
        }
    }
}
