// ── Domain model ──
//
// Raw stats payloads handed over by the store, and the immutable list
// model published to block consumers.

pub mod block;
pub mod site;
pub mod tag;

pub use block::{BlockListItem, IconRef, InsightItem, ListItem};
pub use site::{Site, SiteId};
pub use tag::{TagEntry, TagGroup, TagKind, TagsModel};
