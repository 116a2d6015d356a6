//! Fetch-and-transform layer for site statistics insight blocks.
//!
//! This crate owns the domain model, the presentation mapping, and the
//! reactive publication plumbing for "insight" blocks of a content site's
//! stats screen:
//!
//! - **[`InsightsBlock`]**: Shared block behavior: consults a
//!   [`CachePolicy`] on every [`fetch()`](InsightsBlock::fetch), runs the
//!   wrapped use case, and publishes the outcome into a replay-one
//!   [`InsightSlot`].
//!
//! - **[`TagsAndCategoriesUseCase`]**: Asks an [`InsightsStore`] for the
//!   tags & categories page and maps it into [`BlockListItem`]s, or into a
//!   [`InsightItem::Failed`] descriptor when the store reports an error.
//!
//! - **[`present`]**: Pure mapping from raw [`TagsModel`] groups into the
//!   ordered list model: title, rows, folded categories, empty marker, and
//!   the trailing "view more" link.
//!
//! - **[`CachingStore`]**: An [`InsightsStore`] that keeps the last good
//!   page per site, honors the force flag, and applies the display cap.
//!
//! - **[`InsightStream`]**: Subscription handle over the published value.
//!   Exposes `current()` / `latest()` / `changed()` and a `Stream` adapter.

pub mod config;
pub mod error;
pub mod labels;
pub mod model;
pub mod present;
pub mod store;
pub mod stream;
pub mod usecase;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::StoreSettings;
pub use error::{CoreError, StoreError, StoreErrorKind};
pub use labels::{LabelArg, LabelId, LabelProvider};
pub use store::{CachingStore, InsightsStore, TagsSource};
pub use stream::{InsightSlot, InsightStream};
pub use usecase::{
    CachePolicy, CachePolicyKind, InsightType, InsightsBlock, InsightsUseCase,
    TagsAndCategoriesUseCase,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    BlockListItem, IconRef, InsightItem, ListItem, Site, SiteId, TagEntry, TagGroup, TagKind,
    TagsModel,
};
