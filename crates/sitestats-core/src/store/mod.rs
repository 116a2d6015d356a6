// ── Insights store seam ──
//
// The block only ever talks to an `InsightsStore`. Whatever performs
// the actual network or database work lives behind `TagsSource`.

mod cache;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Site, TagsModel};

pub use cache::CachingStore;

/// Provides insight payloads to blocks.
///
/// `forced = false` may be answered from a cache; `forced = true` must
/// bypass any cache and go to the backend.
#[async_trait]
pub trait InsightsStore: Send + Sync {
    async fn fetch_tags_and_categories(
        &self,
        site: &Site,
        forced: bool,
    ) -> Result<TagsModel, StoreError>;
}

/// The uncached origin of tags & categories data.
#[async_trait]
pub trait TagsSource: Send + Sync {
    async fn load_tags(&self, site: &Site) -> Result<TagsModel, StoreError>;
}

#[async_trait]
impl<T: InsightsStore + ?Sized> InsightsStore for std::sync::Arc<T> {
    async fn fetch_tags_and_categories(
        &self,
        site: &Site,
        forced: bool,
    ) -> Result<TagsModel, StoreError> {
        (**self).fetch_tags_and_categories(site, forced).await
    }
}
