// ── Caching insights store ──
//
// Keeps the last successful page per site. Non-forced fetches are
// served from the cache while it is fresh; forced fetches always hit
// the source. Failures are never cached.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use tracing::{debug, trace};

use super::{InsightsStore, TagsSource};
use crate::config::StoreSettings;
use crate::error::StoreError;
use crate::model::{Site, SiteId, TagsModel};

#[derive(Debug, Clone)]
struct CachedPage {
    model: TagsModel,
    fetched_at: DateTime<Utc>,
}

/// An [`InsightsStore`] that caches a [`TagsSource`] per site.
///
/// The display cap (`max_groups`) is applied here, so blocks receive
/// exactly the page they are meant to show.
pub struct CachingStore<S> {
    source: S,
    settings: StoreSettings,
    pages: DashMap<SiteId, CachedPage>,
}

impl<S: TagsSource> CachingStore<S> {
    pub fn new(source: S, settings: StoreSettings) -> Self {
        Self {
            source,
            settings,
            pages: DashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// When the cached page for `site` was fetched, if one is held.
    pub fn fetched_at(&self, site: &Site) -> Option<DateTime<Utc>> {
        self.pages.get(&site.id).map(|page| page.fetched_at)
    }

    /// Drop the cached page for one site.
    pub fn invalidate(&self, site: &Site) {
        if self.pages.remove(&site.id).is_some() {
            debug!(site = %site.id, "invalidated cached tags");
        }
    }

    /// Drop every cached page.
    pub fn clear(&self) {
        self.pages.clear();
    }

    fn fresh_page(&self, site: &Site) -> Option<TagsModel> {
        let page = self.pages.get(&site.id)?;
        let age = Utc::now() - page.fetched_at;
        // A ttl too large for chrono never expires.
        let fresh = match TimeDelta::from_std(self.settings.ttl) {
            Ok(ttl) => age < ttl,
            Err(_) => true,
        };
        fresh.then(|| page.model.clone())
    }
}

#[async_trait]
impl<S: TagsSource> InsightsStore for CachingStore<S> {
    async fn fetch_tags_and_categories(
        &self,
        site: &Site,
        forced: bool,
    ) -> Result<TagsModel, StoreError> {
        if forced {
            debug!(site = %site.id, "forced fetch, bypassing tags cache");
        } else if let Some(model) = self.fresh_page(site) {
            trace!(site = %site.id, groups = model.groups.len(), "tags cache hit");
            return Ok(model);
        } else {
            debug!(site = %site.id, "tags cache miss");
        }

        let model = self
            .source
            .load_tags(site)
            .await?
            .truncated(self.settings.max_groups);

        self.pages.insert(
            site.id,
            CachedPage {
                model: model.clone(),
                fetched_at: Utc::now(),
            },
        );
        Ok(model)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::error::StoreErrorKind;
    use crate::model::{TagEntry, TagGroup, TagKind};

    struct ScriptedSource {
        calls: AtomicUsize,
        responses: Mutex<Vec<Result<TagsModel, StoreError>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<TagsModel, StoreError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses: Mutex::new(responses),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TagsSource for ScriptedSource {
        async fn load_tags(&self, _site: &Site) -> Result<TagsModel, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn site() -> Site {
        Site::new(7, "Example", "https://example.blog".parse().unwrap())
    }

    fn page(names: &[&str]) -> TagsModel {
        TagsModel::new(
            names
                .iter()
                .map(|n| TagGroup::new(vec![TagEntry::new(*n, TagKind::Tag, "url")], 1))
                .collect(),
        )
    }

    fn settings(ttl: Duration, max_groups: usize) -> StoreSettings {
        StoreSettings { ttl, max_groups }
    }

    #[tokio::test]
    async fn serves_fresh_page_from_cache() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![Ok(page(&["a"]))]),
            settings(Duration::from_secs(3600), 6),
        );

        let first = store.fetch_tags_and_categories(&site(), false).await.unwrap();
        let second = store.fetch_tags_and_categories(&site(), false).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.source.calls(), 1);
        assert!(store.fetched_at(&site()).is_some());
    }

    #[tokio::test]
    async fn forced_fetch_bypasses_cache() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![Ok(page(&["a"])), Ok(page(&["b"]))]),
            settings(Duration::from_secs(3600), 6),
        );

        store.fetch_tags_and_categories(&site(), false).await.unwrap();
        let forced = store.fetch_tags_and_categories(&site(), true).await.unwrap();

        assert_eq!(forced, page(&["b"]));
        assert_eq!(store.source.calls(), 2);

        // The forced result replaced the cached page.
        let cached = store.fetch_tags_and_categories(&site(), false).await.unwrap();
        assert_eq!(cached, page(&["b"]));
        assert_eq!(store.source.calls(), 2);
    }

    #[tokio::test]
    async fn stale_page_is_refetched() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![Ok(page(&["a"])), Ok(page(&["b"]))]),
            settings(Duration::ZERO, 6),
        );

        store.fetch_tags_and_categories(&site(), false).await.unwrap();
        let second = store.fetch_tags_and_categories(&site(), false).await.unwrap();

        assert_eq!(second, page(&["b"]));
        assert_eq!(store.source.calls(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![
                Err(StoreError::new(StoreErrorKind::Timeout, "timed out")),
                Ok(page(&["a"])),
            ]),
            settings(Duration::from_secs(3600), 6),
        );

        let err = store
            .fetch_tags_and_categories(&site(), false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Timeout);
        assert!(store.fetched_at(&site()).is_none());

        let ok = store.fetch_tags_and_categories(&site(), false).await.unwrap();
        assert_eq!(ok, page(&["a"]));
    }

    #[tokio::test]
    async fn applies_display_cap() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![Ok(page(&["a", "b", "c", "d"]))]),
            settings(Duration::from_secs(3600), 2),
        );

        let model = store.fetch_tags_and_categories(&site(), false).await.unwrap();
        assert_eq!(model, page(&["a", "b"]));
    }

    #[tokio::test]
    async fn invalidate_forces_next_fetch_to_source() {
        let store = CachingStore::new(
            ScriptedSource::new(vec![Ok(page(&["a"])), Ok(page(&["b"]))]),
            settings(Duration::from_secs(3600), 6),
        );

        store.fetch_tags_and_categories(&site(), false).await.unwrap();
        store.invalidate(&site());
        let model = store.fetch_tags_and_categories(&site(), false).await.unwrap();

        assert_eq!(model, page(&["b"]));
        assert_eq!(store.source.calls(), 2);
    }

    #[tokio::test]
    async fn clear_drops_every_site() {
        let other = Site::new(8, "Other", "https://other.blog".parse().unwrap());
        let store = CachingStore::new(
            ScriptedSource::new(vec![
                Ok(page(&["a"])),
                Ok(page(&["b"])),
                Ok(page(&["c"])),
                Ok(page(&["d"])),
            ]),
            settings(Duration::from_secs(3600), 6),
        );
        assert_eq!(store.settings().max_groups, 6);

        store.fetch_tags_and_categories(&site(), false).await.unwrap();
        store.fetch_tags_and_categories(&other, false).await.unwrap();
        assert!(store.fetched_at(&other).is_some());

        store.clear();
        assert!(store.fetched_at(&site()).is_none());
        assert!(store.fetched_at(&other).is_none());

        let first = store.fetch_tags_and_categories(&site(), false).await.unwrap();
        let second = store.fetch_tags_and_categories(&other, false).await.unwrap();
        assert_eq!(first, page(&["c"]));
        assert_eq!(second, page(&["d"]));
        assert_eq!(store.source.calls(), 4);
    }
}
