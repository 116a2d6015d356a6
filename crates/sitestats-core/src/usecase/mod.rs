// ── Insight block use cases ──
//
// `InsightsBlock` is the behavior every block shares: the refresh
// decision, the publish step, and subscriptions. The per-block
// `InsightsUseCase` performs the request and builds the outcome.

mod policy;
mod tags;

use async_trait::async_trait;
use strum::{AsRefStr, Display};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::CoreError;
use crate::model::{InsightItem, Site};
use crate::stream::{InsightSlot, InsightStream};

pub use policy::{CachePolicy, CachePolicyKind};
pub use tags::TagsAndCategoriesUseCase;

/// Identity of an insight block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightType {
    TagsAndCategories,
}

/// Loads one block's outcome. Always performs the request when called.
#[async_trait]
pub trait InsightsUseCase: Send + Sync {
    fn kind(&self) -> InsightType;

    /// Fetch from the store and build the outcome to publish.
    ///
    /// Store failures become [`InsightItem::Failed`]; only contract
    /// violations are returned as errors.
    async fn load(&self, site: &Site, forced: bool) -> Result<InsightItem, CoreError>;
}

/// A use case together with its refresh policy and published value.
pub struct InsightsBlock<U> {
    use_case: U,
    policy: Box<dyn CachePolicy>,
    slot: InsightSlot,
}

impl<U: InsightsUseCase> InsightsBlock<U> {
    /// Wrap a use case with the default [`CachePolicyKind::RefreshOnly`] policy.
    pub fn new(use_case: U) -> Self {
        Self::with_policy(use_case, CachePolicyKind::default())
    }

    pub fn with_policy(use_case: U, policy: impl CachePolicy + 'static) -> Self {
        Self {
            use_case,
            policy: Box::new(policy),
            slot: InsightSlot::new(),
        }
    }

    pub fn kind(&self) -> InsightType {
        self.use_case.kind()
    }

    pub fn use_case(&self) -> &U {
        &self.use_case
    }

    /// Subscribe to the published outcome (replay-one).
    pub fn observe(&self) -> InsightStream {
        self.slot.subscribe()
    }

    /// Fetch and publish, unless a value is already published and the
    /// policy says no new value is wanted.
    ///
    /// Publishes exactly once per performed fetch, after the store has
    /// resolved. Overlapping calls are not serialized: the last one to
    /// resolve wins.
    pub async fn fetch(&self, site: &Site, refresh: bool, forced: bool) -> Result<(), CoreError> {
        let kind = self.kind();
        if self.slot.has_value() && !self.policy.should_fetch(refresh) {
            debug!(%kind, site = %site.id, "skipping fetch, value already published");
            return Ok(());
        }

        debug!(%kind, site = %site.id, refresh, forced, "fetching insight");
        let item = self
            .use_case
            .load(site, forced)
            .await
            .inspect_err(|e| error!(%kind, site = %site.id, error = %e, "contract violation"))?;

        self.slot.publish(item);
        Ok(())
    }

    /// Like [`fetch()`](Self::fetch), but gives up without publishing
    /// once `cancel` fires.
    pub async fn fetch_with_cancel(
        &self,
        site: &Site,
        refresh: bool,
        forced: bool,
        cancel: &CancellationToken,
    ) -> Result<(), CoreError> {
        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!(kind = %self.kind(), site = %site.id, "fetch cancelled");
                Ok(())
            }
            result = self.fetch(site, refresh, forced) => result,
        }
    }
}
