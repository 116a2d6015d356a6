// ── Tags & categories block ──

use async_trait::async_trait;
use tracing::warn;

use super::{InsightType, InsightsUseCase};
use crate::error::CoreError;
use crate::labels::{LabelId, LabelProvider};
use crate::model::{InsightItem, Site};
use crate::present::map_tags;
use crate::store::InsightsStore;

/// Fetches the tags & categories page and maps it for display.
pub struct TagsAndCategoriesUseCase<S, L> {
    store: S,
    labels: L,
}

impl<S: InsightsStore, L: LabelProvider> TagsAndCategoriesUseCase<S, L> {
    pub fn new(store: S, labels: L) -> Self {
        Self { store, labels }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: InsightsStore, L: LabelProvider> InsightsUseCase for TagsAndCategoriesUseCase<S, L> {
    fn kind(&self) -> InsightType {
        InsightType::TagsAndCategories
    }

    async fn load(&self, site: &Site, forced: bool) -> Result<InsightItem, CoreError> {
        match self.store.fetch_tags_and_categories(site, forced).await {
            Ok(model) => Ok(InsightItem::List {
                items: map_tags(&model, &self.labels)?,
            }),
            Err(err) => {
                warn!(
                    site = %site.id,
                    kind = %err.kind,
                    message = ?err.message,
                    "failed to fetch tags and categories"
                );
                Ok(InsightItem::Failed {
                    failed_label: LabelId::StatsViewTagsAndCategories,
                    error_message: err.display_message(),
                })
            }
        }
    }
}
