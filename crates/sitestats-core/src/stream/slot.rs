// ── Single-slot publication holder ──
//
// Last-value-wins storage for one block outcome. Every publish swaps in
// a whole `Arc<InsightItem>`, so readers never observe a partial value.

use std::sync::Arc;

use tokio::sync::watch;

use super::{InsightStream, Published};
use crate::model::InsightItem;

/// Replay-one holder for a block's latest outcome.
///
/// Subscribers created after a publish see that value immediately;
/// there is no history beyond the latest value.
pub struct InsightSlot {
    sender: watch::Sender<Published>,
}

impl InsightSlot {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replace the held value and notify every subscriber.
    pub fn publish(&self, item: InsightItem) {
        // `send_replace` updates unconditionally, even with zero receivers.
        self.sender.send_replace(Some(Arc::new(item)));
    }

    /// The currently held value (cheap `Arc` clone).
    pub fn latest(&self) -> Option<Arc<InsightItem>> {
        self.sender.borrow().clone()
    }

    pub fn has_value(&self) -> bool {
        self.sender.borrow().is_some()
    }

    pub fn subscribe(&self) -> InsightStream {
        InsightStream::new(self.sender.subscribe())
    }
}

impl Default for InsightSlot {
    fn default() -> Self {
        Self::new()
    }
}
