// ── Reactive insight streams ──
//
// Replay-one publication of block outcomes. `InsightSlot` is the single
// writer side; `InsightStream` is what subscribers hold.

mod slot;

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::model::InsightItem;

pub use slot::InsightSlot;

type Published = Option<Arc<InsightItem>>;

/// A subscription to a block's published outcome.
///
/// The value held when the subscription is created is available right
/// away through `current()`; later publishes arrive through `changed()`
/// or by converting into a `Stream`.
pub struct InsightStream {
    current: Published,
    receiver: watch::Receiver<Published>,
}

impl InsightStream {
    pub(crate) fn new(mut receiver: watch::Receiver<Published>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// The value captured at creation time (or at the last `changed()`).
    pub fn current(&self) -> Option<&Arc<InsightItem>> {
        self.current.as_ref()
    }

    /// The latest published value (may have changed since creation).
    pub fn latest(&self) -> Option<Arc<InsightItem>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next publish, returning the new value.
    /// Returns `None` if the slot has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<InsightItem>> {
        loop {
            self.receiver.changed().await.ok()?;
            let published = self.receiver.borrow_and_update().clone();
            if let Some(item) = published {
                self.current = Some(Arc::clone(&item));
                return Some(item);
            }
        }
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The first item is the currently held value, if any.
    pub fn into_stream(self) -> InsightWatchStream {
        InsightWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields every published `Arc<InsightItem>`; the empty initial state
/// of a slot that has never been published to is skipped.
pub struct InsightWatchStream {
    inner: WatchStream<Published>,
}

impl Stream for InsightWatchStream {
    type Item = Arc<InsightItem>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Some(item))) => return Poll::Ready(Some(item)),
                Poll::Ready(Some(None)) => {}
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
