// ── Reactive entity streams ──
//
// Subscription handles for consuming store changes. These are thin
// wrappers over `watch` receivers: every store mutation triggers a
// notification; a slow consumer observes the latest snapshot.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::model::{Record, RecordId};

/// A subscription to a collection of records.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via `changed()` or by converting to a `Stream`.
pub struct EntityStream<T: Clone + Send + Sync + 'static> {
    current: Arc<Vec<Arc<T>>>,
    receiver: watch::Receiver<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<Arc<T>>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or at the last
    /// observed change).
    pub fn current(&self) -> &Arc<Vec<Arc<T>>> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<Vec<Arc<T>>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the sender (the store) has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<Arc<T>>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> EntityWatchStream<T> {
        EntityWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields a new `Arc<Vec<Arc<T>>>` snapshot each time the underlying
/// collection is mutated.
pub struct EntityWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for EntityWatchStream<T> {
    type Item = Arc<Vec<Arc<T>>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin when the inner type is Unpin.
        // Arc<Vec<Arc<T>>> is always Unpin, so this is safe.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

// ── Single-record streams ────────────────────────────────────────────

enum RecordStreamInner<T: Record> {
    /// Tracks the store's resolved active record.
    Active(watch::Receiver<Option<Arc<T>>>),
    /// Projects one id out of the full snapshot by linear search.
    ById {
        receiver: watch::Receiver<Arc<Vec<Arc<T>>>>,
        id: RecordId,
    },
}

/// A subscription to a single record: the active record, or one looked
/// up by id. Emits on every store mutation, whether or not the targeted
/// record itself changed.
pub struct RecordStream<T: Record> {
    inner: RecordStreamInner<T>,
}

impl<T: Record> RecordStream<T> {
    pub(crate) fn active(receiver: watch::Receiver<Option<Arc<T>>>) -> Self {
        Self {
            inner: RecordStreamInner::Active(receiver),
        }
    }

    pub(crate) fn by_id(receiver: watch::Receiver<Arc<Vec<Arc<T>>>>, id: RecordId) -> Self {
        Self {
            inner: RecordStreamInner::ById { receiver, id },
        }
    }

    /// The record as of the latest store state, or `None` if absent.
    pub fn latest(&self) -> Option<Arc<T>> {
        match &self.inner {
            RecordStreamInner::Active(rx) => rx.borrow().clone(),
            RecordStreamInner::ById { receiver, id } => receiver
                .borrow()
                .iter()
                .find(|r| r.record_id() == *id)
                .cloned(),
        }
    }

    /// Wait for the next store mutation, returning the re-resolved
    /// record. Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<Option<Arc<T>>> {
        match &mut self.inner {
            RecordStreamInner::Active(rx) => {
                rx.changed().await.ok()?;
                Some(rx.borrow_and_update().clone())
            }
            RecordStreamInner::ById { receiver, id } => {
                receiver.changed().await.ok()?;
                let snap = receiver.borrow_and_update().clone();
                Some(snap.iter().find(|r| r.record_id() == *id).cloned())
            }
        }
    }
}
