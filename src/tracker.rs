//! In-flight operation tracking.
//!
//! Maintains a shared count of outstanding asynchronous operations so
//! dependent logic can derive a single busy/idle signal from possibly
//! overlapping work.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

use crate::error::UnbalancedLoadingTransition;
use crate::guard::LoadingGuard;

/// Thread-safe counter of in-flight operations.
///
/// Clones share the same counter: any number of concurrent callers can pair
/// [`begin_loading`](Self::begin_loading) / [`end_loading`](Self::end_loading)
/// around their own asynchronous work, and [`is_loading`](Self::is_loading)
/// reports whether at least one operation is still outstanding.
///
/// The count never goes negative: an `end_loading` with no matching begin
/// returns [`UnbalancedLoadingTransition`] and leaves the count at zero.
#[derive(Clone)]
pub struct LoadingTracker {
    inner: Arc<TrackerInner>,
}

struct TrackerInner {
    count: AtomicUsize,
    idle: Notify,
}

impl LoadingTracker {
    /// Create a tracker with no outstanding operations.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                count: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    /// Announce the start of an operation.
    pub fn begin_loading(&self) {
        let count = self.inner.count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(count, "operation began");
    }

    /// Announce the completion of an operation.
    ///
    /// # Errors
    /// Returns [`UnbalancedLoadingTransition`] if no operation is
    /// outstanding. The count is left at zero.
    pub fn end_loading(&self) -> Result<(), UnbalancedLoadingTransition> {
        // Checked decrement: underflow is detected, never performed.
        let prev = self
            .inner
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| c.checked_sub(1))
            .map_err(|_| UnbalancedLoadingTransition)?;

        let count = prev - 1;
        tracing::trace!(count, "operation ended");
        if count == 0 {
            self.inner.idle.notify_waiters();
        }
        Ok(())
    }

    /// Whether at least one operation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.count() > 0
    }

    /// Snapshot of the number of outstanding operations.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Begin an operation and return a guard that ends it when dropped.
    ///
    /// The guard ends the operation on every exit path, including panics
    /// and `?` early returns.
    #[must_use]
    pub fn guard(&self) -> LoadingGuard {
        self.begin_loading();
        LoadingGuard::new(self.clone())
    }

    /// Wait until no operations are outstanding.
    ///
    /// Returns immediately if the tracker is already idle. Otherwise
    /// suspends until the last outstanding operation ends; if new
    /// operations begin before this task is polled again, it keeps
    /// waiting for the next idle transition.
    pub async fn wait_until_idle(&self) {
        loop {
            // Subscribe to Notify BEFORE checking the count to avoid TOCTOU
            // race: without this, the last end_loading could fire between
            // the check and the await, and notify_waiters() would have no
            // subscribers, losing the notification.
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if !self.is_loading() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for LoadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoadingTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingTracker")
            .field("count", &self.count())
            .finish()
    }
}
