//! RAII pairing for begin/end transitions.

use crate::tracker::LoadingTracker;

/// Ends one tracked operation when dropped.
///
/// Created by [`LoadingTracker::guard`], which begins the operation. Holding
/// the guard across the tracked work guarantees the matching `end_loading`
/// on every exit path, including panics and early returns.
#[must_use = "dropping the guard immediately ends the operation it began"]
pub struct LoadingGuard {
    tracker: LoadingTracker,
}

impl LoadingGuard {
    pub(crate) fn new(tracker: LoadingTracker) -> Self {
        Self { tracker }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The guard owns exactly one begin. An already-zero counter here
        // means the caller also released manually; log and continue rather
        // than panic in drop.
        if self.tracker.end_loading().is_err() {
            tracing::warn!("loading guard dropped with no operation in flight");
        }
    }
}
