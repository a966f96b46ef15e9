//! Loading-counter primitive for tracking overlapping asynchronous work.
//!
//! A [`LoadingTracker`] counts operations that have announced their start but
//! not yet their completion, and derives a single busy/idle signal from that
//! count. Overlap is handled correctly: the tracker reports idle only once
//! every begun operation has ended, and ending more operations than were
//! begun is reported as an [`UnbalancedLoadingTransition`] instead of letting
//! the count go negative.
//!
//! ```
//! use inflight::LoadingTracker;
//!
//! let tracker = LoadingTracker::new();
//! tracker.begin_loading();
//! tracker.begin_loading();
//! tracker.end_loading()?;
//! assert!(tracker.is_loading());
//! tracker.end_loading()?;
//! assert!(!tracker.is_loading());
//! # Ok::<(), inflight::UnbalancedLoadingTransition>(())
//! ```

mod error;
mod guard;
mod tracker;

pub use error::UnbalancedLoadingTransition;
pub use guard::LoadingGuard;
pub use tracker::LoadingTracker;
