//! Error types for loading-counter transitions.

use thiserror::Error;

/// An `end_loading` call arrived with no outstanding operation to end.
///
/// This is a logic error in the caller (a double release), not a recoverable
/// runtime condition. The tracker refuses to let its count go negative and
/// leaves it at zero; the offending call gets this error synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unbalanced loading transition: end_loading called with no operation in flight")]
pub struct UnbalancedLoadingTransition;
