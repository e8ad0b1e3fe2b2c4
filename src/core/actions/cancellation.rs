//! Cooperative cancellation for long-running render stages.
//!
//! A stage polls its token between samples and bails out with [`Cancelled`]
//! once the token trips. Nothing is interrupted preemptively.

use std::error::Error;
use std::fmt;

/// Samples computed between two polls of a [`CancelToken`].
pub const CANCEL_POLL_INTERVAL: usize = 1024;

/// A stage stopped early because its token was tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// `Err(Cancelled)` if the token has tripped.
    #[inline]
    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() { Err(Cancelled) } else { Ok(()) }
    }

    /// Like [`check`](Self::check), but only polls on every
    /// [`CANCEL_POLL_INTERVAL`]th sample.
    #[inline]
    fn check_at(&self, sample_index: usize) -> Result<(), Cancelled> {
        if sample_index % CANCEL_POLL_INTERVAL == 0 {
            self.check()
        } else {
            Ok(())
        }
    }
}

/// Token for callers that never cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
