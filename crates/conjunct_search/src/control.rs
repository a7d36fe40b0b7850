//! Progress reporting and cancellation for long searches.

use std::sync::atomic::{AtomicBool, Ordering};

/// Receives the completed share of a search, 0..=100.
pub trait ProgressSink {
    fn report(&mut self, percent: u8);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8),
{
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Forwards progress to `log::debug!`, once per distinct percentage.
#[derive(Debug, Clone, Default)]
pub struct LogProgress {
    last: Option<u8>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last percentage forwarded to the log.
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}

impl ProgressSink for LogProgress {
    fn report(&mut self, percent: u8) {
        if self.last != Some(percent) {
            log::debug!("closest-approach search {percent}% complete");
            self.last = Some(percent);
        }
    }
}

/// Optional hooks a caller can attach to one search.
#[derive(Default)]
pub struct SearchControl<'a> {
    progress: Option<&'a mut dyn ProgressSink>,
    cancel: Option<&'a AtomicBool>,
}

impl std::fmt::Debug for SearchControl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchControl")
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl<'a> SearchControl<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, sink: &'a mut dyn ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    /// The search stops with [`SearchError::Cancelled`](crate::SearchError::Cancelled)
    /// at the next coarse step after `flag` becomes true.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub(crate) fn report(&mut self, percent: u8) {
        if let Some(sink) = self.progress.as_deref_mut() {
            sink.report(percent);
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
