//! Trailing-edge debounce for profile saves.
//!
//! Each [`Debouncer::schedule`] replaces the pending action and restarts the
//! quiet period. Cancelling (explicitly or by dropping the debouncer) discards
//! the pending action without running it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::SchedulerError;

/// Default quiet period before a scheduled save runs.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// A deferred action that can be cancelled before it fires.
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Run `action` on `runtime` once `delay` has elapsed, unless cancelled first.
    pub fn spawn<F>(runtime: &Handle, delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("scheduled save cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    // Cancelled while the wake-up was queued.
                    if token.is_cancelled() {
                        debug!("scheduled save cancelled");
                        return;
                    }
                    action();
                }
            }
        });
        Self { cancel, handle }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to fire or observe its cancellation.
    pub async fn join(self) -> Result<(), SchedulerError> {
        self.handle.await?;
        Ok(())
    }
}

/// Coalesces bursts of triggers into one trailing action.
#[derive(Debug)]
pub struct Debouncer {
    runtime: Handle,
    quiet_period: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(runtime: Handle, quiet_period: Duration) -> Self {
        Self {
            runtime,
            quiet_period,
            pending: None,
        }
    }

    /// Debouncer on the runtime the caller is running in.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoRuntime`] outside a tokio runtime.
    pub fn on_current_runtime(quiet_period: Duration) -> Result<Self, SchedulerError> {
        let runtime = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        Ok(Self::new(runtime, quiet_period))
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Replace any pending action with `action`, due after the quiet period.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        debug!(quiet_ms = self.quiet_period.as_millis() as u64, "save scheduled");
        self.pending = Some(ScheduledTask::spawn(
            &self.runtime,
            self.quiet_period,
            action,
        ));
    }

    /// Whether an action is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Drop the pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Wait until the pending action (if any) has run on its own schedule.
    ///
    /// # Errors
    /// Returns an error if the pending task panicked.
    pub async fn settle(&mut self) -> Result<(), SchedulerError> {
        match self.pending.take() {
            Some(task) => task.join().await,
            None => Ok(()),
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
