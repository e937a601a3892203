//! Autoplay timer as an explicit, scoped resource.
//!
//! The controller decides *when* the next expiry is due; [`AutoplayTimer`]
//! owns the one pending expiry on the host and guarantees it is released on
//! every exit path, including drop.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::controller::TimerDirective;
use crate::error::SchedulerError;

/// Host seam for one-shot timers (browser `setTimeout`, a test clock, ...).
pub trait Scheduler {
    /// Token identifying a scheduled expiry.
    type Handle;

    /// Arrange for one expiry `after` from now.
    fn schedule(&mut self, after: Duration) -> Result<Self::Handle, SchedulerError>;

    /// Cancel a pending expiry. Cancelling a spent handle must be harmless.
    fn cancel(&mut self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    type Handle = S::Handle;

    fn schedule(&mut self, after: Duration) -> Result<Self::Handle, SchedulerError> {
        (**self).schedule(after)
    }

    fn cancel(&mut self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

/// Owner of at most one pending autoplay expiry.
pub struct AutoplayTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> AutoplayTimer<S> {
    /// A disarmed timer on top of `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Apply a controller directive.
    pub fn apply(&mut self, directive: TimerDirective) -> Result<(), SchedulerError> {
        match directive {
            TimerDirective::Arm { after } => self.arm(after),
            TimerDirective::Cancel => {
                self.disarm();
                Ok(())
            }
            TimerDirective::Unchanged => Ok(()),
        }
    }

    /// Replace any pending expiry with one due `after` from now.
    ///
    /// On failure the timer is left disarmed.
    pub fn arm(&mut self, after: Duration) -> Result<(), SchedulerError> {
        self.disarm();
        match self.scheduler.schedule(after) {
            Ok(handle) => {
                debug!(after_ms = after.as_millis() as u64, "autoplay armed");
                self.pending = Some(handle);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "autoplay could not be armed");
                Err(err)
            }
        }
    }

    /// Cancel the pending expiry, if any.
    pub fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("autoplay disarmed");
            self.scheduler.cancel(handle);
        }
    }

    /// Forget the pending handle because the host just fired it.
    pub fn expired(&mut self) {
        self.pending = None;
    }

    /// Whether an expiry is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The underlying scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for AutoplayTimer<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl<S: Scheduler> fmt::Debug for AutoplayTimer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoplayTimer")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Virtual-time scheduler for headless driving and tests.
///
/// Expiries are only delivered when the owner asks for them with
/// [`ManualScheduler::pop_due`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<u64, u64>,
}

impl ManualScheduler {
    /// Scheduler whose clock starts at `now_ms`.
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the virtual clock. Never goes backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Earliest pending due time.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.values().min().copied()
    }

    /// Remove and return the earliest expiry due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<u64> {
        let (id, due) = self
            .pending
            .iter()
            .filter(|(_, due)| **due <= now_ms)
            .min_by_key(|(_, due)| **due)
            .map(|(id, due)| (*id, *due))?;
        self.pending.remove(&id);
        Some(due)
    }

    /// Number of pending expiries.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, after: Duration) -> Result<u64, SchedulerError> {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now_ms.saturating_add(after.as_millis() as u64);
        self.pending.insert(id, due);
        Ok(id)
    }

    fn cancel(&mut self, handle: u64) {
        self.pending.remove(&handle);
    }
}
