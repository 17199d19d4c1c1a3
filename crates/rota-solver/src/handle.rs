//! Handles for interacting with a running search.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use rota_core::{Result, RotaError};
use tokio::sync::watch;

use crate::state::SchedulerState;

/// Shared flag requesting that a search stop.
///
/// Cloning yields a token for the same search. Cancellation is observed at
/// the next cycle boundary.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Owner of a search running on its own thread.
///
/// Obtained from [`Scheduler::spawn`](crate::Scheduler::spawn).
pub struct SchedulerHandle {
    cancel: CancelToken,
    receiver: watch::Receiver<SchedulerState>,
    thread: JoinHandle<SchedulerState>,
}

impl SchedulerHandle {
    pub(crate) fn new(
        cancel: CancelToken,
        receiver: watch::Receiver<SchedulerState>,
        thread: JoinHandle<SchedulerState>,
    ) -> Self {
        Self {
            cancel,
            receiver,
            thread,
        }
    }

    /// Requests the search to stop at the next cycle boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Returns true until the search thread has finished.
    pub fn is_solving(&self) -> bool {
        !self.thread.is_finished()
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> SchedulerState {
        self.receiver.borrow().clone()
    }

    /// A receiver notified on every published state.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.receiver.clone()
    }

    /// Waits for the search to finish and returns its final state.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Internal`] if the search thread panicked.
    pub fn join(self) -> Result<SchedulerState> {
        self.thread
            .join()
            .map_err(|_| RotaError::Internal("scheduler thread panicked".to_string()))
    }
}

impl Debug for SchedulerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("solving", &self.is_solving())
            .field("cancel", &self.cancel)
            .finish()
    }
}
