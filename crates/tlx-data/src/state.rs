//! Per-invocation execution state.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Lifecycle phase of one executor invocation.
///
/// `Refreshing` is entered only from a credential rejection, while the
/// token renewal and the single retry are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPhase {
    /// Not yet run (or reset).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Renewing the credential before the single retry.
    Refreshing,
    /// The last invocation settled with data.
    Success,
    /// The last invocation settled with an error.
    Error,
}

impl ExecutionPhase {
    /// Returns `true` while a request or refresh is in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

/// Point-in-time view of an executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSnapshot<T> {
    /// Data from the most recent successful invocation.
    pub data: Option<T>,
    /// `true` while a request or refresh is in flight.
    pub loading: bool,
    /// Message of the last settled error, if any.
    pub error: Option<String>,
    /// `true` if the last invocation settled successfully.
    pub is_success: bool,
}

struct StateInner<T> {
    phase: ExecutionPhase,
    data: Option<T>,
    error: Option<String>,
}

/// Shared executor state with generation-numbered invocations.
///
/// Every invocation takes a fresh generation; writes from an invocation
/// that has been superseded by a newer one are discarded, so a late
/// resolution cannot clobber fresher state.
pub(crate) struct StateCell<T> {
    inner: RwLock<StateInner<T>>,
    generation: AtomicU64,
}

impl<T: Clone> StateCell<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: RwLock::new(StateInner {
                phase: ExecutionPhase::Idle,
                data: None,
                error: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Allocate the generation for a new invocation.
    pub(crate) fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Enter `Loading`, clearing any prior outcome. Prior data is kept so
    /// consumers can keep rendering it during a refetch.
    pub(crate) fn begin(&self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        let mut inner = self.inner.write();
        inner.phase = ExecutionPhase::Loading;
        inner.error = None;
    }

    pub(crate) fn mark_refreshing(&self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        self.inner.write().phase = ExecutionPhase::Refreshing;
    }

    /// Settle with data. Returns `false` if this invocation was superseded.
    pub(crate) fn settle_success(&self, generation: u64, data: T) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let mut inner = self.inner.write();
        inner.phase = ExecutionPhase::Success;
        inner.data = Some(data);
        inner.error = None;
        true
    }

    /// Settle with an error. Returns `false` if this invocation was superseded.
    pub(crate) fn settle_error(&self, generation: u64, message: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let mut inner = self.inner.write();
        inner.phase = ExecutionPhase::Error;
        inner.error = Some(message);
        true
    }

    /// Clear the settled outcome without touching data or re-issuing.
    pub(crate) fn reset(&self) {
        let mut inner = self.inner.write();
        if !inner.phase.is_loading() {
            inner.phase = ExecutionPhase::Idle;
        }
        inner.error = None;
    }

    pub(crate) fn data(&self) -> Option<T> {
        self.inner.read().data.clone()
    }

    pub(crate) fn phase(&self) -> ExecutionPhase {
        self.inner.read().phase
    }

    pub(crate) fn snapshot(&self) -> ExecutionSnapshot<T> {
        let inner = self.inner.read();
        ExecutionSnapshot {
            data: inner.data.clone(),
            loading: inner.phase.is_loading(),
            error: inner.error.clone(),
            is_success: inner.phase == ExecutionPhase::Success,
        }
    }
}
