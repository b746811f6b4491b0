//! The monitor itself: a mutex-guarded [`state::ManagerState`] plus the
//! condition variable bank clients and engines block on.

mod state;

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use tracing::{debug, instrument, trace};

use crate::config::ManagerConfig;
use crate::error::Stopped;
use crate::types::{Computation, ComputationResult, ComputationType, Request, RequestId};
use state::{ManagerState, ResultSlot};

mod handles;
pub use handles::{ClientHandle, EngineHandle};

/// The shared coordination buffer described at the crate root.
///
/// Not constructed directly outside the crate: use [`new_manager`] to obtain
/// a [`ClientHandle`]/[`EngineHandle`] pair, each a cheap, `Clone`-able,
/// role-restricted view over one shared `ComputationManager`.
pub struct ComputationManager {
    state: Mutex<ManagerState>,
    /// Engines awaiting work of type T block here; indexed by `ComputationType::index`.
    empty_queue: [Condvar; 3],
    /// Clients awaiting queue space for type T block here; indexed by `ComputationType::index`.
    full_queue: [Condvar; 3],
    /// Clients awaiting the next deliverable result block here.
    result_ready: Condvar,
    max_queue_size: usize,
}

/// Builds a manager and returns its two role facades.
///
/// Mirrors `veloce::spsc::channel()` returning a `(Sender, Receiver)` pair:
/// one shared inner object, two handle types restricting the API surface
/// available to each role. Unlike that channel, both handles here are
/// `Clone` — the domain has many concurrent clients and many concurrent
/// engines, not a single producer and a single consumer.
pub fn new_manager(config: ManagerConfig) -> (ClientHandle, EngineHandle) {
    let manager = Arc::new(ComputationManager {
        state: Mutex::new(ManagerState::new()),
        empty_queue: [Condvar::new(), Condvar::new(), Condvar::new()],
        full_queue: [Condvar::new(), Condvar::new(), Condvar::new()],
        result_ready: Condvar::new(),
        max_queue_size: config.max_queue_size,
    });
    (ClientHandle::new(manager.clone()), EngineHandle::new(manager))
}

impl ComputationManager {
    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.state.lock().expect("computation manager mutex poisoned")
    }

    /// Client operation: enqueue `computation`, blocking while its type's
    /// queue is at capacity.
    #[instrument(skip(self, computation), fields(kind = ?computation.kind))]
    pub(crate) fn request_computation(&self, computation: Computation) -> Result<RequestId, Stopped> {
        let kind = computation.kind;
        let idx = kind.index();
        let mut guard = self.lock();
        loop {
            if guard.stopped {
                self.full_queue[idx].notify_one();
                return Err(Stopped);
            }
            if guard.queue(kind).len() < self.max_queue_size {
                break;
            }
            trace!(?kind, "request_computation: queue full, waiting");
            guard = self.full_queue[idx].wait(guard).expect("computation manager mutex poisoned");
        }

        let id = guard.next_request_id();
        guard.queue_mut(kind).push_back(Request { id, computation });
        guard.ledger.push_back(ResultSlot::empty(id));
        debug!(%id, ?kind, "request_computation: accepted");
        self.empty_queue[idx].notify_one();
        Ok(id)
    }

    /// Client operation: removes `id` wherever it currently lives — a
    /// per-type queue or the ledger — and is a silent no-op if `id` is
    /// unknown (already delivered, already aborted, or never issued).
    #[instrument(skip(self))]
    pub(crate) fn abort_computation(&self, id: RequestId) {
        let mut guard = self.lock();

        if let Some(kind) = guard.remove_from_any_queue(id) {
            // The request was still queued: its ledger slot shares the same
            // id and must be removed along with it, or delivery would stall
            // forever on a slot nothing will ever fill.
            guard.remove_ledger_slot(id);
            trace!(%id, ?kind, "abort_computation: removed from queue");
            self.full_queue[kind.index()].notify_one();
            // The removed id may have been the ledger head that `get_next_result`
            // is blocked on; wake it unconditionally so it re-inspects the head.
            self.result_ready.notify_one();
            return;
        }

        match guard.remove_ledger_slot(id) {
            Some(was_in_flight) => {
                trace!(%id, was_in_flight, "abort_computation: removed from ledger");
                if was_in_flight {
                    self.result_ready.notify_one();
                }
            }
            None => trace!(%id, "abort_computation: unknown id, ignored"),
        }
    }

    /// Client operation: blocks until the oldest surviving submission has a
    /// value, then removes and returns it.
    #[instrument(skip(self))]
    pub(crate) fn get_next_result(&self) -> Result<ComputationResult, Stopped> {
        let mut guard = self.lock();
        loop {
            if guard.stopped {
                self.result_ready.notify_one();
                return Err(Stopped);
            }
            if let Some(front) = guard.ledger.front() {
                if front.value.is_some() {
                    let slot = guard.ledger.pop_front().expect("front() just confirmed a slot exists");
                    let value = slot.value.expect("checked above");
                    debug!(id = %slot.id, "get_next_result: delivered");
                    return Ok(ComputationResult::new(slot.id, value));
                }
            }
            trace!("get_next_result: head not ready, waiting");
            guard = self.result_ready.wait(guard).expect("computation manager mutex poisoned");
        }
    }

    /// Engine operation: blocks until `kind`'s queue is non-empty, then pops
    /// and returns the oldest request of that type.
    #[instrument(skip(self))]
    pub(crate) fn get_work(&self, kind: ComputationType) -> Result<Request, Stopped> {
        let idx = kind.index();
        let mut guard = self.lock();
        loop {
            if guard.stopped {
                self.empty_queue[idx].notify_one();
                return Err(Stopped);
            }
            if let Some(request) = guard.queue_mut(kind).pop_front() {
                debug!(id = %request.id, ?kind, "get_work: dispatched");
                self.full_queue[idx].notify_one();
                return Ok(request);
            }
            trace!(?kind, "get_work: queue empty, waiting");
            guard = self.empty_queue[idx].wait(guard).expect("computation manager mutex poisoned");
        }
    }

    /// Engine operation, non-blocking: whether `id`'s ledger slot still
    /// exists. An engine polls this cooperatively to notice its work was
    /// aborted mid-computation and unwind voluntarily.
    #[instrument(skip(self))]
    pub(crate) fn continue_work(&self, id: RequestId) -> bool {
        let guard = self.lock();
        if guard.stopped {
            return false;
        }
        guard.ledger.iter().any(|slot| slot.id == id)
    }

    /// Engine operation, non-blocking: fills `result`'s ledger slot, or
    /// silently discards it if the slot is gone (the work was aborted while
    /// the engine was still computing it).
    #[instrument(skip(self))]
    pub(crate) fn provide_result(&self, result: ComputationResult) {
        let mut guard = self.lock();
        match guard.ledger.iter_mut().find(|slot| slot.id == result.id) {
            Some(slot) => {
                slot.value = Some(result.value);
                debug!(id = %result.id, "provide_result: filled");
                self.result_ready.notify_one();
            }
            None => trace!(id = %result.id, "provide_result: slot gone, dropping result"),
        }
    }

    /// Terminal shutdown: unblocks every current and future waiter with
    /// [`Stopped`]. Idempotent.
    #[instrument(skip(self))]
    pub(crate) fn stop(&self) {
        let mut guard = self.lock();
        if guard.stopped {
            return;
        }
        guard.stopped = true;
        debug!("stop: manager stopped");
        drop(guard);

        self.result_ready.notify_all();
        for cv in &self.empty_queue {
            cv.notify_all();
        }
        for cv in &self.full_queue {
            cv.notify_all();
        }
    }
}
