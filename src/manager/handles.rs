//! Role-restricted, `Clone`-able facades over a shared [`ComputationManager`].

use std::sync::Arc;

use crate::error::Stopped;
use crate::types::{Computation, ComputationResult, ComputationType, Request, RequestId};

use super::ComputationManager;

/// The facade held by client threads: submit work, retrieve results, cancel.
#[derive(Clone)]
pub struct ClientHandle(Arc<ComputationManager>);

impl ClientHandle {
    pub(super) fn new(manager: Arc<ComputationManager>) -> Self {
        Self(manager)
    }

    /// Submits `computation`, blocking while its type's queue is full.
    ///
    /// Fails with [`Stopped`] if the manager is, or becomes, stopped while
    /// this call is blocked.
    pub fn request_computation(&self, computation: Computation) -> Result<RequestId, Stopped> {
        self.0.request_computation(computation)
    }

    /// Cancels `id` if it is still pending or in flight. A no-op if `id` has
    /// already been delivered, already aborted, or was never issued.
    pub fn abort_computation(&self, id: RequestId) {
        self.0.abort_computation(id);
    }

    /// Blocks until the oldest surviving submission has a result, then
    /// returns it.
    ///
    /// Fails with [`Stopped`] if the manager is, or becomes, stopped while
    /// this call is blocked.
    pub fn get_next_result(&self) -> Result<ComputationResult, Stopped> {
        self.0.get_next_result()
    }

    /// Unblocks every current and future waiter on this manager with
    /// [`Stopped`]. Equivalent to [`EngineHandle::stop`]; either facade may
    /// trigger shutdown. Idempotent.
    pub fn stop(&self) {
        self.0.stop();
    }
}

/// The facade held by compute-engine threads: pull work, poll for
/// cancellation, report results.
#[derive(Clone)]
pub struct EngineHandle(Arc<ComputationManager>);

impl EngineHandle {
    pub(super) fn new(manager: Arc<ComputationManager>) -> Self {
        Self(manager)
    }

    /// Blocks until `kind`'s queue is non-empty, then returns the oldest
    /// pending request of that type.
    ///
    /// Fails with [`Stopped`] if the manager is, or becomes, stopped while
    /// this call is blocked.
    pub fn get_work(&self, kind: ComputationType) -> Result<Request, Stopped> {
        self.0.get_work(kind)
    }

    /// Non-blocking. Returns `false` once the manager is stopped or once
    /// `id`'s computation has been aborted; engines are expected to poll this
    /// cooperatively and unwind a long-running computation voluntarily.
    pub fn continue_work(&self, id: RequestId) -> bool {
        self.0.continue_work(id)
    }

    /// Non-blocking. Reports `result`; silently discarded if `result.id` was
    /// aborted while the engine was computing it.
    pub fn provide_result(&self, result: ComputationResult) {
        self.0.provide_result(result);
    }

    /// Unblocks every current and future waiter on this manager with
    /// [`Stopped`]. Equivalent to [`ClientHandle::stop`]; either facade may
    /// trigger shutdown. Idempotent.
    pub fn stop(&self) {
        self.0.stop();
    }
}
