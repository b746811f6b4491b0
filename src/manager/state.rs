//! The data guarded by the monitor: per-type queues and the result ledger.
//!
//! Everything in this module is only ever touched while the owning
//! `ComputationManager`'s mutex is held; nothing here does its own locking.

use std::collections::VecDeque;

use crate::types::{ComputationType, Request, RequestId};

/// A ledger entry: an id and its result, if one has arrived yet.
///
/// Created empty at submission time, not at dispatch time, so result
/// ordering never depends on the order engines happen to finish work in.
#[derive(Debug, Clone)]
pub(crate) struct ResultSlot {
    pub(crate) id: RequestId,
    pub(crate) value: Option<f64>,
}

impl ResultSlot {
    pub(crate) const fn empty(id: RequestId) -> Self {
        Self { id, value: None }
    }
}

/// The monitor's protected state: one FIFO per computation type, the ordered
/// ledger of all live ids, the id counter, and the terminal shutdown flag.
pub(crate) struct ManagerState {
    pub(crate) queues: [VecDeque<Request>; 3],
    pub(crate) ledger: VecDeque<ResultSlot>,
    pub(crate) next_id: u64,
    pub(crate) stopped: bool,
}

impl ManagerState {
    pub(crate) fn new() -> Self {
        Self {
            queues: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
            ledger: VecDeque::new(),
            next_id: 0,
            stopped: false,
        }
    }

    pub(crate) fn queue(&self, kind: ComputationType) -> &VecDeque<Request> {
        &self.queues[kind.index()]
    }

    pub(crate) fn queue_mut(&mut self, kind: ComputationType) -> &mut VecDeque<Request> {
        &mut self.queues[kind.index()]
    }

    /// Assigns and returns the next id, advancing the counter.
    ///
    /// Callers must hold the monitor while calling this and while using the
    /// returned id to push the matching queue entry and ledger slot, so that
    /// id order, queue insertion order, and ledger insertion order all agree.
    pub(crate) fn next_request_id(&mut self) -> RequestId {
        let id = RequestId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes the request with `id` from whichever per-type queue holds it,
    /// returning the type it was removed from.
    pub(crate) fn remove_from_any_queue(&mut self, id: RequestId) -> Option<ComputationType> {
        for kind in ComputationType::ALL {
            let queue = self.queue_mut(kind);
            if let Some(pos) = queue.iter().position(|r| r.id == id) {
                queue.remove(pos);
                return Some(kind);
            }
        }
        None
    }

    /// Removes the ledger slot with `id`, if any, reporting whether it was
    /// still empty (i.e. the computation was in flight, not yet delivered).
    pub(crate) fn remove_ledger_slot(&mut self, id: RequestId) -> Option<bool> {
        let pos = self.ledger.iter().position(|s| s.id == id)?;
        let slot = self.ledger.remove(pos).expect("position was just found");
        Some(slot.value.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Computation;
    use std::sync::Arc;

    fn request(id: u64, kind: ComputationType) -> Request {
        Request {
            id: RequestId::new(id),
            computation: Computation::new(kind, Arc::from(vec![1.0])),
        }
    }

    #[test]
    fn ids_are_assigned_in_increasing_order() {
        let mut state = ManagerState::new();
        let ids: Vec<u64> = (0..5).map(|_| state.next_request_id().value()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn remove_from_any_queue_finds_the_right_type() {
        let mut state = ManagerState::new();
        state.queue_mut(ComputationType::B).push_back(request(5, ComputationType::B));
        assert_eq!(state.remove_from_any_queue(RequestId::new(5)), Some(ComputationType::B));
        assert!(state.queue(ComputationType::B).is_empty());
        assert_eq!(state.remove_from_any_queue(RequestId::new(5)), None);
    }

    #[test]
    fn remove_ledger_slot_reports_whether_it_was_in_flight() {
        let mut state = ManagerState::new();
        state.ledger.push_back(ResultSlot::empty(RequestId::new(1)));
        state.ledger.push_back(ResultSlot { id: RequestId::new(2), value: Some(3.0) });

        assert_eq!(state.remove_ledger_slot(RequestId::new(1)), Some(true));
        assert_eq!(state.remove_ledger_slot(RequestId::new(2)), Some(false));
        assert_eq!(state.remove_ledger_slot(RequestId::new(99)), None);
    }
}
