//! Wire types shared by both facades: the closed set of computation kinds,
//! the submission payload, and the request/result pair that travels between
//! clients and engines.

use std::sync::Arc;

/// The closed set of computation kinds the manager routes work for.
///
/// Fixed at three variants per the reference design; all per-type structures
/// (queues, condition variables) are sized to `ComputationType::ALL.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputationType {
    A,
    B,
    C,
}

impl ComputationType {
    /// Every variant, in a stable order used to size and index per-type arrays.
    pub const ALL: [ComputationType; 3] = [ComputationType::A, ComputationType::B, ComputationType::C];

    /// Dense index into a `[T; 3]` array keyed by computation type.
    pub const fn index(self) -> usize {
        match self {
            ComputationType::A => 0,
            ComputationType::B => 1,
            ComputationType::C => 2,
        }
    }
}

/// A globally unique, strictly increasing identifier assigned to a submission
/// at the moment it is accepted by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw numeric value, exposed for callers that need to log or compare ids.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submission payload: a computation kind plus an immutable, shared buffer
/// of double-precision inputs.
///
/// The payload is `Arc<[f64]>` rather than `Vec<f64>` so that sharing it
/// between the submitting client, the queued request, and the executing
/// engine never copies the data and can never be mutated by any holder.
#[derive(Debug, Clone)]
pub struct Computation {
    pub kind: ComputationType,
    pub payload: Arc<[f64]>,
}

impl Computation {
    pub fn new(kind: ComputationType, payload: impl Into<Arc<[f64]>>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }
}

/// A [`Computation`] paired with the id assigned to it by the monitor.
///
/// This is what `getWork` hands back to an engine.
#[derive(Debug, Clone)]
pub struct Request {
    pub id: RequestId,
    pub computation: Computation,
}

/// The (id, value) pair an engine reports back via `provideResult`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputationResult {
    pub id: RequestId,
    pub value: f64,
}

impl ComputationResult {
    pub const fn new(id: RequestId, value: f64) -> Self {
        Self { id, value }
    }
}
