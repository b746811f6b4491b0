//! The single error kind the manager can raise.

/// Raised by `request_computation`, `get_work`, and `get_next_result` when the
/// manager has been, or becomes, stopped while the caller was waiting.
///
/// Every other operation is infallible: unknown ids are treated as benign
/// races (see the crate-level docs) rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("computation manager has been stopped")]
pub struct Stopped;
