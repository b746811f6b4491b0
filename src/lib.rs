//! `computron` is a shared coordination buffer mediating deferred, typed
//! computations between two disjoint populations of threads: **clients**
//! that submit work and later retrieve results, and **compute engines**
//! that pull work, execute it, and return results.
//!
//! The manager enforces a bounded FIFO per [`ComputationType`], delivers
//! results to clients strictly in submission order regardless of the order
//! engines finish in, supports cooperative cancellation, and offers a
//! terminal [`stop`](ClientHandle::stop) that unblocks every current and
//! future waiter with [`Stopped`].
//!
//! # Example
//!
//! ```
//! use computron::{new_manager, Computation, ComputationResult, ComputationType, ManagerConfig};
//! use std::sync::Arc;
//!
//! let (client, engine) = new_manager(ManagerConfig::default());
//!
//! let id = client
//!     .request_computation(Computation::new(ComputationType::A, Arc::from(vec![1.0, 2.0])))
//!     .unwrap();
//!
//! let request = engine.get_work(ComputationType::A).unwrap();
//! assert_eq!(request.id, id);
//!
//! engine.provide_result(ComputationResult::new(id, 3.0));
//! let result = client.get_next_result().unwrap();
//! assert_eq!(result.value, 3.0);
//! ```
//!
//! # What this crate does not do
//!
//! No persistence, no inter-process transport, no priority scheduling beyond
//! FIFO-per-type plus global submission order, no fairness between
//! computation types, no dynamic queue resizing, and no duplicate-submission
//! detection. Driving the client and engine threads themselves, and anything
//! resembling a UI on top of this, is entirely the caller's concern.

mod config;
mod error;
mod manager;
mod types;

pub use config::ManagerConfig;
pub use error::Stopped;
pub use manager::{new_manager, ClientHandle, EngineHandle};
pub use types::{Computation, ComputationResult, ComputationType, Request, RequestId};
