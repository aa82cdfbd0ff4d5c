//! Port traits defining external boundaries.
//!
//! The control plane is the only external system the client talks to.
//! Implementations live in `src/adapters/`.

pub mod transport;

pub use transport::{Operation, OperationCall, Transport, TransportError, TransportFuture};
