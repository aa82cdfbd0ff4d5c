//! Adapter implementations of the port traits.
//!
//! - `live`: talks to the real control plane.
//! - `recording`: wraps another adapter and captures interactions to a cassette.
//! - `replaying`: serves interactions from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

use crate::ports::{OperationCall, Transport, TransportError, TransportFuture};

/// Transport for contexts that must never reach the network.
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn execute(&self, call: &OperationCall) -> TransportFuture<'_> {
        let name = call.operation.name.clone();
        Box::pin(async move {
            Err::<serde_json::Value, _>(TransportError::from(format!(
                "offline: refusing to send {name}"
            )))
        })
    }
}
