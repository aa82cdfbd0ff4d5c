//! Replaying adapter for the `Transport` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{OperationCall, Transport, TransportError, TransportFuture};

/// Serves recorded transport results from a cassette, in order.
pub struct ReplayingTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTransport {
    /// Creates a replaying transport from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Transport for ReplayingTransport {
    fn execute(&self, _call: &OperationCall) -> TransportFuture<'_> {
        let next = match self.replayer.lock() {
            Ok(mut replayer) => replayer
                .next_interaction("transport", "execute")
                .map(|interaction| interaction.output.clone()),
            Err(e) => Err(format!("Replayer lock poisoned: {e}")),
        };
        Box::pin(async move { replay_result(next.map_err(TransportError::from)?) })
    }
}
