//! Recording adapter for the `Transport` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{OperationCall, Transport, TransportFuture};

/// Records transport interactions while delegating to an inner implementation.
pub struct RecordingTransport {
    inner: Arc<dyn Transport>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTransport {
    /// Creates a new recording transport wrapping the given implementation.
    pub fn new(inner: Arc<dyn Transport>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, call: &OperationCall) -> TransportFuture<'_> {
        let call = call.clone();

        Box::pin(async move {
            let result = self.inner.execute(&call).await;
            record_result(&self.recorder, "transport", "execute", &call, &result);
            result
        })
    }
}
