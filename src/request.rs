//! Executable request handles.
//!
//! Building a request and sending it are separate steps so callers can
//! inspect or adjust the call in between.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::ports::{OperationCall, Transport, TransportError};

/// Hook run on every request after it is built and before it is sent.
pub type RequestHook = Arc<dyn Fn(&mut OperationCall) + Send + Sync>;

/// A built request bound to its transport and expected output type.
pub struct PendingRequest<O> {
    call: OperationCall,
    output: O,
    transport: Arc<dyn Transport>,
}

impl<O> PendingRequest<O>
where
    O: DeserializeOwned + Default,
{
    /// Binds a call to the transport that will execute it.
    #[must_use]
    pub fn new(call: OperationCall, transport: Arc<dyn Transport>) -> Self {
        Self { call, output: O::default(), transport }
    }

    /// The call that will be sent.
    #[must_use]
    pub fn call(&self) -> &OperationCall {
        &self.call
    }

    /// Mutable access to the call, for adjustments before sending.
    pub fn call_mut(&mut self) -> &mut OperationCall {
        &mut self.call
    }

    /// The output placeholder. Holds default values until the request is sent.
    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Executes the call and decodes the result into `O`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged, or a decode error if the
    /// payload does not match `O`.
    pub async fn send(self) -> Result<O, TransportError> {
        let Self { call, transport, .. } = self;
        tracing::debug!(operation = %call.operation.name, "sending request");
        let payload = transport.execute(&call).await?;
        let output = serde_json::from_value(payload).map_err(|e| -> TransportError {
            format!("Failed to decode {} response: {e}", call.operation.name).into()
        })?;
        Ok(output)
    }
}
