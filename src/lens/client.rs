//! Client for the vePFS data-insight (Lens) task API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::model::{CreateLensTaskRequest, CreateLensTaskResponse};
use crate::adapters::live::HttpTransport;
use crate::error::BootstrapError;
use crate::ports::{Operation, OperationCall, Transport, TransportError};
use crate::request::{PendingRequest, RequestHook};

/// Action name of the task-creation call.
pub const CREATE_LENS_TASKS: &str = "CreateLensTasks";
/// Content type sent with every JSON request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Builds and executes Lens task calls through a [`Transport`].
#[derive(Clone)]
pub struct LensTaskClient {
    transport: Arc<dyn Transport>,
    request_hook: Option<RequestHook>,
}

impl LensTaskClient {
    /// Creates a client executing calls through `transport`, with no hook.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, request_hook: None }
    }

    /// Creates a live client from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials or region are missing, or the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self, BootstrapError> {
        Ok(Self::new(Arc::new(HttpTransport::from_env()?)))
    }

    /// Installs a hook run on every request before its content type is set
    /// and before it is sent.
    #[must_use]
    pub fn with_request_hook(mut self, hook: RequestHook) -> Self {
        self.request_hook = Some(hook);
        self
    }

    /// Builds a request for `operation` carrying `input` as its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` cannot be represented as JSON.
    pub fn new_request<I, O>(
        &self,
        operation: Operation,
        input: &I,
    ) -> Result<PendingRequest<O>, serde_json::Error>
    where
        I: Serialize,
        O: DeserializeOwned + Default,
    {
        let body = serde_json::to_value(input)?;
        let mut call = OperationCall::new(operation, body);
        tracing::debug!(operation = %call.operation.name, "built request");

        if let Some(hook) = &self.request_hook {
            tracing::debug!(operation = %call.operation.name, "applying request hook");
            hook(&mut call);
        }
        call.set_header("Content-Type", JSON_CONTENT_TYPE);

        Ok(PendingRequest::new(call, Arc::clone(&self.transport)))
    }

    /// Creates a data-insight task and returns its identifier.
    ///
    /// `None` is sent as a request with every field at its default.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged. No retry is attempted.
    pub async fn create_lens_task(
        &self,
        input: Option<CreateLensTaskRequest>,
    ) -> Result<CreateLensTaskResponse, TransportError> {
        self.create_lens_task_inner(input).send().await
    }

    /// Builds the task-creation request without sending it.
    ///
    /// The returned handle can be inspected or adjusted, then executed with
    /// [`PendingRequest::send`].
    #[must_use]
    pub fn create_lens_task_inner(
        &self,
        input: Option<CreateLensTaskRequest>,
    ) -> PendingRequest<CreateLensTaskResponse> {
        let input = input.unwrap_or_default();
        self.new_request(Operation::post(CREATE_LENS_TASKS), &input)
            .expect("CreateLensTaskRequest always serializes to JSON")
    }
}
