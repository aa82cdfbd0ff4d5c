//! Live adapter for the `Transport` port using the Volcengine OpenAPI.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::Deserialize;

use crate::config::{SessionConfig, VEPFS_API_VERSION};
use crate::error::BootstrapError;
use crate::ports::{OperationCall, Transport, TransportError, TransportFuture};

/// HTTP transport that posts operation calls to a vePFS endpoint.
///
/// Calls are sent as-is; signing, when required, is added by a request hook.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_version: String,
}

impl HttpTransport {
    /// Creates a transport targeting the session's endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(session: &SessionConfig) -> Result<Self, BootstrapError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self::with_client(client, &session.endpoint))
    }

    /// Creates a transport from the session resolved out of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials or region are missing, or the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self, BootstrapError> {
        let session = SessionConfig::from_env()?;
        tracing::debug!(region = %session.region, endpoint = %session.endpoint, "session resolved");
        Self::new(&session)
    }

    /// Creates a transport with a caller-supplied HTTP client.
    #[must_use]
    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version: VEPFS_API_VERSION.to_string(),
        }
    }

    /// Full URL for a call, including the `Action` and `Version` query.
    #[must_use]
    pub fn url_for(&self, call: &OperationCall) -> String {
        format!(
            "{}{}?Action={}&Version={}",
            self.endpoint, call.operation.http_path, call.operation.name, self.api_version
        )
    }
}

/// Response envelope shared by all actions.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    #[serde(default)]
    response_metadata: ResponseMetadata,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
struct ResponseMetadata {
    #[serde(default)]
    request_id: String,
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Turns a raw response into the result payload or an error.
fn decode_envelope(status: u16, text: &str) -> Result<serde_json::Value, TransportError> {
    let parsed = serde_json::from_str::<Envelope>(text);

    if let Ok(Envelope { response_metadata: ResponseMetadata { request_id, error: Some(e) }, .. }) =
        &parsed
    {
        return Err(format!(
            "vePFS API error ({status}): {}: {} (request id {request_id})",
            e.code, e.message
        )
        .into());
    }

    if !(200..300).contains(&status) {
        return Err(format!("vePFS API error ({status}): {text}").into());
    }

    let envelope = parsed.map_err(|e| -> TransportError {
        format!("Failed to parse vePFS API response: {e}").into()
    })?;
    Ok(envelope.result.unwrap_or_else(|| serde_json::json!({})))
}

impl Transport for HttpTransport {
    fn execute(&self, call: &OperationCall) -> TransportFuture<'_> {
        let url = self.url_for(call);
        let call = call.clone();

        Box::pin(async move {
            let method = Method::from_bytes(call.operation.http_method.as_bytes())
                .map_err(|e| -> TransportError { format!("Invalid HTTP method: {e}").into() })?;
            let body = serde_json::to_vec(&call.body).map_err(|e| -> TransportError {
                format!("Failed to encode request body: {e}").into()
            })?;

            let mut request = self.client.request(method, &url);
            for (name, value) in &call.headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = request.body(body).send().await.map_err(
                |e| -> TransportError { format!("vePFS API request failed: {e}").into() },
            )?;

            let status = response.status();
            let text = response.text().await.map_err(|e| -> TransportError {
                format!("Failed to read vePFS API response: {e}").into()
            })?;

            if !status.is_success() {
                tracing::warn!(
                    operation = %call.operation.name,
                    status = status.as_u16(),
                    "control plane returned an error status"
                );
            }

            decode_envelope(status.as_u16(), &text)
        })
    }
}
