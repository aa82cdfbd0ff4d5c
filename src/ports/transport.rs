//! Transport port executing operation calls against the control plane.

use std::collections::BTreeMap;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Error produced while executing a call. Passed through to callers unchanged.
pub type TransportError = Box<dyn Error + Send + Sync>;

/// Boxed future type alias used by [`Transport`] to keep the trait dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, TransportError>> + Send + 'a>>;

/// Identifies a remote procedure: its name and where it is routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Action name used for routing and signing (e.g. `"CreateLensTasks"`).
    pub name: String,
    /// HTTP method.
    pub http_method: String,
    /// HTTP path relative to the service endpoint.
    pub http_path: String,
}

impl Operation {
    /// Builds a descriptor for a `POST /` action, the convention of the API.
    #[must_use]
    pub fn post(name: impl Into<String>) -> Self {
        Self { name: name.into(), http_method: "POST".into(), http_path: "/".into() }
    }
}

/// A fully built, not yet executed call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationCall {
    /// What is being invoked.
    pub operation: Operation,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// JSON request body.
    pub body: serde_json::Value,
}

impl OperationCall {
    /// Creates a call with no headers.
    #[must_use]
    pub fn new(operation: Operation, body: serde_json::Value) -> Self {
        Self { operation, headers: BTreeMap::new(), body }
    }

    /// Sets a header, replacing any existing value whose name matches
    /// ignoring ASCII case.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.into());
    }

    /// Looks up a header ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Executes operation calls: transport, status handling and payload decoding.
pub trait Transport: Send + Sync {
    /// Sends the call and returns the decoded JSON result payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails (network, non-success status,
    /// service error, malformed body).
    fn execute(&self, call: &OperationCall) -> TransportFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut call = OperationCall::new(Operation::post("Ping"), json!({}));
        call.set_header("content-type", "text/plain");
        call.set_header("Content-Type", "application/json");

        assert_eq!(call.headers.len(), 1);
        assert_eq!(call.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn post_operation_targets_root() {
        let op = Operation::post("CreateLensTasks");
        assert_eq!(op.http_method, "POST");
        assert_eq!(op.http_path, "/");
    }
}
