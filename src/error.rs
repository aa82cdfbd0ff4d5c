//! Errors raised while bootstrapping a client.
//!
//! Per-call failures are not classified here; they travel as
//! [`TransportError`](crate::ports::TransportError).

use thiserror::Error;

/// Failure to construct a client from its environment.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A required environment variable is unset or blank.
    #[error("environment variable {name} is not set")]
    MissingVar {
        /// Name of the variable.
        name: &'static str,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
