//! Session configuration resolved from the process environment.

use std::fmt;

use crate::error::BootstrapError;

/// Access key ID variable.
pub const ACCESS_KEY_ID_VAR: &str = "VOLCENGINE_ACCESS_KEY_ID";
/// Secret access key variable.
pub const ACCESS_KEY_SECRET_VAR: &str = "VOLCENGINE_ACCESS_KEY_SECRET";
/// Region variable; selects the regional endpoint.
pub const REGION_VAR: &str = "VOLCENGINE_REGION";
/// Optional endpoint override.
pub const ENDPOINT_VAR: &str = "VOLCENGINE_ENDPOINT";

/// vePFS control-plane API version sent with every action.
pub const VEPFS_API_VERSION: &str = "2022-01-01";

/// Static access-key credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Everything needed to reach the control plane of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Credentials, exposed to request hooks that sign calls.
    pub credentials: Credentials,
    /// Region, e.g. `cn-beijing`.
    pub region: String,
    /// Base URL of the vePFS endpoint, without a trailing slash.
    pub endpoint: String,
}

impl SessionConfig {
    /// Resolves the session from the process environment, loading `.env`
    /// first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::MissingVar`] if a required variable is unset
    /// or blank.
    pub fn from_env() -> Result<Self, BootstrapError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the session through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::MissingVar`] if a required variable is unset
    /// or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BootstrapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(BootstrapError::MissingVar { name })
        };

        let credentials = Credentials {
            access_key_id: required(ACCESS_KEY_ID_VAR)?,
            secret_access_key: required(ACCESS_KEY_SECRET_VAR)?,
        };
        let region = required(REGION_VAR)?;
        let endpoint = lookup(ENDPOINT_VAR)
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| regional_endpoint(&region));

        Ok(Self { credentials, region, endpoint })
    }
}

/// Default vePFS endpoint for a region.
#[must_use]
pub fn regional_endpoint(region: &str) -> String {
    format!("https://vepfs.{region}.volcengineapi.com")
}
