//! Endpoint configuration for the portal API. Values here are public; do not
//! store secrets in this struct.

use thiserror::Error;
use url::Url;

/// GraphQL endpoint used by the mobile client when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:2323/graphpl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("portal endpoint is not configured")]
    Missing,
    #[error("invalid portal endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported scheme {0}, expected http or https")]
    UnsupportedScheme(String),
    #[error("portal endpoint has no host")]
    MissingHost,
}

#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub endpoint: Url,
    pub user_agent: String,
}

impl PortalConfig {
    /// Parses and validates the GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty, not a URL, not http(s) or has no host.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Missing);
        }

        let url = Url::parse(endpoint)?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => {}
            _ => return Err(ConfigError::MissingHost),
        }

        Ok(Self {
            endpoint: url,
            user_agent: crate::APP_USER_AGENT.to_string(),
        })
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
