//! Extractor configuration

use std::time::Duration;

/// User agent sent with every remote fetch unless overridden
pub const DEFAULT_USER_AGENT: &str = concat!("email-json-extract/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP side of the extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Per-request timeout. `None` leaves latency bounds to the caller.
    pub timeout: Option<Duration>,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}
