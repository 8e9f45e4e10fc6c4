//! Fetch options

use std::time::Duration;

/// Options for downloading a page
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// Skip TLS certificate verification (default: true)
    pub accept_invalid_certs: bool,
    /// `User-Agent` header sent with the request
    pub user_agent: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment (default: true)
    pub system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            accept_invalid_certs: true,
            user_agent: concat!("placer/", env!("CARGO_PKG_VERSION")).to_string(),
            system_proxy: true,
        }
    }
}

impl FetchOptions {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Verify server certificates
    pub fn verify_certs(mut self, verify: bool) -> Self {
        self.accept_invalid_certs = !verify;
        self
    }

    /// Connect directly, ignoring proxy environment variables
    pub fn without_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
