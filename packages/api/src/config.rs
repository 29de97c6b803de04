//! Client configuration from environment variables.
//!
//! Native builds read `FITTRACK_API_URL` and `FITTRACK_API_TOKEN` (a `.env`
//! file is honoured). In the browser the API lives behind the dev proxy on the
//! page's own origin, so the base URL is `<origin>/api`.

use crate::error::ApiError;
use crate::request::{ApiClient, HttpTransport};

pub const API_URL_VAR: &str = "FITTRACK_API_URL";
pub const API_TOKEN_VAR: &str = "FITTRACK_API_TOKEN";

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API base URL without a trailing slash.
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Builder method to set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create config from environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from the page origin.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Config("no window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| ApiError::Config("page origin unavailable".to_string()))?;
        Ok(Self::new(format!("{origin}/api")))
    }

    /// Build a config from a variable lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = base_url.trim();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "{API_URL_VAR} must be an absolute http(s) URL, got {base_url:?}"
            )));
        }

        let mut config = Self::new(base_url);
        config.token = lookup(API_TOKEN_VAR).filter(|token| !token.is_empty());
        Ok(config)
    }

    pub fn http_transport(&self) -> HttpTransport {
        let transport = HttpTransport::new(self.base_url.clone());
        match self.token {
            Some(ref token) => transport.with_token(token.clone()),
            None => transport,
        }
    }

    pub fn client(&self) -> ApiClient<HttpTransport> {
        ApiClient::new(self.http_transport())
    }
}
