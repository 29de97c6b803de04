//! API client context for the UI.

use api::{ApiClient, ApiConfig, HttpTransport};
use dioxus::prelude::*;

/// The client every view uses to reach the backend.
pub type Client = ApiClient<HttpTransport>;

/// Get the API client provided by [`ApiProvider`].
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Provider component that builds the API client once.
/// Wrap your app with this component before using [`use_api`].
#[component]
pub fn ApiProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid API configuration, using defaults: {}", e);
            ApiConfig::default()
        });
        tracing::info!("API base URL: {}", config.base_url);
        config.client()
    });

    rsx! {
        {children}
    }
}
