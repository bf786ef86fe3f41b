// =============================================================================
// Admin Web - Global Application State
// =============================================================================

use crate::api::ApiClient;

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API base URL. Empty means the page's own origin.
    pub api_url: String,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        // Set at build time when the API is served from another origin
        let api_url = option_env!("ADMIN_API_URL").unwrap_or("").to_string();
        Self { api_url }
    }

    /// API client bound to the configured base URL.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.api_url.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
