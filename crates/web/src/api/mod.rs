// =============================================================================
// Admin Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. API Client
// 4. Response Mapping
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

pub mod notifications;
pub mod users;

pub use notifications::*;
pub use users::*;

use admin_common::{failure_message, ApiMessage};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

/// Shown when a successful reply carries no message.
pub const DEFAULT_SUCCESS: &str = "Operación completada correctamente";

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Unauthorized")]
    Unauthorized(Option<String>),
}

impl ApiError {
    /// Message from the server, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } | ApiError::Unauthorized(message) => message.as_deref(),
            ApiError::Network(_) | ApiError::Serialize(_) | ApiError::Deserialize(_) => None,
        }
    }

    /// Text for the form's failure banner.
    pub fn user_message(&self) -> String {
        failure_message(self.detail())
    }
}

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// HTTP client for API requests. The credential cookie travels with every
/// request; the server side attaches the bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client. An empty base URL targets the page's origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST a JSON body and return the server's confirmation message.
    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let outcome = settle(status, response.text().await);
        if let Err(e) = &outcome {
            log::warn!("POST {} failed: {}", url, e);
        }
        outcome
    }
}

// -----------------------------------------------------------------------------
// 4. Response Mapping
// -----------------------------------------------------------------------------

/// Like `interpret`, for a body read that may itself have failed.
fn settle(status: u16, body: Result<String, gloo_net::Error>) -> Result<String, ApiError> {
    match body {
        Ok(text) => interpret(status, &text),
        Err(e) => Err(ApiError::Network(format!("could not read response body: {e}"))),
    }
}

/// Map a status and raw body into the success message or an `ApiError`.
pub fn interpret(status: u16, body: &str) -> Result<String, ApiError> {
    let message = || {
        serde_json::from_str::<ApiMessage>(body)
            .ok()
            .map(|m| m.message)
            .filter(|m| !m.trim().is_empty())
    };

    match status {
        200..=299 if body.trim().is_empty() => Ok(DEFAULT_SUCCESS.to_string()),
        200..=299 => match serde_json::from_str::<serde_json::Value>(body) {
            Ok(_) => Ok(message().unwrap_or_else(|| DEFAULT_SUCCESS.to_string())),
            Err(e) => Err(ApiError::Deserialize(e.to_string())),
        },
        401 => Err(ApiError::Unauthorized(message())),
        _ => Err(ApiError::Server {
            status,
            message: message(),
        }),
    }
}
