// =============================================================================
// Admin Backend - Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Application State
// 3. Router Setup
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod mock;
pub mod proxy;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

// -----------------------------------------------------------------------------
// 2. Application State
// -----------------------------------------------------------------------------

/// Prefix of the names under which backend clients are registered.
pub const BACKEND_CLIENT: &str = "backend";

/// Registry name for a backend client. The timeout is baked into the client,
/// so each distinct timeout gets its own entry.
pub fn backend_client_name(timeout: Duration) -> String {
    format!("{}-{}ms", BACKEND_CLIENT, timeout.as_millis())
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let timeout = config.upstream_timeout;
        let http = clients::get_or_init(&backend_client_name(timeout), || {
            reqwest::Client::builder().timeout(timeout).build()
        })?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

// -----------------------------------------------------------------------------
// 3. Router Setup
// -----------------------------------------------------------------------------

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Backend proxies
        .route("/api/register", post(proxy::register_user))
        .route("/api/profile", post(proxy::update_profile))
        // Mocks
        .route("/api/notifications/send", post(mock::send_notification));

    // Built frontend, with client-side routes falling back to index.html
    let router = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router,
    };

    router
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
