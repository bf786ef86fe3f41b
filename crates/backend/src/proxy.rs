// =============================================================================
// Admin Backend - Backend Proxy Routes
// =============================================================================
// Each route forwards one JSON body to the backend and relays whatever comes
// back (status and body) without looking at it. The only replies produced
// here are the local short-circuits: missing credential, unreadable body,
// transport failure.
// =============================================================================

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::de::IgnoredAny;

use crate::auth::{extract_token, AuthRequirement};
use crate::error::ProxyError;
use crate::AppState;

// -----------------------------------------------------------------------------
// Route Table
// -----------------------------------------------------------------------------

/// One inbound route mapped onto a fixed backend path.
#[derive(Debug, Clone, Copy)]
pub struct ProxyRoute {
    pub name: &'static str,
    pub upstream_path: &'static str,
    pub auth: AuthRequirement,
}

pub const REGISTER: ProxyRoute = ProxyRoute {
    name: "register",
    upstream_path: "/api/admin/register",
    auth: AuthRequirement::Required,
};

pub const PROFILE: ProxyRoute = ProxyRoute {
    name: "profile",
    upstream_path: "/api/admin/profile",
    auth: AuthRequirement::Required,
};

// -----------------------------------------------------------------------------
// Forwarding
// -----------------------------------------------------------------------------

/// Forward `body` to the backend path of `route` and relay the reply.
pub async fn forward(
    state: &AppState,
    route: &ProxyRoute,
    jar: &CookieJar,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let token = match route.auth {
        AuthRequirement::Required => Some(
            extract_token(jar, &state.config.token_cookie).ok_or(ProxyError::MissingToken)?,
        ),
        AuthRequirement::Anonymous => None,
    };

    if !is_json(&body) {
        return Err(ProxyError::InvalidBody);
    }

    let url = format!("{}{}", state.config.backend_url, route.upstream_path);
    tracing::debug!("[{}] forwarding to {}", route.name, url);

    let mut request = state
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body);
    if let Some(token) = &token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    tracing::info!("[{}] backend replied {}", route.name, status);

    relay(status, bytes)
}

/// Whether `bytes` hold one well-formed JSON document. Nothing is kept.
fn is_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(bytes).is_ok()
}

/// Hand the backend reply to the caller byte for byte.
fn relay(status: StatusCode, bytes: Bytes) -> Result<Response, ProxyError> {
    if bytes.is_empty() {
        return Ok(status.into_response());
    }
    if !is_json(&bytes) {
        return Err(ProxyError::InvalidUpstreamBody(status.as_u16()));
    }
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(bytes),
    )
        .into_response())
}

// -----------------------------------------------------------------------------
// Handlers
// -----------------------------------------------------------------------------

/// Register a new dashboard user.
pub async fn register_user(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, &REGISTER, &jar, body).await
}

/// Update the signed-in administrator's profile.
pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, &PROFILE, &jar, body).await
}
