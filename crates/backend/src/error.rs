// =============================================================================
// Admin Backend - Error Types
// =============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const MISSING_TOKEN: &str = "No se pudo obtener el token";
pub const MISSING_FIELDS: &str = "Faltan campos obligatorios";
pub const INVALID_BODY: &str = "Cuerpo de la solicitud inválido";
pub const UPSTREAM_UNREACHABLE: &str = "Error al contactar el servidor";
pub const UPSTREAM_INVALID: &str = "Respuesta inválida del servidor";

/// Errors raised by the API layer itself. Backend replies, successful or not,
/// are relayed and never pass through here.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Credential cookie missing")]
    MissingToken,

    #[error("Request body is not valid JSON")]
    InvalidBody,

    #[error("Required fields missing: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned a non-JSON body (status {0})")]
    InvalidUpstreamBody(u16),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ProxyError::MissingToken => {
                tracing::warn!("Rejecting request: {}", self);
                (StatusCode::UNAUTHORIZED, json!({ "message": MISSING_TOKEN }))
            }
            ProxyError::InvalidBody => (StatusCode::BAD_REQUEST, json!({ "message": INVALID_BODY })),
            ProxyError::MissingFields(fields) => {
                tracing::debug!("Missing fields: {:?}", fields);
                (StatusCode::BAD_REQUEST, json!({ "message": MISSING_FIELDS }))
            }
            ProxyError::Transport(e) => {
                tracing::error!("Backend request failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "message": UPSTREAM_UNREACHABLE, "error": e.to_string() }),
                )
            }
            ProxyError::InvalidUpstreamBody(status) => {
                tracing::error!("Backend returned non-JSON body with status {}", status);
                (StatusCode::BAD_GATEWAY, json!({ "message": UPSTREAM_INVALID }))
            }
        };

        (status, Json(body)).into_response()
    }
}
