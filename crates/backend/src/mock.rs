// =============================================================================
// Admin Backend - Mock Endpoints
// =============================================================================
// Development stand-ins for backend features that do not exist yet. They keep
// the proxy's request/response shape so the frontend cannot tell them apart.
// =============================================================================

use admin_common::{ApiMessage, FormPayload, NotificationPayload};
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::error::ProxyError;
use crate::AppState;

pub const NOTIFICATION_SENT: &str = "Notificación enviada correctamente (mock)";

/// Required keys of `payload` that are absent, not strings, or blank.
pub fn missing_fields(payload: &Value, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|key| {
            payload
                .get(*key)
                .and_then(Value::as_str)
                .map_or(true, |value| value.trim().is_empty())
        })
        .collect()
}

/// Pretend to publish a push notification.
pub async fn send_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiMessage>, ProxyError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| ProxyError::InvalidBody)?;

    let required: Vec<&'static str> = NotificationPayload::FIELDS
        .iter()
        .filter(|field| field.required)
        .map(|field| field.id)
        .collect();
    let missing = missing_fields(&payload, &required);
    if !missing.is_empty() {
        return Err(ProxyError::MissingFields(missing));
    }

    tokio::time::sleep(state.config.mock_delay).await;
    tracing::info!(
        "Mock notification accepted for topic {}",
        payload["topic"].as_str().unwrap_or_default()
    );

    Ok(Json(ApiMessage::new(NOTIFICATION_SENT)))
}
