// =============================================================================
// Admin Web - Notifications API
// =============================================================================

use super::{ApiClient, ApiError};
use admin_common::NotificationPayload;

/// Send a notification through the mock endpoint.
pub async fn send_notification(
    client: &ApiClient,
    payload: &NotificationPayload,
) -> Result<String, ApiError> {
    client.post("/api/notifications/send", payload).await
}
