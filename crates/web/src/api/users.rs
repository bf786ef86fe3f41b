// =============================================================================
// Admin Web - Users API
// =============================================================================
// Table of Contents:
// 1. Registration
// 2. Profile
// =============================================================================

use super::{ApiClient, ApiError};
use admin_common::{ProfilePayload, RegisterPayload};

// -----------------------------------------------------------------------------
// 1. Registration
// -----------------------------------------------------------------------------

/// Register a new user.
pub async fn register_user(client: &ApiClient, payload: &RegisterPayload) -> Result<String, ApiError> {
    client.post("/api/register", payload).await
}

// -----------------------------------------------------------------------------
// 2. Profile
// -----------------------------------------------------------------------------

/// Update the signed-in user's profile.
pub async fn update_profile(client: &ApiClient, payload: &ProfilePayload) -> Result<String, ApiError> {
    client.post("/api/profile", payload).await
}
