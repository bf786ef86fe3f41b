// =============================================================================
// Admin Backend - Credential Extraction
// =============================================================================

use axum_extra::extract::CookieJar;

/// Whether a proxied route needs the caller's credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Reply 401 without a token, otherwise forward it as `Bearer`.
    Required,
    /// Forward without any credential.
    Anonymous,
}

/// Extract the credential from the named cookie. Empty values count as absent.
pub fn extract_token(jar: &CookieJar, cookie_name: &str) -> Option<String> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
