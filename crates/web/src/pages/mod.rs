// =============================================================================
// Admin Web - Page Components
// =============================================================================

pub mod notifications;
pub mod profile;
pub mod register;

pub mod not_found;
