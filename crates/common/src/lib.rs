// =============================================================================
// Admin Common - Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================

//! Form model shared by the admin frontend and the API server.
//!
//! Nothing in here knows about a UI framework or an HTTP stack. The web crate
//! binds [`form::FormModel`] to reactive signals, the backend reuses the
//! payload types and messages so both sides agree on the wire format.

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod fields;
pub mod form;
pub mod payloads;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use fields::{described_by, error_element_id, selected_value, SelectOption};
pub use form::{
    failure_message, ErrorMap, FieldSpec, FieldValues, FormModel, FormPhase, SubmitBlocked,
    REQUIRED_MESSAGE,
};
pub use payloads::{
    options, ApiMessage, FormPayload, NotificationPayload, ProfilePayload, RegisterPayload, ROLES, TOPICS,
};
