// =============================================================================
// Admin Common - Request/Response Payloads
// =============================================================================
// Table of Contents:
// 1. Payload Trait
// 2. Notification Payload
// 3. Register Payload
// 4. Profile Payload
// 5. Shared Response Body
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::fields::SelectOption;
use crate::form::{FieldSpec, FieldValues};

// -----------------------------------------------------------------------------
// 1. Payload Trait
// -----------------------------------------------------------------------------

/// Typed body built by a form from its declared fields.
///
/// `FIELDS` is the complete set of keys the form owns. Values of anything
/// else never reach the outbound request.
pub trait FormPayload: Serialize + Sized {
    const FIELDS: &'static [FieldSpec];

    fn from_values(values: &FieldValues) -> Self;
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// -----------------------------------------------------------------------------
// 2. Notification Payload
// -----------------------------------------------------------------------------

/// Topics a notification can be published to.
pub const TOPICS: &[(&str, &str)] = &[
    ("general", "General"),
    ("promociones", "Promociones"),
    ("novedades", "Novedades"),
    ("sistema", "Sistema"),
];

/// Roles assignable when registering an administrator.
pub const ROLES: &[(&str, &str)] = &[
    ("admin", "Administrador"),
    ("editor", "Editor"),
    ("viewer", "Lector"),
];

/// Convert a `(value, label)` table into dropdown options.
pub fn options(table: &[(&str, &str)]) -> Vec<SelectOption> {
    table
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

/// Push notification composed in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub description: String,
    pub topic: String,
}

impl FormPayload for NotificationPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", "Título"),
        FieldSpec::required("description", "Descripción"),
        FieldSpec::required("topic", "Tema"),
    ];

    fn from_values(values: &FieldValues) -> Self {
        Self {
            title: values.trimmed("title"),
            description: values.trimmed("description"),
            topic: values.trimmed("topic"),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Register Payload
// -----------------------------------------------------------------------------

/// New dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl FormPayload for RegisterPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Nombre"),
        FieldSpec::required("email", "Correo electrónico"),
        FieldSpec::required("password", "Contraseña"),
        FieldSpec::required("role", "Rol"),
    ];

    fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.trimmed("name"),
            email: values.trimmed("email"),
            // Leading/trailing spaces are significant in a password.
            password: values.get("password").to_string(),
            role: values.trimmed("role"),
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Profile Payload
// -----------------------------------------------------------------------------

/// Profile of the signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl FormPayload for ProfilePayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Nombre"),
        FieldSpec::required("email", "Correo electrónico"),
        FieldSpec::optional("phone", "Teléfono"),
        FieldSpec::optional("bio", "Biografía"),
    ];

    fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.trimmed("name"),
            email: values.trimmed("email"),
            phone: optional(values.trimmed("phone")),
            bio: optional(values.trimmed("bio")),
        }
    }
}

// -----------------------------------------------------------------------------
// 5. Shared Response Body
// -----------------------------------------------------------------------------

/// `{ "message": ... }` body used by the mock endpoint, the proxy's own
/// short-circuit replies and most backend errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
