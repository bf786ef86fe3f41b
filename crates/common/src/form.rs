// =============================================================================
// Admin Common - Form Container Model
// =============================================================================
// Table of Contents:
// 1. Field Declarations
// 2. Field Values & Errors
// 3. Form Phase
// 4. Form Model
// 5. Messages
// =============================================================================

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::payloads::FormPayload;

// -----------------------------------------------------------------------------
// 1. Field Declarations
// -----------------------------------------------------------------------------

/// Static declaration of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(id: &'static str, label: &'static str) -> Self {
        Self { id, label, required: true }
    }

    pub const fn optional(id: &'static str, label: &'static str) -> Self {
        Self { id, label, required: false }
    }

    /// Error for `value`, if any.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        (self.required && value.trim().is_empty()).then_some(REQUIRED_MESSAGE)
    }
}

// -----------------------------------------------------------------------------
// 2. Field Values & Errors
// -----------------------------------------------------------------------------

/// Current value of every declared field. Undeclared ids have no slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<&'static str, String>);

impl FieldValues {
    pub fn for_fields(fields: &[FieldSpec]) -> Self {
        Self(fields.iter().map(|f| (f.id, String::new())).collect())
    }

    /// Raw value, empty for unknown ids.
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or_default()
    }

    pub fn trimmed(&self, id: &str) -> String {
        self.get(id).trim().to_string()
    }

    /// Returns `false` when `id` is not a declared field.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.0.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}

/// Field id to error message. A missing entry means the field is valid.
pub type ErrorMap = BTreeMap<String, String>;

// -----------------------------------------------------------------------------
// 3. Form Phase
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Why `begin_submit` refused to produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("A submission is already in flight")]
    InFlight,

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ErrorMap),
}

// -----------------------------------------------------------------------------
// 4. Form Model
// -----------------------------------------------------------------------------

/// Values, errors and submission phase of one domain form.
#[derive(Debug, Clone)]
pub struct FormModel<P: FormPayload> {
    values: FieldValues,
    errors: ErrorMap,
    phase: FormPhase,
    _payload: PhantomData<fn() -> P>,
}

impl<P: FormPayload> Default for FormModel<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FormPayload> FormModel<P> {
    pub fn new() -> Self {
        Self {
            values: FieldValues::for_fields(P::FIELDS),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            _payload: PhantomData,
        }
    }

    fn spec(&self, id: &str) -> Option<&'static FieldSpec> {
        P::FIELDS.iter().find(|f| f.id == id)
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Update one field. Clears its error once the new value is valid.
    ///
    /// Returns `false` when the edit was dropped: unknown field, or a
    /// submission is in flight.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        let Some(spec) = self.spec(id) else {
            return false;
        };

        self.values.set(id, value);
        if spec.validate(self.values.get(id)).is_none() {
            self.errors.remove(id);
        }
        if matches!(self.phase, FormPhase::Succeeded(_) | FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
        true
    }

    /// Validate a single field when it loses focus.
    pub fn blur(&mut self, id: &str) {
        let Some(spec) = self.spec(id) else {
            return;
        };
        match spec.validate(self.values.get(id)) {
            Some(message) => {
                self.errors.insert(id.to_string(), message.to_string());
            }
            None => {
                self.errors.remove(id);
            }
        }
    }

    /// True while any required field is empty or whitespace-only.
    pub fn missing_required(&self) -> bool {
        P::FIELDS
            .iter()
            .any(|spec| spec.validate(self.values.get(spec.id)).is_some())
    }

    /// Whether the submit control should be enabled right now.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.missing_required()
    }

    /// Validate every field and, if all pass, enter `Submitting`.
    ///
    /// The returned payload holds declared fields only.
    pub fn begin_submit(&mut self) -> Result<P, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        self.phase = FormPhase::Validating;
        let errors: ErrorMap = P::FIELDS
            .iter()
            .filter_map(|spec| {
                spec.validate(self.values.get(spec.id))
                    .map(|message| (spec.id.to_string(), message.to_string()))
            })
            .collect();

        if !errors.is_empty() {
            self.errors = errors.clone();
            self.phase = FormPhase::Editing;
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        Ok(P::from_values(&self.values))
    }

    /// Record the outcome of the in-flight submission. Values are kept either
    /// way so a failed attempt can be resubmitted as is.
    pub fn finish(&mut self, outcome: Result<String, String>) {
        self.phase = match outcome {
            Ok(message) => FormPhase::Succeeded(message),
            Err(message) => FormPhase::Failed(message),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// -----------------------------------------------------------------------------
// 5. Messages
// -----------------------------------------------------------------------------

pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

const GENERIC_FAILURE: &str = "No se pudo completar la operación";

/// Text shown after a failed submission.
pub fn failure_message(detail: Option<&str>) -> String {
    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!("{GENERIC_FAILURE}: {detail}"),
        None => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::{NotificationPayload, ProfilePayload};

    type Composer = FormModel<NotificationPayload>;

    fn filled() -> Composer {
        let mut form = Composer::new();
        form.set_value("title", "Mantenimiento");
        form.set_value("description", "El sistema estará fuera de línea");
        form.set_value("topic", "sistema");
        form
    }

    #[test]
    fn submit_disabled_while_any_required_field_is_blank() {
        let mut form = Composer::new();
        assert!(!form.can_submit());

        form.set_value("title", "Hola");
        form.set_value("description", "Texto");
        assert!(!form.can_submit());

        form.set_value("topic", "   ");
        assert!(!form.can_submit());

        form.set_value("topic", "general");
        assert!(form.can_submit());

        form.set_value("title", "\t");
        assert!(!form.can_submit());
    }

    #[test]
    fn optional_fields_do_not_block_submit() {
        let mut form = FormModel::<ProfilePayload>::new();
        form.set_value("name", "Ana");
        form.set_value("email", "ana@example.com");
        assert!(form.can_submit());
    }

    #[test]
    fn blocked_submit_populates_errors_and_returns_to_editing() {
        let mut form = Composer::new();
        form.set_value("title", "Hola");

        let blocked = form.begin_submit().unwrap_err();
        let SubmitBlocked::Invalid(errors) = blocked else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(form.error("description"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error("title"), None);
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn valid_edit_clears_error() {
        let mut form = Composer::new();
        form.blur("title");
        assert_eq!(form.error("title"), Some(REQUIRED_MESSAGE));

        form.set_value("title", "  ");
        assert_eq!(form.error("title"), Some(REQUIRED_MESSAGE));

        form.set_value("title", "Aviso");
        assert_eq!(form.error("title"), None);
    }

    #[test]
    fn no_duplicate_submission_while_in_flight() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.topic, "sistema");
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert_eq!(form.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
        assert!(!form.set_value("title", "otro"));
        assert_eq!(form.value("title"), "Mantenimiento");
    }

    #[test]
    fn failure_keeps_values_for_retry() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(failure_message(Some("Tema desconocido"))));

        assert_eq!(
            form.phase(),
            &FormPhase::Failed("No se pudo completar la operación: Tema desconocido".into())
        );
        assert_eq!(form.value("description"), "El sistema estará fuera de línea");
        assert!(form.can_submit());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn editing_after_success_returns_to_editing() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Ok("ok".into()));
        assert_eq!(form.phase(), &FormPhase::Succeeded("ok".into()));

        form.set_value("title", "Nuevo");
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn undeclared_fields_never_reach_payload() {
        let mut form = filled();
        assert!(!form.set_value("admin", "true"));
        let payload = form.begin_submit().unwrap();
        let body = serde_json::to_value(payload).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 3);
        assert!(body.get("admin").is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.blur("title");
        form.reset();
        assert_eq!(form.value("title"), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn generic_failure_without_detail() {
        assert_eq!(failure_message(None), "No se pudo completar la operación");
        assert_eq!(failure_message(Some("  ")), "No se pudo completar la operación");
    }
}
