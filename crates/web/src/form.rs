// =============================================================================
// Admin Web - Reactive Form Binding
// =============================================================================
// Table of Contents:
// 1. FormHandle
// 2. Field Bindings
// 3. Submission
// =============================================================================

use std::future::Future;

use admin_common::{FormModel, FormPayload, FormPhase, SubmitBlocked};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

// -----------------------------------------------------------------------------
// 1. FormHandle
// -----------------------------------------------------------------------------

/// Reactive wrapper around a `FormModel`. Copyable into any closure.
pub struct FormHandle<P: FormPayload + 'static> {
    model: RwSignal<FormModel<P>>,
}

impl<P: FormPayload + 'static> Clone for FormHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FormPayload + 'static> Copy for FormHandle<P> {}

impl<P: FormPayload + 'static> FormHandle<P> {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(FormModel::new()),
        }
    }

    pub fn phase(&self) -> Signal<FormPhase> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.phase().clone()))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.is_submitting()))
    }

    /// True only while every required field is filled and nothing is in flight.
    pub fn can_submit(&self) -> Signal<bool> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.can_submit()))
    }

    pub fn reset(&self) {
        self.model.update(|m| m.reset());
    }
}

impl<P: FormPayload + 'static> Default for FormHandle<P> {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 2. Field Bindings
// -----------------------------------------------------------------------------

impl<P: FormPayload + 'static> FormHandle<P> {
    pub fn value(&self, id: &'static str) -> Signal<String> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.value(id).to_string()))
    }

    pub fn error(&self, id: &'static str) -> Signal<Option<String>> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.error(id).map(str::to_string)))
    }

    pub fn on_change(&self, id: &'static str) -> Callback<String> {
        let model = self.model;
        Callback::new(move |value: String| {
            model.update(|m| {
                m.set_value(id, value);
            });
        })
    }

    pub fn on_blur(&self, id: &'static str) -> Callback<()> {
        let model = self.model;
        Callback::new(move |_| model.update(|m| m.blur(id)))
    }
}

// -----------------------------------------------------------------------------
// 3. Submission
// -----------------------------------------------------------------------------

impl<P: FormPayload + 'static> FormHandle<P> {
    /// Validate and, when the form is complete, spawn exactly one request.
    /// The outcome lands in the model as `Succeeded` or `Failed`.
    pub fn submit<F, Fut>(&self, send: F)
    where
        F: FnOnce(P) -> Fut + 'static,
        Fut: Future<Output = Result<String, ApiError>> + 'static,
    {
        let model = self.model;
        let payload = match model.try_update(|m| m.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(SubmitBlocked::InFlight)) => {
                log::debug!("Submission ignored: a request is already in flight");
                return;
            }
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                log::debug!("Submission blocked by {} invalid field(s)", errors.len());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = send(payload).await.map_err(|e| e.user_message());
            match &outcome {
                Ok(message) => log::info!("Submission succeeded: {}", message),
                Err(message) => log::warn!("Submission failed: {}", message),
            }
            model.update(|m| m.finish(outcome));
        });
    }
}
