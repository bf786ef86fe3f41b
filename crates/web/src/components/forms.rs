// =============================================================================
// Admin Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextField
// 2. TextArea
// 3. Dropdown
// =============================================================================
// All controls are stateless: they render `value`, report edits through
// `on_change(value)` and show `error` when it is non-blank. Accessibility
// linking and option resolution are delegated to `admin_common::fields`.
// =============================================================================

use admin_common::{described_by, error_element_id, selected_value, SelectOption};
use leptos::prelude::*;

/// Non-blank error text, if any.
fn visible(error: Signal<Option<String>>) -> Option<String> {
    error.get().filter(|message| !message.trim().is_empty())
}

/// Error message element referenced by the control's `aria-describedby`.
#[component]
fn FieldError(#[prop(into)] id: String, error: Signal<Option<String>>) -> impl IntoView {
    let element_id = error_element_id(&id);

    move || {
        visible(error).map(|message| {
            view! { <span class="form-error" id=element_id.clone() role="alert">{message}</span> }
        })
    }
}

/// Label with the required marker.
#[component]
fn FieldLabel(#[prop(into)] id: String, #[prop(into)] label: String, required: bool) -> impl IntoView {
    view! {
        <label class="form-label" for=id>
            {label}
            {required.then(|| view! { <span class="required">"*"</span> })}
        </label>
    }
}

// -----------------------------------------------------------------------------
// 1. TextField
// -----------------------------------------------------------------------------

/// Single-line input with label and error state.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::derive(|| None))] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let describedby = {
        let id = id.clone();
        move || described_by(&id, error.get().as_deref())
    };

    view! {
        <div class="form-field" class:has-error=move || visible(error).is_some()>
            <FieldLabel id=id.clone() label=label required=required />
            <input
                id=id.clone()
                name=id.clone()
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=required
                readonly=read_only
                disabled=move || disabled.get()
                aria-invalid=move || visible(error).map(|_| "true")
                aria-describedby=describedby
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(callback) = on_blur {
                        callback.run(());
                    }
                }
            />
            <FieldError id=id error=error />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::derive(|| None))] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    let describedby = {
        let id = id.clone();
        move || described_by(&id, error.get().as_deref())
    };

    view! {
        <div class="form-field" class:has-error=move || visible(error).is_some()>
            <FieldLabel id=id.clone() label=label required=required />
            <textarea
                id=id.clone()
                name=id.clone()
                class="form-textarea"
                placeholder=placeholder
                rows=rows.to_string()
                required=required
                readonly=read_only
                disabled=move || disabled.get()
                aria-invalid=move || visible(error).map(|_| "true")
                aria-describedby=describedby
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(callback) = on_blur {
                        callback.run(());
                    }
                }
            />
            <FieldError id=id error=error />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Dropdown
// -----------------------------------------------------------------------------

/// Select dropdown. `on_change` receives the chosen option's value; the
/// placeholder entry never reaches it.
#[component]
pub fn Dropdown(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<SelectOption>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::derive(|| None))] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
) -> impl IntoView {
    let describedby = {
        let id = id.clone();
        move || described_by(&id, error.get().as_deref())
    };
    let choices = options.clone();

    view! {
        <div class="form-field" class:has-error=move || visible(error).is_some()>
            <FieldLabel id=id.clone() label=label required=required />
            <select
                id=id.clone()
                name=id.clone()
                class="form-select"
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || visible(error).map(|_| "true")
                aria-describedby=describedby
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(selected) = selected_value(&choices, &event_target_value(&ev)) {
                        on_change.run(selected);
                    }
                }
                on:blur=move |_| {
                    if let Some(callback) = on_blur {
                        callback.run(());
                    }
                }
            >
                {(!placeholder.is_empty()).then(|| view! {
                    <option value="" disabled=true>{placeholder}</option>
                })}
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
            <FieldError id=id error=error />
        </div>
    }
}
