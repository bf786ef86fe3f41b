// =============================================================================
// Admin Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Card
// 3. Submission Status
// =============================================================================

use admin_common::FormPhase;
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Reusable button component. A loading button is always disabled.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] button_type: String,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(into, default = Signal::derive(|| false))] loading: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let button_type = if button_type.is_empty() { "button".to_string() } else { button_type };
    let handle_click = move |_| {
        if let Some(callback) = &on_click {
            callback.run(());
        }
    };

    view! {
        <button
            type=button_type
            class=variant.class()
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().then_some("true")
            on:click=handle_click
        >
            {move || loading.get().then(|| view! { <span class="spinner-small"></span> })}
            <span>{label}</span>
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {title.map(|t| view! {
                <div class="card-header">
                    <h3 class="card-title">{t}</h3>
                </div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Submission Status
// -----------------------------------------------------------------------------

/// Banner for the outcome of the last submission.
#[component]
pub fn SubmissionStatus(#[prop(into)] phase: Signal<FormPhase>) -> impl IntoView {
    move || match phase.get() {
        FormPhase::Succeeded(message) => Some(view! {
            <div class="status-banner status-success" role="status">
                <span class="status-message">{message}</span>
            </div>
        }.into_any()),
        FormPhase::Failed(message) => Some(view! {
            <div class="status-banner status-error" role="alert">
                <span class="status-icon">"⚠️"</span>
                <span class="status-message">{message}</span>
            </div>
        }.into_any()),
        _ => None,
    }
}
