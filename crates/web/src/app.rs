// =============================================================================
// Admin Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Imports
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{
    not_found::NotFoundPage,
    notifications::NotificationComposerPage,
    profile::ProfileEditorPage,
    register::RegisterUserPage,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=NotificationComposerPage />
                <Route path=path!("/notifications") view=NotificationComposerPage />
                <Route path=path!("/users/register") view=RegisterUserPage />
                <Route path=path!("/profile") view=ProfileEditorPage />
            </Routes>
        </Router>
    }
}
