// =============================================================================
// Admin Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Main App Shell)
// 2. Header
// 3. Sidebar
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Layout (Main App Shell)
// -----------------------------------------------------------------------------

/// Main application layout with header, sidebar, and content area.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <div class="layout-body">
                <Sidebar />
                <main class="layout-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Header
// -----------------------------------------------------------------------------

/// Top header.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <a href="/" class="header-logo">
                    <span class="logo-text">"Panel de administración"</span>
                </a>
            </div>
        </header>
    }
}

// -----------------------------------------------------------------------------
// 3. Sidebar
// -----------------------------------------------------------------------------

/// Left sidebar navigation.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <nav class="sidebar-nav">
                <a href="/notifications" class="sidebar-link">
                    <span class="sidebar-icon">"🔔"</span>
                    <span class="sidebar-text">"Notificaciones"</span>
                </a>
                <a href="/users/register" class="sidebar-link">
                    <span class="sidebar-icon">"👤"</span>
                    <span class="sidebar-text">"Registrar usuario"</span>
                </a>
                <a href="/profile" class="sidebar-link">
                    <span class="sidebar-icon">"⚙️"</span>
                    <span class="sidebar-text">"Mi perfil"</span>
                </a>
            </nav>
        </aside>
    }
}
