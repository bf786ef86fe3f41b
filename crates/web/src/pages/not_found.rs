// =============================================================================
// Admin Web - 404 Page
// =============================================================================

use leptos::prelude::*;

use crate::components::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="page page-not-found">
                <h1 class="page-title">"404"</h1>
                <p>"La página solicitada no existe."</p>
                <a href="/notifications" class="btn btn-primary">"Volver al inicio"</a>
            </div>
        </Layout>
    }
}
