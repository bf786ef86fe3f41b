// =============================================================================
// Admin Web - Profile Editor Page
// =============================================================================

use admin_common::ProfilePayload;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::{Button, Card, Layout, SubmissionStatus, TextArea, TextField};
use crate::form::FormHandle;
use crate::state::AppState;

/// Edit the signed-in administrator's profile. Phone and bio are optional.
#[component]
pub fn ProfileEditorPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = FormHandle::<ProfilePayload>::new();
    let can_submit = form.can_submit();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let client = app_state.client();
        form.submit(move |payload| async move { api::update_profile(&client, &payload).await });
    };

    view! {
        <Layout>
            <div class="page page-profile">
                <h1 class="page-title">"Mi perfil"</h1>
                <Card>
                    <form class="form" on:submit=on_submit novalidate=true>
                        <TextField
                            id="name"
                            label="Nombre"
                            value=form.value("name")
                            on_change=form.on_change("name")
                            on_blur=form.on_blur("name")
                            error=form.error("name")
                            required=true
                            disabled=form.submitting()
                        />
                        <TextField
                            id="email"
                            label="Correo electrónico"
                            input_type="email"
                            value=form.value("email")
                            on_change=form.on_change("email")
                            on_blur=form.on_blur("email")
                            error=form.error("email")
                            required=true
                            disabled=form.submitting()
                        />
                        <TextField
                            id="phone"
                            label="Teléfono"
                            input_type="tel"
                            value=form.value("phone")
                            on_change=form.on_change("phone")
                            disabled=form.submitting()
                        />
                        <TextArea
                            id="bio"
                            label="Biografía"
                            rows=6
                            value=form.value("bio")
                            on_change=form.on_change("bio")
                            disabled=form.submitting()
                        />
                        <SubmissionStatus phase=form.phase() />
                        <div class="form-actions">
                            <Button
                                label="Guardar cambios"
                                button_type="submit"
                                disabled=Signal::derive(move || !can_submit.get())
                                loading=form.submitting()
                            />
                        </div>
                    </form>
                </Card>
            </div>
        </Layout>
    }
}
